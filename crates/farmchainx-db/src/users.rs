use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewUser, User, UserRole};

/// Repository for account persistence in PostgreSQL.
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account. The unique email constraint surfaces as a
    /// validation error so the handler can answer 400; a collision on an
    /// actor code (two registrations racing past the exists check) is a
    /// conflict, not an email problem.
    pub async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, role, name, location, farmer_code, distributor_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.name)
        .bind(&user.location)
        .bind(&user.farmer_code)
        .bind(&user.distributor_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => match db.constraint() {
                Some(c) if c.contains("email") => {
                    AppError::Validation("Email already exists".into())
                }
                Some(c) if c.contains("code") => {
                    AppError::Conflict("Actor code already in use".into())
                }
                _ => AppError::DatabaseError(e.to_string()),
            },
            _ => AppError::DatabaseError(e.to_string()),
        })?;

        row.try_into()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }

    /// True if any account already holds this farmer code.
    pub async fn farmer_code_exists(&self, code: &str) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS(SELECT 1 FROM users WHERE farmer_code = $1)"#)
                .bind(code)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }

    /// True if any account already holds this distributor code.
    pub async fn distributor_code_exists(&self, code: &str) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS(SELECT 1 FROM users WHERE distributor_code = $1)"#)
                .bind(code)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users ORDER BY created_at DESC"#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }

    /// Delete an account and every chain record it owns, atomically.
    pub async fn delete_cascade(&self, user_id: i64) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        for table in [
            "consumer_purchases",
            "retailer_crops",
            "distributor_crops",
            "farmer_crops",
        ] {
            sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        }

        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User not found: {user_id}")));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
    name: String,
    location: Option<String>,
    farmer_code: Option<String>,
    distributor_code: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, AppError> {
        let role: UserRole = row
            .role
            .parse()
            .map_err(|e: String| AppError::DatabaseError(e))?;
        Ok(User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            role,
            name: row.name,
            location: row.location,
            farmer_code: row.farmer_code,
            distributor_code: row.distributor_code,
            created_at: row.created_at,
        })
    }
}
