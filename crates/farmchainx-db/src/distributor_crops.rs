use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres};

use farmchainx_core::error::AppError;
use farmchainx_core::models::{DistributorCrop, NewDistributorCrop};

/// Repository for lots held by distributors.
#[derive(Clone)]
pub struct DistributorCropRepository {
    pool: Pool<Postgres>,
}

impl DistributorCropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        crop: &NewDistributorCrop,
    ) -> Result<DistributorCrop, AppError> {
        let row = sqlx::query_as::<_, DistributorCropRow>(
            r#"
            INSERT INTO distributor_crops (
                user_id, farmer_crop_id, distributor_code, distributor_name,
                distributor_location, received_date, received_from_farmer_code,
                received_from_farmer_name, farmer_location, quantity, quantity_unit,
                price_per_unit, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(crop.farmer_crop_id)
        .bind(&crop.distributor_code)
        .bind(&crop.distributor_name)
        .bind(&crop.distributor_location)
        .bind(crop.received_date)
        .bind(&crop.received_from_farmer_code)
        .bind(&crop.received_from_farmer_name)
        .bind(&crop.farmer_location)
        .bind(crop.quantity)
        .bind(&crop.quantity_unit)
        .bind(crop.price_per_unit)
        .bind(&crop.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn find(&self, id: i64) -> Result<Option<DistributorCrop>, AppError> {
        let row =
            sqlx::query_as::<_, DistributorCropRow>(r#"SELECT * FROM distributor_crops WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<DistributorCrop>, AppError> {
        let rows = sqlx::query_as::<_, DistributorCropRow>(
            r#"SELECT * FROM distributor_crops WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Public catalog of every distributor lot, newest first.
    pub async fn list_all(&self) -> Result<Vec<DistributorCrop>, AppError> {
        let rows = sqlx::query_as::<_, DistributorCropRow>(
            r#"SELECT * FROM distributor_crops ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Lots owned by the distributor holding the given public code.
    pub async fn list_by_distributor_code(
        &self,
        code: &str,
    ) -> Result<Vec<DistributorCrop>, AppError> {
        let rows = sqlx::query_as::<_, DistributorCropRow>(
            r#"
            SELECT c.* FROM distributor_crops c
            JOIN users u ON u.id = c.user_id
            WHERE u.distributor_code = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full field-by-field replace of a lot record.
    pub async fn update(
        &self,
        id: i64,
        crop: &NewDistributorCrop,
    ) -> Result<DistributorCrop, AppError> {
        let row = sqlx::query_as::<_, DistributorCropRow>(
            r#"
            UPDATE distributor_crops
            SET farmer_crop_id = $2, distributor_code = $3, distributor_name = $4,
                distributor_location = $5, received_date = $6,
                received_from_farmer_code = $7, received_from_farmer_name = $8,
                farmer_location = $9, quantity = $10, quantity_unit = $11,
                price_per_unit = $12, status = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(crop.farmer_crop_id)
        .bind(&crop.distributor_code)
        .bind(&crop.distributor_name)
        .bind(&crop.distributor_location)
        .bind(crop.received_date)
        .bind(&crop.received_from_farmer_code)
        .bind(&crop.received_from_farmer_name)
        .bind(&crop.farmer_location)
        .bind(crop.quantity)
        .bind(&crop.quantity_unit)
        .bind(crop.price_per_unit)
        .bind(&crop.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM distributor_crops WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Crop not found: {id}")));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM distributor_crops"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct DistributorCropRow {
    id: i64,
    user_id: i64,
    farmer_crop_id: i64,
    distributor_code: Option<String>,
    distributor_name: Option<String>,
    distributor_location: Option<String>,
    received_date: Option<NaiveDate>,
    received_from_farmer_code: Option<String>,
    received_from_farmer_name: Option<String>,
    farmer_location: Option<String>,
    quantity: f64,
    quantity_unit: Option<String>,
    price_per_unit: Option<f64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DistributorCropRow> for DistributorCrop {
    fn from(row: DistributorCropRow) -> Self {
        DistributorCrop {
            id: row.id,
            user_id: row.user_id,
            farmer_crop_id: row.farmer_crop_id,
            distributor_code: row.distributor_code,
            distributor_name: row.distributor_name,
            distributor_location: row.distributor_location,
            received_date: row.received_date,
            received_from_farmer_code: row.received_from_farmer_code,
            received_from_farmer_name: row.received_from_farmer_name,
            farmer_location: row.farmer_location,
            quantity: row.quantity,
            quantity_unit: row.quantity_unit,
            price_per_unit: row.price_per_unit,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
