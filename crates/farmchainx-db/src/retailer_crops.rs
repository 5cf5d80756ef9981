use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres};

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewRetailerCrop, RetailerCrop};

/// Repository for lots held by retailers.
#[derive(Clone)]
pub struct RetailerCropRepository {
    pool: Pool<Postgres>,
}

impl RetailerCropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        crop: &NewRetailerCrop,
    ) -> Result<RetailerCrop, AppError> {
        let row = sqlx::query_as::<_, RetailerCropRow>(
            r#"
            INSERT INTO retailer_crops (
                user_id, distributor_crop_id, retailer_code, retailer_name,
                retailer_location, received_date, received_from_distributor_code,
                received_from_distributor_name, distributor_location, quantity,
                quantity_unit, price_per_unit, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(crop.distributor_crop_id)
        .bind(&crop.retailer_code)
        .bind(&crop.retailer_name)
        .bind(&crop.retailer_location)
        .bind(crop.received_date)
        .bind(&crop.received_from_distributor_code)
        .bind(&crop.received_from_distributor_name)
        .bind(&crop.distributor_location)
        .bind(crop.quantity)
        .bind(&crop.quantity_unit)
        .bind(crop.price_per_unit)
        .bind(&crop.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn find(&self, id: i64) -> Result<Option<RetailerCrop>, AppError> {
        let row =
            sqlx::query_as::<_, RetailerCropRow>(r#"SELECT * FROM retailer_crops WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<RetailerCrop>, AppError> {
        let rows = sqlx::query_as::<_, RetailerCropRow>(
            r#"SELECT * FROM retailer_crops WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full field-by-field replace of a lot record.
    pub async fn update(&self, id: i64, crop: &NewRetailerCrop) -> Result<RetailerCrop, AppError> {
        let row = sqlx::query_as::<_, RetailerCropRow>(
            r#"
            UPDATE retailer_crops
            SET distributor_crop_id = $2, retailer_code = $3, retailer_name = $4,
                retailer_location = $5, received_date = $6,
                received_from_distributor_code = $7, received_from_distributor_name = $8,
                distributor_location = $9, quantity = $10, quantity_unit = $11,
                price_per_unit = $12, status = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(crop.distributor_crop_id)
        .bind(&crop.retailer_code)
        .bind(&crop.retailer_name)
        .bind(&crop.retailer_location)
        .bind(crop.received_date)
        .bind(&crop.received_from_distributor_code)
        .bind(&crop.received_from_distributor_name)
        .bind(&crop.distributor_location)
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
        let result = sqlx::query(r#"DELETE FROM retailer_crops WHERE id = $1"#)
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
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM retailer_crops"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct RetailerCropRow {
    id: i64,
    user_id: i64,
    distributor_crop_id: i64,
    retailer_code: Option<String>,
    retailer_name: Option<String>,
    retailer_location: Option<String>,
    received_date: Option<NaiveDate>,
    received_from_distributor_code: Option<String>,
    received_from_distributor_name: Option<String>,
    distributor_location: Option<String>,
    quantity: f64,
    quantity_unit: Option<String>,
    price_per_unit: Option<f64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RetailerCropRow> for RetailerCrop {
    fn from(row: RetailerCropRow) -> Self {
        RetailerCrop {
            id: row.id,
            user_id: row.user_id,
            distributor_crop_id: row.distributor_crop_id,
            retailer_code: row.retailer_code,
            retailer_name: row.retailer_name,
            retailer_location: row.retailer_location,
            received_date: row.received_date,
            received_from_distributor_code: row.received_from_distributor_code,
            received_from_distributor_name: row.received_from_distributor_name,
            distributor_location: row.distributor_location,
            quantity: row.quantity,
            quantity_unit: row.quantity_unit,
            price_per_unit: row.price_per_unit,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
