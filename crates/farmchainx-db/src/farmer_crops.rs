use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres};

use farmchainx_core::error::AppError;
use farmchainx_core::models::{FarmerCrop, NewFarmerCrop};

/// Repository for farmer crop records, the root entities of the trace chain.
#[derive(Clone)]
pub struct FarmerCropRepository {
    pool: Pool<Postgres>,
}

impl FarmerCropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, crop: &NewFarmerCrop) -> Result<FarmerCrop, AppError> {
        let row = sqlx::query_as::<_, FarmerCropRow>(
            r#"
            INSERT INTO farmer_crops (
                user_id, name, crop_type, harvest_date, expiry_date, soil_type,
                pesticides_used, image_url, farmer_code, farmer_name, farmer_location,
                quantity, quantity_unit, price_per_unit, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&crop.name)
        .bind(&crop.crop_type)
        .bind(crop.harvest_date)
        .bind(crop.expiry_date)
        .bind(&crop.soil_type)
        .bind(&crop.pesticides_used)
        .bind(&crop.image_url)
        .bind(&crop.farmer_code)
        .bind(&crop.farmer_name)
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

    pub async fn find(&self, id: i64) -> Result<Option<FarmerCrop>, AppError> {
        let row = sqlx::query_as::<_, FarmerCropRow>(r#"SELECT * FROM farmer_crops WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// All crops owned by `user_id`, newest first.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<FarmerCrop>, AppError> {
        let rows = sqlx::query_as::<_, FarmerCropRow>(
            r#"SELECT * FROM farmer_crops WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Public catalog of every farmer crop, newest first.
    pub async fn list_all(&self) -> Result<Vec<FarmerCrop>, AppError> {
        let rows = sqlx::query_as::<_, FarmerCropRow>(
            r#"SELECT * FROM farmer_crops ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Crops owned by the farmer holding the given public code.
    pub async fn list_by_farmer_code(&self, code: &str) -> Result<Vec<FarmerCrop>, AppError> {
        let rows = sqlx::query_as::<_, FarmerCropRow>(
            r#"
            SELECT c.* FROM farmer_crops c
            JOIN users u ON u.id = c.user_id
            WHERE u.farmer_code = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full field-by-field replace of a crop record.
    pub async fn update(&self, id: i64, crop: &NewFarmerCrop) -> Result<FarmerCrop, AppError> {
        let row = sqlx::query_as::<_, FarmerCropRow>(
            r#"
            UPDATE farmer_crops
            SET name = $2, crop_type = $3, harvest_date = $4, expiry_date = $5,
                soil_type = $6, pesticides_used = $7, image_url = $8,
                farmer_code = $9, farmer_name = $10, farmer_location = $11,
                quantity = $12, quantity_unit = $13, price_per_unit = $14, status = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&crop.name)
        .bind(&crop.crop_type)
        .bind(crop.harvest_date)
        .bind(crop.expiry_date)
        .bind(&crop.soil_type)
        .bind(&crop.pesticides_used)
        .bind(&crop.image_url)
        .bind(&crop.farmer_code)
        .bind(&crop.farmer_name)
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
        let result = sqlx::query(r#"DELETE FROM farmer_crops WHERE id = $1"#)
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
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM farmer_crops"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct FarmerCropRow {
    id: i64,
    user_id: i64,
    name: String,
    crop_type: String,
    harvest_date: NaiveDate,
    expiry_date: NaiveDate,
    soil_type: String,
    pesticides_used: Option<String>,
    image_url: Option<String>,
    farmer_code: Option<String>,
    farmer_name: Option<String>,
    farmer_location: Option<String>,
    quantity: Option<f64>,
    quantity_unit: Option<String>,
    price_per_unit: Option<f64>,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<FarmerCropRow> for FarmerCrop {
    fn from(row: FarmerCropRow) -> Self {
        FarmerCrop {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            crop_type: row.crop_type,
            harvest_date: row.harvest_date,
            expiry_date: row.expiry_date,
            soil_type: row.soil_type,
            pesticides_used: row.pesticides_used,
            image_url: row.image_url,
            farmer_code: row.farmer_code,
            farmer_name: row.farmer_name,
            farmer_location: row.farmer_location,
            quantity: row.quantity,
            quantity_unit: row.quantity_unit,
            price_per_unit: row.price_per_unit,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
