use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres};

use farmchainx_core::error::AppError;
use farmchainx_core::models::{ConsumerPurchase, NewConsumerPurchase};

/// Repository for purchases recorded by consumers at the end of the chain.
#[derive(Clone)]
pub struct PurchaseRepository {
    pool: Pool<Postgres>,
}

impl PurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        purchase: &NewConsumerPurchase,
    ) -> Result<ConsumerPurchase, AppError> {
        let row = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"
            INSERT INTO consumer_purchases (
                user_id, retailer_crop_id, consumer_code, consumer_name,
                consumer_location, purchase_date, purchased_from_retailer_code,
                purchased_from_retailer_name, retailer_location, quantity,
                quantity_unit, price_per_unit, total_price, payment_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(purchase.retailer_crop_id)
        .bind(&purchase.consumer_code)
        .bind(&purchase.consumer_name)
        .bind(&purchase.consumer_location)
        .bind(purchase.purchase_date)
        .bind(&purchase.purchased_from_retailer_code)
        .bind(&purchase.purchased_from_retailer_name)
        .bind(&purchase.retailer_location)
        .bind(purchase.quantity)
        .bind(&purchase.quantity_unit)
        .bind(purchase.price_per_unit)
        .bind(purchase.total_price)
        .bind(&purchase.payment_status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn find(&self, id: i64) -> Result<Option<ConsumerPurchase>, AppError> {
        let row = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"SELECT * FROM consumer_purchases WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    pub async fn list_all(&self) -> Result<Vec<ConsumerPurchase>, AppError> {
        let rows = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"SELECT * FROM consumer_purchases ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<ConsumerPurchase>, AppError> {
        let rows = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"SELECT * FROM consumer_purchases WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_payment_status(
        &self,
        status: &str,
    ) -> Result<Vec<ConsumerPurchase>, AppError> {
        let rows = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"SELECT * FROM consumer_purchases WHERE payment_status = $1 ORDER BY created_at DESC"#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full field-by-field replace of a purchase record.
    pub async fn update(
        &self,
        id: i64,
        purchase: &NewConsumerPurchase,
    ) -> Result<ConsumerPurchase, AppError> {
        let row = sqlx::query_as::<_, ConsumerPurchaseRow>(
            r#"
            UPDATE consumer_purchases
            SET retailer_crop_id = $2, consumer_code = $3, consumer_name = $4,
                consumer_location = $5, purchase_date = $6,
                purchased_from_retailer_code = $7, purchased_from_retailer_name = $8,
                retailer_location = $9, quantity = $10, quantity_unit = $11,
                price_per_unit = $12, total_price = $13, payment_status = $14,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(purchase.retailer_crop_id)
        .bind(&purchase.consumer_code)
        .bind(&purchase.consumer_name)
        .bind(&purchase.consumer_location)
        .bind(purchase.purchase_date)
        .bind(&purchase.purchased_from_retailer_code)
        .bind(&purchase.purchased_from_retailer_name)
        .bind(&purchase.retailer_location)
        .bind(purchase.quantity)
        .bind(&purchase.quantity_unit)
        .bind(purchase.price_per_unit)
        .bind(purchase.total_price)
        .bind(&purchase.payment_status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        row.map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Purchase not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM consumer_purchases WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Purchase not found: {id}")));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM consumer_purchases"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ConsumerPurchaseRow {
    id: i64,
    user_id: i64,
    retailer_crop_id: i64,
    consumer_code: Option<String>,
    consumer_name: Option<String>,
    consumer_location: Option<String>,
    purchase_date: Option<NaiveDate>,
    purchased_from_retailer_code: Option<String>,
    purchased_from_retailer_name: Option<String>,
    retailer_location: Option<String>,
    quantity: f64,
    quantity_unit: Option<String>,
    price_per_unit: Option<f64>,
    total_price: Option<f64>,
    payment_status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ConsumerPurchaseRow> for ConsumerPurchase {
    fn from(row: ConsumerPurchaseRow) -> Self {
        ConsumerPurchase {
            id: row.id,
            user_id: row.user_id,
            retailer_crop_id: row.retailer_crop_id,
            consumer_code: row.consumer_code,
            consumer_name: row.consumer_name,
            consumer_location: row.consumer_location,
            purchase_date: row.purchase_date,
            purchased_from_retailer_code: row.purchased_from_retailer_code,
            purchased_from_retailer_name: row.purchased_from_retailer_name,
            retailer_location: row.retailer_location,
            quantity: row.quantity,
            quantity_unit: row.quantity_unit,
            price_per_unit: row.price_per_unit,
            total_price: row.total_price,
            payment_status: row.payment_status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
