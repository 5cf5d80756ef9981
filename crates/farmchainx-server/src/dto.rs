use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use farmchainx_core::models::{ConsumerPurchase, DistributorCrop, FarmerCrop, RetailerCrop, User};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// One of FARMER, DISTRIBUTOR, RETAILER, CONSUMER, ADMIN.
    pub role: String,
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub email: String,
    pub role: String,
    pub name: String,
    pub location: Option<String>,
    pub farmer_code: Option<String>,
    pub distributor_code: Option<String>,
}

impl AuthResponse {
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            id: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            name: user.name.clone(),
            location: user.location.clone(),
            farmer_code: user.farmer_code.clone(),
            distributor_code: user.distributor_code.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub name: String,
    pub location: Option<String>,
    pub farmer_code: Option<String>,
    pub distributor_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.to_string(),
            name: user.name,
            location: user.location,
            farmer_code: user.farmer_code,
            distributor_code: user.distributor_code,
            created_at: user.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Farmer crops
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct FarmerCropRequest {
    pub name: String,
    pub crop_type: String,
    pub harvest_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub soil_type: String,
    pub pesticides_used: Option<String>,
    pub image_url: Option<String>,
    pub quantity: Option<f64>,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    /// Defaults to IN_STOCK when omitted.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FarmerCropResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub crop_type: String,
    pub harvest_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub soil_type: String,
    pub pesticides_used: Option<String>,
    pub image_url: Option<String>,
    pub farmer_code: Option<String>,
    pub farmer_name: Option<String>,
    pub farmer_location: Option<String>,
    pub quantity: Option<f64>,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<FarmerCrop> for FarmerCropResponse {
    fn from(c: FarmerCrop) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            crop_type: c.crop_type,
            harvest_date: c.harvest_date,
            expiry_date: c.expiry_date,
            soil_type: c.soil_type,
            pesticides_used: c.pesticides_used,
            image_url: c.image_url,
            farmer_code: c.farmer_code,
            farmer_name: c.farmer_name,
            farmer_location: c.farmer_location,
            quantity: c.quantity,
            quantity_unit: c.quantity_unit,
            price_per_unit: c.price_per_unit,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Distributor crops
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DistributorCropRequest {
    /// Upstream farmer crop this lot was received from.
    pub farmer_crop_id: i64,
    pub received_date: Option<NaiveDate>,
    pub received_from_farmer_code: Option<String>,
    pub received_from_farmer_name: Option<String>,
    pub farmer_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DistributorCropResponse {
    pub id: i64,
    pub user_id: i64,
    pub farmer_crop_id: i64,
    pub distributor_code: Option<String>,
    pub distributor_name: Option<String>,
    pub distributor_location: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub received_from_farmer_code: Option<String>,
    pub received_from_farmer_name: Option<String>,
    pub farmer_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DistributorCrop> for DistributorCropResponse {
    fn from(c: DistributorCrop) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            farmer_crop_id: c.farmer_crop_id,
            distributor_code: c.distributor_code,
            distributor_name: c.distributor_name,
            distributor_location: c.distributor_location,
            received_date: c.received_date,
            received_from_farmer_code: c.received_from_farmer_code,
            received_from_farmer_name: c.received_from_farmer_name,
            farmer_location: c.farmer_location,
            quantity: c.quantity,
            quantity_unit: c.quantity_unit,
            price_per_unit: c.price_per_unit,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Retailer crops
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RetailerCropRequest {
    /// Upstream distributor crop this lot was received from.
    pub distributor_crop_id: i64,
    pub received_date: Option<NaiveDate>,
    pub received_from_distributor_code: Option<String>,
    pub received_from_distributor_name: Option<String>,
    pub distributor_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RetailerCropResponse {
    pub id: i64,
    pub user_id: i64,
    pub distributor_crop_id: i64,
    pub retailer_code: Option<String>,
    pub retailer_name: Option<String>,
    pub retailer_location: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub received_from_distributor_code: Option<String>,
    pub received_from_distributor_name: Option<String>,
    pub distributor_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RetailerCrop> for RetailerCropResponse {
    fn from(c: RetailerCrop) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            distributor_crop_id: c.distributor_crop_id,
            retailer_code: c.retailer_code,
            retailer_name: c.retailer_name,
            retailer_location: c.retailer_location,
            received_date: c.received_date,
            received_from_distributor_code: c.received_from_distributor_code,
            received_from_distributor_name: c.received_from_distributor_name,
            distributor_location: c.distributor_location,
            quantity: c.quantity,
            quantity_unit: c.quantity_unit,
            price_per_unit: c.price_per_unit,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Consumer purchases
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PurchaseRequest {
    /// Retailer lot the purchase was made against.
    pub retailer_crop_id: i64,
    pub consumer_code: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchased_from_retailer_code: Option<String>,
    pub purchased_from_retailer_name: Option<String>,
    pub retailer_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub total_price: Option<f64>,
    /// Defaults to PENDING when omitted.
    pub payment_status: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PurchaseResponse {
    pub id: i64,
    pub user_id: i64,
    pub retailer_crop_id: i64,
    pub consumer_code: Option<String>,
    pub consumer_name: Option<String>,
    pub consumer_location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchased_from_retailer_code: Option<String>,
    pub purchased_from_retailer_name: Option<String>,
    pub retailer_location: Option<String>,
    pub quantity: f64,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub total_price: Option<f64>,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ConsumerPurchase> for PurchaseResponse {
    fn from(p: ConsumerPurchase) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            retailer_crop_id: p.retailer_crop_id,
            consumer_code: p.consumer_code,
            consumer_name: p.consumer_name,
            consumer_location: p.consumer_location,
            purchase_date: p.purchase_date,
            purchased_from_retailer_code: p.purchased_from_retailer_code,
            purchased_from_retailer_name: p.purchased_from_retailer_name,
            retailer_location: p.retailer_location,
            quantity: p.quantity,
            quantity_unit: p.quantity_unit,
            price_per_unit: p.price_per_unit,
            total_price: p.total_price,
            payment_status: p.payment_status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StatsResponse {
    pub users: i64,
    pub farmer_crops: i64,
    pub distributor_crops: i64,
    pub retailer_crops: i64,
    pub consumer_purchases: i64,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
