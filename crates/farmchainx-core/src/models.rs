use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default status for crop lots held by farmers, distributors, and retailers.
pub const STATUS_IN_STOCK: &str = "IN_STOCK";

/// Default payment status for consumer purchases.
pub const PAYMENT_PENDING: &str = "PENDING";

/// The role a registered user acts under. Exactly one per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Farmer,
    Distributor,
    Retailer,
    Consumer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "FARMER",
            UserRole::Distributor => "DISTRIBUTOR",
            UserRole::Retailer => "RETAILER",
            UserRole::Consumer => "CONSUMER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FARMER" => Ok(UserRole::Farmer),
            "DISTRIBUTOR" => Ok(UserRole::Distributor),
            "RETAILER" => Ok(UserRole::Retailer),
            "CONSUMER" => Ok(UserRole::Consumer),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("Unknown user role: {other}")),
        }
    }
}

/// A registered account. The password hash never leaves the backend.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub name: String,
    pub location: Option<String>,
    /// Public 3-digit actor code, assigned to farmers at registration.
    pub farmer_code: Option<String>,
    /// Public 3-digit actor code, assigned to distributors at registration.
    pub distributor_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub name: String,
    pub location: Option<String>,
    pub farmer_code: Option<String>,
    pub distributor_code: Option<String>,
}

/// A crop recorded by a farmer, the root of every trace chain.
#[derive(Debug, Clone, Serialize)]
pub struct FarmerCrop {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub crop_type: String,
    pub harvest_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub soil_type: String,
    pub pesticides_used: Option<String>,
    pub image_url: Option<String>,
    /// Snapshot of the owning farmer's public code/name/location at creation.
    pub farmer_code: Option<String>,
    pub farmer_name: Option<String>,
    pub farmer_location: Option<String>,
    pub quantity: Option<f64>,
    pub quantity_unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFarmerCrop {
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
}

/// A lot received by a distributor from a farmer.
#[derive(Debug, Clone, Serialize)]
pub struct DistributorCrop {
    pub id: i64,
    pub user_id: i64,
    /// Upstream farmer crop this lot was received from.
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

#[derive(Debug, Clone)]
pub struct NewDistributorCrop {
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
}

/// A lot received by a retailer from a distributor.
#[derive(Debug, Clone, Serialize)]
pub struct RetailerCrop {
    pub id: i64,
    pub user_id: i64,
    /// Upstream distributor crop this lot was received from.
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

#[derive(Debug, Clone)]
pub struct NewRetailerCrop {
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
}

/// A purchase recorded by a consumer against a retailer lot.
#[derive(Debug, Clone, Serialize)]
pub struct ConsumerPurchase {
    pub id: i64,
    pub user_id: i64,
    /// Upstream retailer crop this purchase was made against.
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

#[derive(Debug, Clone)]
pub struct NewConsumerPurchase {
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
}
