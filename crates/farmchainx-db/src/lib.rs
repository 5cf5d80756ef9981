pub mod config;
pub mod database;
pub mod distributor_crops;
pub mod farmer_crops;
pub mod purchases;
pub mod retailer_crops;
pub mod users;

pub use config::DatabaseConfig;
pub use database::Database;
pub use distributor_crops::DistributorCropRepository;
pub use farmer_crops::FarmerCropRepository;
pub use purchases::PurchaseRepository;
pub use retailer_crops::RetailerCropRepository;
pub use users::UserRepository;
