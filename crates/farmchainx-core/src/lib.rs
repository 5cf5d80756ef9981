pub mod auth;
pub mod error;
pub mod models;

pub use error::AppError;
pub use models::{
    ConsumerPurchase, DistributorCrop, FarmerCrop, NewConsumerPurchase, NewDistributorCrop,
    NewFarmerCrop, NewRetailerCrop, NewUser, RetailerCrop, User, UserRole,
};
