use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use farmchainx_core::error::AppError;
use farmchainx_core::models::User;

use crate::auth::require_auth;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod crops;
pub mod distributor;
pub mod farmer;
pub mod purchases;
pub mod retailer;
pub mod system;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/farmer/crops", get(farmer::list_my_crops))
        .route("/farmer/crops", post(farmer::create_crop))
        .route("/farmer/crops/{id}", put(farmer::update_crop))
        .route("/farmer/crops/{id}", delete(farmer::delete_crop))
        .route("/distributor/crops", get(distributor::list_my_crops))
        .route("/distributor/crops", post(distributor::create_crop))
        .route("/distributor/crops/{id}", put(distributor::update_crop))
        .route("/distributor/crops/{id}", delete(distributor::delete_crop))
        .route("/retailer/crops", get(retailer::list_my_crops))
        .route("/retailer/crops", post(retailer::create_crop))
        .route("/retailer/crops/{id}", put(retailer::update_crop))
        .route("/retailer/crops/{id}", delete(retailer::delete_crop))
        .route("/consumer-purchases", post(purchases::create_purchase))
        .route("/consumer-purchases", get(purchases::list_purchases))
        .route(
            "/consumer-purchases/my-purchases",
            get(purchases::list_my_purchases),
        )
        .route(
            "/consumer-purchases/payment-status/{status}",
            get(purchases::list_by_payment_status),
        )
        .route("/consumer-purchases/{id}", get(purchases::get_purchase))
        .route("/consumer-purchases/{id}", put(purchases::update_purchase))
        .route(
            "/consumer-purchases/{id}",
            delete(purchases::delete_purchase),
        )
        .route("/crops", get(crops::list_my_records))
        .route("/crops", post(crops::create_crop))
        .route("/crops/{id}", put(crops::update_record))
        .route("/crops/{id}", delete(crops::delete_record))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", delete(admin::delete_user))
        .route("/admin/stats", get(admin::stats))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/health", get(system::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/crops/scan/{id}", get(crops::scan))
        .route("/farmer/crops/all", get(farmer::list_all_crops))
        .route("/farmer/crops/by-farmer/{code}", get(farmer::list_by_code))
        .route("/distributor/crops/all", get(distributor::list_all_crops))
        .route("/crops/farmer/{code}", get(farmer::list_by_code))
        .route(
            "/crops/distributor/{code}",
            get(distributor::list_by_code),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

/// Mutations on chain records are only allowed for the account that owns them.
pub(crate) fn ensure_owner(record_user_id: i64, caller: &User) -> Result<(), AppError> {
    if record_user_id != caller.id {
        return Err(AppError::Forbidden(
            "You do not own this record".to_string(),
        ));
    }
    Ok(())
}
