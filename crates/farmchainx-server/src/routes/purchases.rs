use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewConsumerPurchase, PAYMENT_PENDING, User};

use crate::auth::CurrentUser;
use crate::dto::{ErrorResponse, PurchaseRequest, PurchaseResponse};
use crate::error::ApiError;
use crate::routes::ensure_owner;
use crate::state::AppState;

/// Build the insert payload, stamping the consumer snapshot fields from the
/// authenticated account.
fn to_new_purchase(user: &User, req: PurchaseRequest) -> NewConsumerPurchase {
    NewConsumerPurchase {
        retailer_crop_id: req.retailer_crop_id,
        consumer_code: req.consumer_code,
        consumer_name: Some(user.name.clone()),
        consumer_location: user.location.clone(),
        purchase_date: req.purchase_date,
        purchased_from_retailer_code: req.purchased_from_retailer_code,
        purchased_from_retailer_name: req.purchased_from_retailer_name,
        retailer_location: req.retailer_location,
        quantity: req.quantity,
        quantity_unit: req.quantity_unit,
        price_per_unit: req.price_per_unit,
        total_price: req.total_price,
        payment_status: req
            .payment_status
            .unwrap_or_else(|| PAYMENT_PENDING.to_string()),
    }
}

#[utoipa::path(
    post,
    path = "/consumer-purchases",
    request_body = PurchaseRequest,
    responses(
        (status = 201, description = "Purchase recorded", body = PurchaseResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn create_purchase(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    axum::Json(body): axum::Json<PurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let purchase = state
        .db
        .purchases()
        .create(user.id, &to_new_purchase(&user, body))
        .await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(PurchaseResponse::from(purchase)),
    ))
}

#[utoipa::path(
    get,
    path = "/consumer-purchases",
    responses(
        (status = 200, description = "Every recorded purchase, newest first", body = [PurchaseResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn list_purchases(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let purchases = state.db.purchases().list_all().await?;
    let response: Vec<PurchaseResponse> = purchases.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/consumer-purchases/my-purchases",
    responses(
        (status = 200, description = "The caller's purchases, newest first", body = [PurchaseResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn list_my_purchases(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let purchases = state.db.purchases().list_by_user(user.id).await?;
    let response: Vec<PurchaseResponse> = purchases.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/consumer-purchases/payment-status/{status}",
    params(("status" = String, Path, description = "Payment status, e.g. PENDING")),
    responses(
        (status = 200, description = "Purchases in this payment state", body = [PurchaseResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn list_by_payment_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let purchases = state.db.purchases().list_by_payment_status(&status).await?;
    let response: Vec<PurchaseResponse> = purchases.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/consumer-purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "Purchase details", body = PurchaseResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn get_purchase(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let purchase = state
        .db
        .purchases()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Purchase not found: {id}")))?;
    Ok(axum::Json(PurchaseResponse::from(purchase)))
}

#[utoipa::path(
    put,
    path = "/consumer-purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Purchase updated", body = PurchaseResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn update_purchase(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<PurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.purchases();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Purchase not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    let updated = repo.update(id, &to_new_purchase(&user, body)).await?;
    Ok(axum::Json(PurchaseResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/consumer-purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    responses(
        (status = 204, description = "Purchase deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "purchases"
)]
pub async fn delete_purchase(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.purchases();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Purchase not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
