use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewRetailerCrop, STATUS_IN_STOCK, User};

use crate::auth::CurrentUser;
use crate::dto::{ErrorResponse, RetailerCropRequest, RetailerCropResponse};
use crate::error::ApiError;
use crate::routes::ensure_owner;
use crate::state::AppState;

/// Build the insert payload, stamping the retailer snapshot fields from the
/// authenticated account. Retailers carry no assigned public code.
pub(crate) fn to_new_crop(user: &User, req: RetailerCropRequest) -> NewRetailerCrop {
    NewRetailerCrop {
        distributor_crop_id: req.distributor_crop_id,
        retailer_code: None,
        retailer_name: Some(user.name.clone()),
        retailer_location: user.location.clone(),
        received_date: req.received_date,
        received_from_distributor_code: req.received_from_distributor_code,
        received_from_distributor_name: req.received_from_distributor_name,
        distributor_location: req.distributor_location,
        quantity: req.quantity,
        quantity_unit: req.quantity_unit,
        price_per_unit: req.price_per_unit,
        status: req.status.unwrap_or_else(|| STATUS_IN_STOCK.to_string()),
    }
}

#[utoipa::path(
    get,
    path = "/retailer/crops",
    responses(
        (status = 200, description = "The caller's lots, newest first", body = [RetailerCropResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "retailer"
)]
pub async fn list_my_crops(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.retailer_crops().list_by_user(user.id).await?;
    let response: Vec<RetailerCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/retailer/crops",
    request_body = RetailerCropRequest,
    responses(
        (status = 201, description = "Lot created", body = RetailerCropResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "retailer"
)]
pub async fn create_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    axum::Json(body): axum::Json<RetailerCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let crop = state
        .db
        .retailer_crops()
        .create(user.id, &to_new_crop(&user, body))
        .await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(RetailerCropResponse::from(crop)),
    ))
}

#[utoipa::path(
    put,
    path = "/retailer/crops/{id}",
    params(("id" = i64, Path, description = "Lot id")),
    request_body = RetailerCropRequest,
    responses(
        (status = 200, description = "Lot updated", body = RetailerCropResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "retailer"
)]
pub async fn update_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<RetailerCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.retailer_crops();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    let updated = repo.update(id, &to_new_crop(&user, body)).await?;
    Ok(axum::Json(RetailerCropResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/retailer/crops/{id}",
    params(("id" = i64, Path, description = "Lot id")),
    responses(
        (status = 204, description = "Lot deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "retailer"
)]
pub async fn delete_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.retailer_crops();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
