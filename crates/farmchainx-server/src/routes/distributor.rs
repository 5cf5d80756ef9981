use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewDistributorCrop, STATUS_IN_STOCK, User};

use crate::auth::CurrentUser;
use crate::dto::{DistributorCropRequest, DistributorCropResponse, ErrorResponse};
use crate::error::ApiError;
use crate::routes::ensure_owner;
use crate::state::AppState;

/// Build the insert payload, stamping the distributor snapshot fields from
/// the authenticated account.
pub(crate) fn to_new_crop(user: &User, req: DistributorCropRequest) -> NewDistributorCrop {
    NewDistributorCrop {
        farmer_crop_id: req.farmer_crop_id,
        distributor_code: user.distributor_code.clone(),
        distributor_name: Some(user.name.clone()),
        distributor_location: user.location.clone(),
        received_date: req.received_date,
        received_from_farmer_code: req.received_from_farmer_code,
        received_from_farmer_name: req.received_from_farmer_name,
        farmer_location: req.farmer_location,
        quantity: req.quantity,
        quantity_unit: req.quantity_unit,
        price_per_unit: req.price_per_unit,
        status: req.status.unwrap_or_else(|| STATUS_IN_STOCK.to_string()),
    }
}

#[utoipa::path(
    get,
    path = "/distributor/crops",
    responses(
        (status = 200, description = "The caller's lots, newest first", body = [DistributorCropResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "distributor"
)]
pub async fn list_my_crops(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.distributor_crops().list_by_user(user.id).await?;
    let response: Vec<DistributorCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/distributor/crops",
    request_body = DistributorCropRequest,
    responses(
        (status = 201, description = "Lot created", body = DistributorCropResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "distributor"
)]
pub async fn create_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    axum::Json(body): axum::Json<DistributorCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let crop = state
        .db
        .distributor_crops()
        .create(user.id, &to_new_crop(&user, body))
        .await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(DistributorCropResponse::from(crop)),
    ))
}

#[utoipa::path(
    put,
    path = "/distributor/crops/{id}",
    params(("id" = i64, Path, description = "Lot id")),
    request_body = DistributorCropRequest,
    responses(
        (status = 200, description = "Lot updated", body = DistributorCropResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "distributor"
)]
pub async fn update_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<DistributorCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.distributor_crops();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    let updated = repo.update(id, &to_new_crop(&user, body)).await?;
    Ok(axum::Json(DistributorCropResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/distributor/crops/{id}",
    params(("id" = i64, Path, description = "Lot id")),
    responses(
        (status = 204, description = "Lot deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "distributor"
)]
pub async fn delete_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.distributor_crops();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/distributor/crops/all",
    responses(
        (status = 200, description = "Every distributor lot, newest first", body = [DistributorCropResponse]),
    ),
    tag = "distributor"
)]
pub async fn list_all_crops(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.distributor_crops().list_all().await?;
    let response: Vec<DistributorCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/crops/distributor/{code}",
    params(("code" = String, Path, description = "Public distributor code")),
    responses(
        (status = 200, description = "Lots owned by the distributor with this code", body = [DistributorCropResponse]),
    ),
    tag = "distributor"
)]
pub async fn list_by_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state
        .db
        .distributor_crops()
        .list_by_distributor_code(&code)
        .await?;
    let response: Vec<DistributorCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}
