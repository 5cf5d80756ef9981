use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewFarmerCrop, STATUS_IN_STOCK, User};

use crate::auth::CurrentUser;
use crate::dto::{ErrorResponse, FarmerCropRequest, FarmerCropResponse};
use crate::error::ApiError;
use crate::routes::ensure_owner;
use crate::state::AppState;

/// Build the insert payload, stamping the farmer snapshot fields from the
/// authenticated account.
pub(crate) fn to_new_crop(user: &User, req: FarmerCropRequest) -> NewFarmerCrop {
    NewFarmerCrop {
        name: req.name,
        crop_type: req.crop_type,
        harvest_date: req.harvest_date,
        expiry_date: req.expiry_date,
        soil_type: req.soil_type,
        pesticides_used: req.pesticides_used,
        image_url: req.image_url,
        farmer_code: user.farmer_code.clone(),
        farmer_name: Some(user.name.clone()),
        farmer_location: user.location.clone(),
        quantity: req.quantity,
        quantity_unit: req.quantity_unit,
        price_per_unit: req.price_per_unit,
        status: req.status.unwrap_or_else(|| STATUS_IN_STOCK.to_string()),
    }
}

#[utoipa::path(
    get,
    path = "/farmer/crops",
    responses(
        (status = 200, description = "The caller's crops, newest first", body = [FarmerCropResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "farmer"
)]
pub async fn list_my_crops(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.farmer_crops().list_by_user(user.id).await?;
    let response: Vec<FarmerCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/farmer/crops",
    request_body = FarmerCropRequest,
    responses(
        (status = 201, description = "Crop created", body = FarmerCropResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "farmer"
)]
pub async fn create_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    axum::Json(body): axum::Json<FarmerCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let crop = state
        .db
        .farmer_crops()
        .create(user.id, &to_new_crop(&user, body))
        .await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(FarmerCropResponse::from(crop)),
    ))
}

#[utoipa::path(
    put,
    path = "/farmer/crops/{id}",
    params(("id" = i64, Path, description = "Crop id")),
    request_body = FarmerCropRequest,
    responses(
        (status = 200, description = "Crop updated", body = FarmerCropResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "farmer"
)]
pub async fn update_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<FarmerCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.farmer_crops();
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    ensure_owner(existing.user_id, &user)?;

    let updated = repo.update(id, &to_new_crop(&user, body)).await?;
    Ok(axum::Json(FarmerCropResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/farmer/crops/{id}",
    params(("id" = i64, Path, description = "Crop id")),
    responses(
        (status = 204, description = "Crop deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "farmer"
)]
pub async fn delete_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.farmer_crops();
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
    path = "/farmer/crops/all",
    responses(
        (status = 200, description = "Every farmer crop, newest first", body = [FarmerCropResponse]),
    ),
    tag = "farmer"
)]
pub async fn list_all_crops(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.farmer_crops().list_all().await?;
    let response: Vec<FarmerCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/farmer/crops/by-farmer/{code}",
    params(("code" = String, Path, description = "Public farmer code")),
    responses(
        (status = 200, description = "Crops owned by the farmer with this code", body = [FarmerCropResponse]),
    ),
    tag = "farmer"
)]
pub async fn list_by_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let crops = state.db.farmer_crops().list_by_farmer_code(&code).await?;
    let response: Vec<FarmerCropResponse> = crops.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}
