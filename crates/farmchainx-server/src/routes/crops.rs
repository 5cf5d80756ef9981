use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use farmchainx_core::error::AppError;
use farmchainx_core::models::UserRole;

use crate::auth::CurrentUser;
use crate::dto::{
    DistributorCropRequest, DistributorCropResponse, ErrorResponse, FarmerCropRequest,
    FarmerCropResponse, PurchaseResponse, RetailerCropRequest, RetailerCropResponse,
};
use crate::error::ApiError;
use crate::routes::{distributor, ensure_owner, farmer, retailer};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/crops/scan/{id}",
    params(("id" = i64, Path, description = "Farmer crop id, typically from a QR code")),
    responses(
        (status = 200, description = "Provenance record", body = FarmerCropResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "crops"
)]
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let crop = state
        .db
        .farmer_crops()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
    Ok(axum::Json(FarmerCropResponse::from(crop)))
}

#[utoipa::path(
    get,
    path = "/crops",
    responses(
        (status = 200, description = "The caller's records for their role"),
        (status = 400, description = "Role holds no crop records", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "crops"
)]
pub async fn list_my_records(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    let response = match user.role {
        UserRole::Farmer => {
            let crops = state.db.farmer_crops().list_by_user(user.id).await?;
            let body: Vec<FarmerCropResponse> = crops.into_iter().map(Into::into).collect();
            axum::Json(body).into_response()
        }
        UserRole::Distributor => {
            let crops = state.db.distributor_crops().list_by_user(user.id).await?;
            let body: Vec<DistributorCropResponse> = crops.into_iter().map(Into::into).collect();
            axum::Json(body).into_response()
        }
        UserRole::Retailer => {
            let crops = state.db.retailer_crops().list_by_user(user.id).await?;
            let body: Vec<RetailerCropResponse> = crops.into_iter().map(Into::into).collect();
            axum::Json(body).into_response()
        }
        UserRole::Consumer => {
            let purchases = state.db.purchases().list_by_user(user.id).await?;
            let body: Vec<PurchaseResponse> = purchases.into_iter().map(Into::into).collect();
            axum::Json(body).into_response()
        }
        UserRole::Admin => {
            return Err(AppError::Validation(
                "Role ADMIN holds no crop records".to_string(),
            )
            .into());
        }
    };
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/crops",
    request_body = FarmerCropRequest,
    responses(
        (status = 201, description = "Crop created", body = FarmerCropResponse),
        (status = 400, description = "Caller is not a farmer", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "crops"
)]
pub async fn create_crop(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    axum::Json(body): axum::Json<FarmerCropRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if user.role != UserRole::Farmer {
        return Err(AppError::Validation(
            "Only farmers can create crops here".to_string(),
        )
        .into());
    }

    let crop = state
        .db
        .farmer_crops()
        .create(user.id, &farmer::to_new_crop(&user, body))
        .await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(FarmerCropResponse::from(crop)),
    ))
}

#[utoipa::path(
    put,
    path = "/crops/{id}",
    params(("id" = i64, Path, description = "Record id in the caller's role table")),
    responses(
        (status = 200, description = "Record updated"),
        (status = 400, description = "Role holds no crop records", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "crops"
)]
pub async fn update_record(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let response = match user.role {
        UserRole::Farmer => {
            let req: FarmerCropRequest = serde_json::from_value(body).map_err(AppError::from)?;
            let repo = state.db.farmer_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            let updated = repo.update(id, &farmer::to_new_crop(&user, req)).await?;
            axum::Json(FarmerCropResponse::from(updated)).into_response()
        }
        UserRole::Distributor => {
            let req: DistributorCropRequest =
                serde_json::from_value(body).map_err(AppError::from)?;
            let repo = state.db.distributor_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            let updated = repo
                .update(id, &distributor::to_new_crop(&user, req))
                .await?;
            axum::Json(DistributorCropResponse::from(updated)).into_response()
        }
        UserRole::Retailer => {
            let req: RetailerCropRequest = serde_json::from_value(body).map_err(AppError::from)?;
            let repo = state.db.retailer_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            let updated = repo.update(id, &retailer::to_new_crop(&user, req)).await?;
            axum::Json(RetailerCropResponse::from(updated)).into_response()
        }
        UserRole::Consumer | UserRole::Admin => {
            return Err(AppError::Validation(format!(
                "Role {} holds no crop records",
                user.role
            ))
            .into());
        }
    };
    Ok(response)
}

#[utoipa::path(
    delete,
    path = "/crops/{id}",
    params(("id" = i64, Path, description = "Record id in the caller's role table")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 400, description = "Role holds no crop records", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "crops"
)]
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match user.role {
        UserRole::Farmer => {
            let repo = state.db.farmer_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            repo.delete(id).await?;
        }
        UserRole::Distributor => {
            let repo = state.db.distributor_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            repo.delete(id).await?;
        }
        UserRole::Retailer => {
            let repo = state.db.retailer_crops();
            let existing = repo
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Crop not found: {id}")))?;
            ensure_owner(existing.user_id, &user)?;
            repo.delete(id).await?;
        }
        UserRole::Consumer | UserRole::Admin => {
            return Err(AppError::Validation(format!(
                "Role {} holds no crop records",
                user.role
            ))
            .into());
        }
    }
    Ok(StatusCode::NO_CONTENT)
}
