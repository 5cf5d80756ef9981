use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{User, UserRole};

use crate::auth::CurrentUser;
use crate::dto::{ErrorResponse, StatsResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

fn ensure_admin(user: &User) -> Result<(), AppError> {
    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All registered accounts, newest first", body = [UserResponse]),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    ensure_admin(&user)?;
    let users = state.db.users().list_all().await?;
    let response: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account and all of its records deleted"),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Admins cannot delete themselves", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ensure_admin(&user)?;
    if id == user.id {
        return Err(AppError::Conflict(
            "Admins cannot delete their own account".to_string(),
        )
        .into());
    }

    state.db.users().delete_cascade(id).await?;
    tracing::info!("Admin {} deleted account {id}", user.id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Row totals per table", body = StatsResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    ensure_admin(&user)?;

    let response = StatsResponse {
        users: state.db.users().count().await?,
        farmer_crops: state.db.farmer_crops().count().await?,
        distributor_crops: state.db.distributor_crops().count().await?,
        retailer_crops: state.db.retailer_crops().count().await?,
        consumer_purchases: state.db.purchases().count().await?,
    };
    Ok(axum::Json(response))
}
