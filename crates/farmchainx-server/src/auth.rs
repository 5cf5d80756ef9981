use std::sync::Arc;

use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use farmchainx_core::models::User;

use crate::dto::ErrorResponse;
use crate::state::AppState;

/// The authenticated account, inserted into request extensions by
/// [`require_auth`] and extracted by protected handlers.
#[derive(Clone)]
pub struct CurrentUser(pub User);

fn unauthorized(message: &str) -> Response {
    let body = ErrorResponse {
        error: "unauthorized".to_string(),
        message: message.to_string(),
    };
    (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
}

/// Middleware that validates `Authorization: Bearer <jwt>` and resolves the
/// account from the database. Tokens for deleted accounts are rejected.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    let Some(token) = token else {
        return unauthorized("Missing or invalid Authorization header. Expected: Bearer <token>");
    };

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(_) => return unauthorized("Invalid or expired token"),
    };

    let user = match state.db.users().find_by_id(claims.uid).await {
        Ok(Some(user)) => user,
        Ok(None) => return unauthorized("Account no longer exists"),
        Err(e) => {
            tracing::error!("Failed to load user {}: {e}", claims.uid);
            return crate::error::ApiError(e).into_response();
        }
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}
