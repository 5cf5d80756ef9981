use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use rand::Rng;

use farmchainx_core::auth::{hash_password, verify_password};
use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewUser, UserRole};
use farmchainx_db::UserRepository;

use crate::dto::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::state::AppState;

const CODE_ATTEMPTS: u32 = 100;

/// Pick an unused 3-digit actor code, retrying on collision.
async fn generate_actor_code(
    users: &UserRepository,
    role: UserRole,
) -> Result<String, AppError> {
    for _ in 0..CODE_ATTEMPTS {
        let code = format!("{:03}", rand::thread_rng().gen_range(0..1000));
        let taken = match role {
            UserRole::Farmer => users.farmer_code_exists(&code).await?,
            UserRole::Distributor => users.distributor_code_exists(&code).await?,
            _ => false,
        };
        if !taken {
            return Ok(code);
        }
    }
    Err(AppError::Conflict(
        "No free actor codes available".to_string(),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Bad role or duplicate email", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role: UserRole = body
        .role
        .parse()
        .map_err(|e: String| AppError::Validation(e))?;

    let users = state.db.users();
    if users.email_exists(&body.email).await? {
        return Err(AppError::Validation("Email already exists".to_string()).into());
    }

    let farmer_code = match role {
        UserRole::Farmer => Some(generate_actor_code(&users, role).await?),
        _ => None,
    };
    let distributor_code = match role {
        UserRole::Distributor => Some(generate_actor_code(&users, role).await?),
        _ => None,
    };

    let user = users
        .create(&NewUser {
            email: body.email,
            password_hash: hash_password(&body.password)?,
            role,
            name: body.name,
            location: body.location,
            farmer_code,
            distributor_code,
        })
        .await?;

    tracing::info!("Registered {} account {}", user.role, user.id);

    let token = state.tokens.sign(&user, Utc::now())?;
    Ok(axum::Json(AuthResponse::new(token, &user)))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.db.users().find_by_email(&body.email).await?;

    // Unknown email and wrong password answer identically.
    let authenticated = match &user {
        Some(user) => verify_password(&body.password, &user.password_hash)?,
        None => false,
    };

    let (Some(user), true) = (user, authenticated) else {
        let body = ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
        };
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    };

    let token = state.tokens.sign(&user, Utc::now())?;
    Ok(axum::Json(AuthResponse::new(token, &user)).into_response())
}
