use thiserror::Error;

/// Application-wide error types for FarmChainX.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload failed validation (bad role, duplicate email, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid credentials/token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to touch this resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// State conflict (e.g. deleting your own admin account).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration problem (missing env var, bad value).
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// True when the error is caused by the client (4xx territory).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Unauthorized(_)
                | AppError::Forbidden(_)
                | AppError::NotFound(_)
                | AppError::Conflict(_)
        )
    }
}
