use farmchainx_core::AppError;

/// Connection pool settings for the FarmChainX database.
///
/// The default pool of 5 is plenty for this workload: every request does a
/// handful of short CRUD statements, and the auth middleware adds one user
/// lookup per protected call. Deployments fronting many concurrent scanners
/// can raise `DATABASE_MAX_CONNECTIONS`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl DatabaseConfig {
    /// Read `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`
    /// (optional) from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError("DATABASE_URL not set. Required for database operations.".into())
        })?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Err(_) => DEFAULT_MAX_CONNECTIONS,
            Ok(raw) => {
                let parsed: u32 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid DATABASE_MAX_CONNECTIONS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}
