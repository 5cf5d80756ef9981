use farmchainx_core::auth::TokenKeys;
use farmchainx_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// HS256 keys for signing and verifying bearer tokens.
    pub tokens: TokenKeys,
}
