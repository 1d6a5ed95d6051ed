/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. It holds no per-request mutable
 * data: the connection pool, the token issuer, the immutable server
 * configuration and the login decoy hash, all cheap to clone.
 *
 * The `FromRef` implementations let handlers extract only what they need,
 * e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use bcrypt::{hash, BcryptError};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// Store connection pool
    pub db_pool: SqlitePool,

    /// Issues and validates session tokens
    pub tokens: TokenIssuer,

    pub config: Arc<ServerConfig>,

    /// Hash verified against when a login names an unknown email, so that
    /// path pays the same bcrypt cost as a wrong password
    pub login_decoy: Arc<str>,
}

/// Plaintext behind `login_decoy`; matching it never logs anyone in
pub const LOGIN_DECOY_PASSWORD: &str = "inkwell-login-decoy";

impl AppState {
    pub fn new(db_pool: SqlitePool, config: ServerConfig) -> Result<Self, BcryptError> {
        let tokens = TokenIssuer::from_config(&config.auth);
        let login_decoy = hash(LOGIN_DECOY_PASSWORD, config.auth.bcrypt_cost)?;
        Ok(Self {
            db_pool,
            tokens,
            config: Arc::new(config),
            login_decoy: login_decoy.into(),
        })
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
