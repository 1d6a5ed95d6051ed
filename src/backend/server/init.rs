/**
 * Server Initialization
 *
 * Builds the Axum application:
 * 1. Open the store and apply migrations
 * 2. Build the token issuer and login decoy hash from the auth settings
 * 3. Assemble the router with all routes and layers
 *
 * `build_app` skips step 1 so tests can hand in their own pool.
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Create and configure the Axum application from a loaded configuration
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Inkwell backend server");

    let db_pool = load_database(&config.database_url).await?;
    build_app(db_pool, config)
}

/// Assemble the application around an already opened pool
pub fn build_app(db_pool: SqlitePool, config: ServerConfig) -> Result<Router<()>, InitError> {
    if config.placeholder_posts {
        tracing::info!("Placeholder posts are served while the store is empty");
    }

    let app_state = AppState::new(db_pool, config)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
