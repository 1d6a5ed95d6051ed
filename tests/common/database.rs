//! Database test fixtures
//!
//! Every fixture gets its own in-memory SQLite database with the migrations
//! applied, so tests never share state.

use std::time::Duration;

use axum_test::TestServer;
use inkwell::backend::server::config::load_database;
use inkwell::backend::server::{build_app, AuthConfig, ServerConfig};
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for tests: fast bcrypt, fixed secret
pub fn test_config(placeholder_posts: bool) -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            token_ttl: TEST_TTL,
            bcrypt_cost: 4,
        },
        placeholder_posts,
    }
}

/// Create a fresh in-memory pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    load_database("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Test application fixture: the real router over a private database
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Placeholder posts enabled, as in the default configuration
    pub async fn new() -> Self {
        Self::with_placeholders(true).await
    }

    pub async fn with_placeholders(placeholder_posts: bool) -> Self {
        let pool = create_test_pool().await;
        let app = build_app(pool.clone(), test_config(placeholder_posts)).expect("Failed to build app");
        let server = TestServer::new(app).expect("Failed to start test server");
        Self { server, pool }
    }
}
