/**
 * Server Configuration
 *
 * Loads the server settings from environment variables (a `.env` file is
 * honoured by the binaries through `dotenv`) and opens the SQLite store.
 *
 * # Variables
 *
 * - `DATABASE_URL` - store connection string (`sqlite://inkwell.db?mode=rwc`)
 * - `SERVER_PORT` - listening port (3001)
 * - `JWT_SECRET` - token signing secret (required in release builds)
 * - `TOKEN_TTL_HOURS` - token lifetime in hours (24, at most ten years)
 * - `BCRYPT_COST` - password hash cost (bcrypt default)
 * - `PLACEHOLDER_POSTS` - serve sample posts when the store is empty (true)
 *
 * Unlike the optional services of a larger deployment, the store is required:
 * a bad value or an unreachable database stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://inkwell.db?mode=rwc";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
/// Ten years; keeps `iat + ttl` far from overflowing
const MAX_TOKEN_TTL_HOURS: u64 = 10 * 365 * 24;
const DEV_JWT_SECRET: &str = "inkwell-dev-secret-change-me";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Token signing and password hashing settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
    /// Return the two sample posts instead of `[]` when no posts exist
    pub placeholder_posts: bool,
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = parse_or("SERVER_PORT", lookup("SERVER_PORT"), DEFAULT_PORT)?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|secret| !secret.is_empty()) {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingValue("JWT_SECRET")),
        };

        let ttl_hours = parse_or("TOKEN_TTL_HOURS", lookup("TOKEN_TTL_HOURS"), DEFAULT_TOKEN_TTL_HOURS)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&ttl_hours) {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_HOURS",
                value: ttl_hours.to_string(),
            });
        }

        let bcrypt_cost = parse_or("BCRYPT_COST", lookup("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let placeholder_posts = match lookup("PLACEHOLDER_POSTS") {
            None => true,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                name: "PLACEHOLDER_POSTS",
                value: raw,
            })?,
        };

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig {
                jwt_secret,
                token_ttl: Duration::from_secs(ttl_hours * 60 * 60),
                bcrypt_cost,
            },
            placeholder_posts,
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Open the SQLite store and apply the embedded migrations
///
/// In-memory URLs get a single pooled connection that is never recycled,
/// since every SQLite connection would otherwise see its own empty database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
