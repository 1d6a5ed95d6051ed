//! Inkwell - Main Library
//!
//! Inkwell is a small multi-user blogging backend: posts with embedded
//! comments, categories, and email/password accounts guarded by signed,
//! time-limited session tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared between server and client
//!   - Posts, comments, categories, auth payloads
//!   - Input validation rules
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route wiring
//!   - Credential store, token issuer and validator
//!   - Content store and post/comment service
//!
//! - **`client`** - Typed HTTP client with an explicit [`client::Session`]
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and server binaries
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkwell::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// HTTP client for the blog API
pub mod client;
