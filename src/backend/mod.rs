//! Backend Module
//!
//! All server-side code for Inkwell: an Axum HTTP API over a SQLite store.
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Route registration, layers and fallback
//! - **`auth`** - Accounts, password hashing, session tokens
//! - **`middleware`** - Bearer token check for protected routes
//! - **`extract`** - Body and query extractors that reject with `ApiError`
//! - **`posts`** - Posts and their embedded comments
//! - **`categories`** - Post categories
//! - **`seed`** - Sample data loader used by the `inkwell-seed` binary
//! - **`error`** - `ApiError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── seed_main.rs    - Seed binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! ├── posts/          - Post and comment service
//! ├── categories/     - Category service
//! ├── seed.rs         - Sample data
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the token issuer and the immutable
//! configuration. There is no in-process mutable state; every request is
//! served from the store, and each write is a single SQL statement.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Json and Query extractors with `ApiError` rejections
pub mod extract;

/// Posts and comments
pub mod posts;

/// Post categories
pub mod categories;

/// Sample data
pub mod seed;

pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppState, ServerConfig};
