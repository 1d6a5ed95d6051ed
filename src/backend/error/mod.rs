//! Backend Error Module
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError and its status mapping
//! └── conversion.rs - IntoResponse for ApiError
//! ```
//!
//! Handlers return `Result<_, ApiError>`; the conversion turns the error into
//! a status code and a `{ "message": ... }` JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, INVALID_CREDENTIALS};

/// Result alias used across the backend
pub type ApiResult<T> = Result<T, ApiError>;
