/**
 * API Error Types
 *
 * Every failure a handler can report, and the HTTP status it maps to.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input, client-fixable (400)
 * - `Auth` - bad credentials or an invalid/expired token (401)
 * - `NotFound` - the referenced entity does not exist (404)
 * - `Store` - persistence failure, logged server-side only (500)
 * - `Internal` - hashing or signing failure (500)
 *
 * Nothing in the backend retries; errors surface to the caller as-is.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned for every credential failure, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message returned in place of store and internal error details
const SERVER_ERROR: &str = "Internal server error";

/// Backend error type returned from handlers and services
///
/// # Usage
///
/// ```rust
/// use inkwell::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::not_found("Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Underlying store failure
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// The one credential error login ever returns
    pub fn invalid_credentials() -> Self {
        Self::auth(INVALID_CREDENTIALS)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API clients
    ///
    /// Store and internal errors are replaced with a generic message.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Auth { message } | Self::NotFound { message } => {
                message.clone()
            }
            Self::Store(_) | Self::Internal { .. } => SERVER_ERROR.to_string(),
        }
    }

    /// Whether the error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        let SharedError::ValidationError { message, .. } = err;
        Self::Validation { message }
    }
}
