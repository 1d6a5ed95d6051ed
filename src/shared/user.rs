//! Account and authentication payloads
//!
//! Request bodies for `/api/auth/register` and `/api/auth/login`, and the
//! `{ user, token }` envelope both of them return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{is_valid_email, is_valid_password, require_non_empty, MIN_PASSWORD_LEN};

/// Registration request
///
/// Missing fields deserialize as empty strings so that they are reported as
/// validation errors rather than body rejections.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext password; hashed before storage and never echoed back
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check username, email format and password length
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("username", &self.username, "Username is required")?;
        require_non_empty("email", &self.email, "Email is required")?;

        if !is_valid_email(self.email.trim()) {
            return Err(SharedError::validation("email", "Please provide a valid email"));
        }

        if !is_valid_password(&self.password) {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(SharedError::validation("email", "Email and password are required"));
        }
        Ok(())
    }
}

/// Public user profile, never includes the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: UserResponse,
    /// Bearer token for protected endpoints
    pub token: String,
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
