//! Authentication Module
//!
//! Account registration, login and the stateless session tokens that guard
//! the mutating endpoints.
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - Token issuing and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → user created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: bearer token → token verified → profile returned
//!
//! Passwords are bcrypt-hashed before storage and never leave the server.
//! Tokens expire after the configured TTL (24 hours by default).

/// User data model and database operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenIdentity, TokenIssuer};
pub use users::User;
