//! Common test utilities and helpers
//!
//! - In-memory database and test server fixtures
//! - Authentication helpers
//! - Response assertions

pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
