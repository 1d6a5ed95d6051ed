//! Posts Module
//!
//! Blog posts with their embedded comments.
//!
//! - **`db`** - SQL access, comments stored as a JSON array per post
//! - **`service`** - validation, listing rules and not-found mapping
//! - **`handlers`** - HTTP handlers for `/api/posts`

pub mod db;
pub mod handlers;
pub mod service;

pub use handlers::*;
