//! Categories Module
//!
//! Named groupings posts can reference. Deleting a category is not offered,
//! and posts are never checked against this table.

pub mod db;
pub mod handlers;

pub use handlers::*;
