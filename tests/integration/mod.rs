//! Integration tests
//!
//! The real router over an in-memory store, driven through `axum-test`.
