//! Shared Module
//!
//! Types that travel over the HTTP API and are used by both the server
//! (`backend`) and the typed client (`client`). Everything here is plain
//! serde data plus the validation rules that apply to it.

/// Shared error types
pub mod error;

/// Field validation helpers
pub mod validation;

/// Account and authentication payloads
pub mod user;

/// Posts, comments and categories
pub mod post;

pub use error::SharedError;
pub use post::{
    AddCommentRequest, Category, CategorySummary, Comment, CreateCategoryRequest,
    CreatePostRequest, MessageResponse, Post, PostCategory, PostListQuery, UpdatePostRequest,
};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
