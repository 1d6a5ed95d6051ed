//! Client Module
//!
//! Typed async client for the blog API.
//!
//! - **`api`** - [`BlogClient`], one method per endpoint
//! - **`session`** - [`Session`] (token + profile) and its JSON persistence
//! - **`error`** - [`ClientError`]
//!
//! # Example
//!
//! ```rust,no_run
//! use inkwell::client::{BlogClient, Session};
//! use inkwell::shared::{CreatePostRequest, LoginRequest};
//!
//! # async fn example() -> Result<(), inkwell::client::ClientError> {
//! let client = BlogClient::new("http://127.0.0.1:3001");
//! let session = client
//!     .login(&LoginRequest { email: "alice@example.com".into(), password: "secret1".into() })
//!     .await?;
//! session.save(&Session::default_path())?;
//!
//! let post = CreatePostRequest {
//!     title: "Hello".into(),
//!     content: "First post".into(),
//!     author: "alice".into(),
//!     category: None,
//! };
//! client.create_post(&session, &post).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod session;

pub use api::BlogClient;
pub use error::ClientError;
pub use session::Session;
