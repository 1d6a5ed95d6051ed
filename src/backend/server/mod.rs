//! Server Module
//!
//! Configuration loading, shared application state and app assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Environment configuration and store connection
//! ├── state.rs    - AppState and FromRef implementations
//! └── init.rs     - create_app / build_app
//! ```

/// Server configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use init::{build_app, create_app, InitError};
pub use state::AppState;
