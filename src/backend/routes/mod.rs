//! Route Configuration Module
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - Public and protected API endpoints
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint registration
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

pub use router::create_router;
