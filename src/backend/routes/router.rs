/**
 * Router Configuration
 *
 * Combines the public and protected API routes into a single Axum router.
 *
 * # Layers
 *
 * 1. Auth middleware on the protected routes only (`route_layer`)
 * 2. `TraceLayer` for a span per request
 * 3. Permissive CORS for browser clients on any origin
 *
 * Unknown paths get a JSON 404 so every error body has the same shape.
 */

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

pub const ROOT_MESSAGE: &str = "Inkwell blog API is running";

async fn root() -> &'static str {
    ROOT_MESSAGE
}

async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Route not found")))
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Pool, token issuer and configuration shared by handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_public_routes(Router::new());

    let protected = configure_protected_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    Router::new()
        .route("/", get(root))
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
