/**
 * API Route Configuration
 *
 * # Public Routes
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/posts` - List posts (search, category, page, limit)
 * - `GET /api/posts/{id}` - Get one post
 * - `GET /api/categories` - List categories
 *
 * # Protected Routes (bearer token)
 * - `GET /api/auth/me` - Current user
 * - `POST /api/posts` - Create post
 * - `PUT /api/posts/{id}` - Update post
 * - `DELETE /api/posts/{id}` - Delete post
 * - `POST /api/posts/{id}/comments` - Add comment
 * - `POST /api/categories` - Create category
 *
 * Public and protected routes share paths; the router merges them per method
 * so only the protected methods pass through the auth middleware.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, register};
use crate::backend::categories::{create_category, list_categories};
use crate::backend::posts::{add_comment, create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Add the routes that need no token
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Read-only content
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
        .route("/api/categories", get(list_categories))
}

/// Add the routes that require a valid token
///
/// The caller is expected to wrap the result in the auth middleware.
pub fn configure_protected_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/me", get(get_me))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", axum::routing::put(update_post).delete(delete_post))
        .route("/api/posts/{id}/comments", post(add_comment))
        .route("/api/categories", post(create_category))
}
