/**
 * Authentication Middleware
 *
 * Guards the mutating routes. It extracts and verifies the bearer token from
 * the Authorization header and attaches the caller's identity to the request
 * extensions for handlers to pick up.
 *
 * Token validity is purely signature + expiry: the account is not looked up
 * again, so a token outlives the deletion of its user until it expires.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

const MISSING_TOKEN: &str = "No token, authorization denied";
const INVALID_TOKEN: &str = "Token is not valid";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub username: Option<String>,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches user data to request extensions for use in handlers
///
/// Returns 401 with a `{message}` body if the token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::auth(MISSING_TOKEN)
        })?;

    let identity = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::auth(INVALID_TOKEN)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: identity.user_id,
        email: identity.email,
        username: identity.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only usable on routes behind [`auth_middleware`]; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::auth(MISSING_TOKEN)
            })?;

        Ok(AuthUser(user))
    }
}
