/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by normalized email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return token and user info
 *
 * An unknown email and a wrong password produce the same 401 response, and
 * both run one bcrypt verification at the configured cost.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::user::normalize_email;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Email or password missing
/// * `401 Unauthorized` - Unknown email or wrong password ("Invalid credentials")
/// * `500 Internal Server Error` - Store, hash verification or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    request.validate()?;

    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let Some(user) = get_user_by_email(&state.db_pool, &email).await? else {
        // Same bcrypt work as a wrong password; the outcome is ignored
        let _ = verify(&request.password, &state.login_decoy);
        tracing::warn!("Login for unknown email: {}", email);
        return Err(ApiError::invalid_credentials());
    };

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(&user).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Failed to create token")
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        user: user.to_response(),
        token,
    }))
}
