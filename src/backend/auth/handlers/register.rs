/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate username, email format and password length
 * 2. Check that neither the username nor the email is taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue a session token
 * 6. Return token and public profile with 201 Created
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::user::normalize_email;
use crate::shared::{AuthResponse, RegisterRequest};

const EMAIL_TAKEN: &str = "Email already registered";
const USERNAME_TAKEN: &str = "Username already taken";

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool, token issuer, bcrypt cost)
/// * `Json(request)` - Username, email and password
///
/// # Errors
///
/// * `400 Bad Request` - Invalid input, or username/email already in use
/// * `500 Internal Server Error` - Hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "email": "alice@example.com",
///     "createdAt": "2024-01-01T00:00:00Z"
///   },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    request.validate().map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        ApiError::from(e)
    })?;

    let username = request.username.trim().to_string();
    let email = normalize_email(&request.email);
    tracing::info!("Register request for username: {}, email: {}", username, email);

    if get_user_by_username(&state.db_pool, &username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(ApiError::validation(USERNAME_TAKEN));
    }

    if get_user_by_email(&state.db_pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ApiError::validation(EMAIL_TAKEN));
    }

    let password_hash = hash(&request.password, state.config.auth.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Failed to hash password")
    })?;

    let user = create_user(&state.db_pool, username, email, password_hash)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                tracing::warn!("Unique violation while creating user: {}", db_err);
                ApiError::validation(EMAIL_TAKEN)
            }
            other => ApiError::from(other),
        })?;

    let token = state.tokens.issue(&user).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Failed to create token")
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.to_response(),
            token,
        }),
    ))
}
