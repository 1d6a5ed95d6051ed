//! Category HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use crate::backend::categories::db;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiJson;
use crate::backend::middleware::AuthUser;
use crate::shared::{Category, CreateCategoryRequest};

/// `GET /api/categories`, ordered by name
pub async fn list_categories(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Category>>> {
    let categories = db::list_categories(&pool).await?;
    Ok(Json(categories))
}

/// `POST /api/categories`
///
/// # Errors
///
/// * `400 Bad Request` - Missing name, or a category with that name exists
/// * `401 Unauthorized` - Missing or invalid token
pub async fn create_category(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    request.validate()?;

    let name = request.name.trim();
    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let category = db::insert_category(&pool, name, description)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                tracing::warn!("Category already exists: {}", name);
                ApiError::validation("Category already exists")
            }
            other => ApiError::from(other),
        })?;

    tracing::info!("Category {} created by user {}", category.name, caller.user_id);
    Ok((StatusCode::CREATED, Json(category)))
}
