//! Post and Comment HTTP Handlers
//!
//! Reads are public; create, update, delete and comment sit behind the auth
//! middleware and take [`AuthUser`] so the caller shows up in the logs.
//! There is no ownership check: any authenticated caller may change any post.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiResult;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::service;
use crate::backend::server::config::ServerConfig;
use crate::shared::{AddCommentRequest, CreatePostRequest, MessageResponse, Post, PostListQuery, UpdatePostRequest};

/// List posts
///
/// `GET /api/posts?search=&category=&page=&limit=`
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<ServerConfig>>,
    ApiQuery(query): ApiQuery<PostListQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = service::list_posts(&pool, &query, config.placeholder_posts).await?;
    Ok(Json(posts))
}

/// `GET /api/posts/{id}`
pub async fn get_post(State(pool): State<SqlitePool>, Path(id): Path<String>) -> ApiResult<Json<Post>> {
    let post = service::get_post(&pool, &id).await?;
    Ok(Json(post))
}

/// `POST /api/posts`, returns 201 with the stored post
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let post = service::create_post(&pool, &request).await?;
    tracing::info!("Post {} created by user {}", post.id, caller.user_id);
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /api/posts/{id}`
pub async fn update_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> ApiResult<Json<Post>> {
    let post = service::update_post(&pool, &id, &request).await?;
    tracing::info!("Post {} updated by user {}", post.id, caller.user_id);
    Ok(Json(post))
}

/// `DELETE /api/posts/{id}`
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    service::delete_post(&pool, &id).await?;
    tracing::info!("Post {} deleted by user {}", id, caller.user_id);
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// `POST /api/posts/{id}/comments`, returns 201 with the whole updated post
pub async fn add_comment(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<AddCommentRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let post = service::add_comment(&pool, &id, &request).await?;
    tracing::info!(
        "Comment added to post {} by user {} ({} comments)",
        post.id,
        caller.user_id,
        post.comments.len()
    );
    Ok((StatusCode::CREATED, Json(post)))
}
