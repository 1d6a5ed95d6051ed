/**
 * Post and Comment Service
 *
 * Validation, not-found mapping and listing rules on top of `posts::db`.
 *
 * # Listing
 *
 * Posts come back in insertion order. `search` matches title or content and
 * `category` matches the resolved category name, both case-insensitively;
 * `page`/`limit` slice the filtered result. When the store holds no posts at
 * all and placeholders are enabled, two fixed sample posts are returned and
 * the query is not applied to them.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::posts::db;
use crate::shared::{AddCommentRequest, Comment, CreatePostRequest, Post, PostListQuery, UpdatePostRequest};

pub const POST_NOT_FOUND: &str = "Post not found";

/// The two sample posts served for an empty store
pub fn placeholder_posts(now: DateTime<Utc>) -> Vec<Post> {
    let sample = |id: &str, title: &str, content: &str, author: &str| Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        category: None,
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    vec![
        sample("1", "Sample Post 1", "This is a sample blog post to test the frontend...", "Test Author"),
        sample("2", "Sample Post 2", "Another sample post to demonstrate the blog functionality...", "Demo User"),
    ]
}

/// Apply search, category filter and pagination to a list of posts
pub fn apply_query(posts: Vec<Post>, query: &PostListQuery) -> Vec<Post> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    let filtered = posts.into_iter().filter(|post| {
        let matches_search = search.as_deref().map_or(true, |needle| {
            post.title.to_lowercase().contains(needle) || post.content.to_lowercase().contains(needle)
        });
        let matches_category = category.as_deref().map_or(true, |wanted| {
            post.category_name()
                .map_or(false, |name| name.to_lowercase() == wanted)
        });
        matches_search && matches_category
    });

    match query.window() {
        Some((offset, limit)) => filtered.skip(offset).take(limit).collect(),
        None => filtered.collect(),
    }
}

pub async fn list_posts(pool: &SqlitePool, query: &PostListQuery, placeholders: bool) -> ApiResult<Vec<Post>> {
    let posts = db::list_posts(pool).await?;

    if posts.is_empty() && placeholders {
        tracing::debug!("No posts stored, serving placeholders");
        return Ok(placeholder_posts(Utc::now()));
    }

    Ok(apply_query(posts, query))
}

pub async fn get_post(pool: &SqlitePool, id: &str) -> ApiResult<Post> {
    db::get_post(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}

pub async fn create_post(pool: &SqlitePool, request: &CreatePostRequest) -> ApiResult<Post> {
    request.validate()?;

    let post = db::insert_post(
        pool,
        request.title.trim(),
        request.content.trim(),
        request.author.trim(),
        request.category_id(),
    )
    .await?;

    Ok(post)
}

pub async fn update_post(pool: &SqlitePool, id: &str, request: &UpdatePostRequest) -> ApiResult<Post> {
    request.validate()?;

    db::update_post(
        pool,
        id,
        request.title.trim(),
        request.content.trim(),
        request.author.trim(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}

pub async fn delete_post(pool: &SqlitePool, id: &str) -> ApiResult<()> {
    if db::delete_post(pool, id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found(POST_NOT_FOUND))
    }
}

/// Append a comment with a server-assigned timestamp and return the whole post
pub async fn add_comment(pool: &SqlitePool, id: &str, request: &AddCommentRequest) -> ApiResult<Post> {
    request.validate()?;

    let comment = Comment {
        author: request.author.trim().to_string(),
        content: request.content.trim().to_string(),
        created_at: Utc::now(),
    };

    db::append_comment(pool, id, &comment)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}
