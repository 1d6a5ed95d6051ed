//! Database operations for posts
//!
//! Posts are stored one row each with their comments inline as a JSON array.
//! Reads join the categories table so the category comes back resolved when
//! it still exists, or as the bare id when it does not.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::{CategorySummary, Comment, Post, PostCategory};

const SELECT_POSTS: &str = r#"
    SELECT p.id, p.title, p.content, p.author, p.category_id, p.comments,
           p.created_at, p.updated_at,
           c.name AS category_name, c.description AS category_description
    FROM posts p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

fn decode_error(e: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(e))
}

fn post_from_row(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    let category_id: Option<String> = row.try_get("category_id")?;
    let category_name: Option<String> = row.try_get("category_name")?;

    let category = match (category_id, category_name) {
        (Some(id), Some(name)) => Some(PostCategory::Resolved(CategorySummary {
            id,
            name,
            description: row.try_get("category_description")?,
        })),
        (Some(id), None) => Some(PostCategory::Reference(id)),
        (None, _) => None,
    };

    let comments: String = row.try_get("comments")?;
    let comments: Vec<Comment> = serde_json::from_str(&comments).map_err(decode_error)?;

    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author: row.try_get("author")?,
        category,
        comments,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All posts in insertion order
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POSTS} ORDER BY p.rowid");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(post_from_row).collect()
}

/// Get a post by id, `None` if no such post exists
pub async fn get_post(pool: &SqlitePool, id: &str) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POSTS} WHERE p.id = ?");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(post_from_row).transpose()
}

/// Insert a new post with no comments
pub async fn insert_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    author: &str,
    category_id: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, title, content, author, category_id, comments, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, '[]', ?, ?)
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(content)
    .bind(author)
    .bind(category_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_post(pool, &id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Replace title, content and author; `None` if the post does not exist
pub async fn update_post(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    content: &str,
    author: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = ?, content = ?, author = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(author)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_post(pool, id).await
}

/// Delete a post and its comments; returns whether a post was removed
pub async fn delete_post(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Append a comment to a post's comment array
///
/// The append happens inside one UPDATE, so concurrent appends to the same
/// post are serialized by the store and none is lost. Returns the updated
/// post, or `None` if it does not exist.
pub async fn append_comment(pool: &SqlitePool, id: &str, comment: &Comment) -> Result<Option<Post>, sqlx::Error> {
    let comment = serde_json::to_string(comment).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    let updated = sqlx::query(
        r#"
        UPDATE posts
        SET comments = json_insert(comments, '$[#]', json(?)), updated_at = ?
        WHERE id = ?
        RETURNING id
        "#,
    )
    .bind(comment)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if updated.is_none() {
        return Ok(None);
    }

    get_post(pool, id).await
}

/// Remove every post; used by the seed tool
pub async fn clear_posts(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts").execute(pool).await?;
    Ok(result.rows_affected())
}
