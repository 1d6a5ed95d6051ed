//! Database operations for categories

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::Category;

fn category_from_row(row: &SqliteRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
    })
}

/// All categories ordered by name
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, description, created_at
        FROM categories
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(category_from_row).collect()
}

/// Insert a category; fails with a unique violation if the name is taken
pub async fn insert_category(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
) -> Result<Category, sqlx::Error> {
    let category = Category {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO categories (id, name, description, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&category.id)
    .bind(&category.name)
    .bind(&category.description)
    .bind(category.created_at)
    .execute(pool)
    .await?;

    Ok(category)
}

/// Remove every category; posts keep their now dangling references
pub async fn clear_categories(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM categories").execute(pool).await?;
    Ok(result.rows_affected())
}
