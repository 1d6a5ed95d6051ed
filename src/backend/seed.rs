/**
 * Sample Data
 *
 * Replaces all posts and categories with two categories and three posts.
 * Accounts are left untouched.
 */

use sqlx::SqlitePool;

use crate::backend::categories::db::{clear_categories, insert_category};
use crate::backend::posts::db::{clear_posts, insert_post};

/// What a seed run removed and created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub posts_removed: u64,
    pub categories_removed: u64,
    pub categories_created: usize,
    pub posts_created: usize,
}

/// Clear posts and categories, then load the sample data
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport, sqlx::Error> {
    let posts_removed = clear_posts(pool).await?;
    let categories_removed = clear_categories(pool).await?;
    tracing::info!("Cleared {} posts and {} categories", posts_removed, categories_removed);

    let tech = insert_category(pool, "Technology", Some("Tech posts")).await?;
    let lifestyle = insert_category(pool, "Lifestyle", Some("Lifestyle posts")).await?;

    let posts = [
        (
            "Getting Started with MERN Stack",
            "Learn how to build full-stack applications with MongoDB, Express, React, and Node.js...",
            "John Doe",
            &tech.id,
        ),
        (
            "React Hooks Best Practices",
            "Discover the best practices for using React hooks in your applications...",
            "Jane Smith",
            &tech.id,
        ),
        (
            "Work-Life Balance Tips",
            "Tips for maintaining a healthy work-life balance in the tech industry...",
            "Mike Johnson",
            &lifestyle.id,
        ),
    ];

    for (title, content, author, category_id) in posts {
        insert_post(pool, title, content, author, Some(category_id.as_str())).await?;
    }

    tracing::info!("Sample data created successfully");

    Ok(SeedReport {
        posts_removed,
        categories_removed,
        categories_created: 2,
        posts_created: posts.len(),
    })
}
