//! Posts, comments and categories
//!
//! Field names are camelCase on the wire (`createdAt`, `updatedAt`) and ids
//! are opaque strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::require_non_empty;

/// Page size used when a page is requested without a limit
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Upper bound for `limit`
pub const MAX_PAGE_SIZE: usize = 100;

/// A comment embedded in its post
///
/// Comments have no id of their own and are never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Category as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category fields inlined into a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A post's category association
///
/// `Reference` carries the raw id when it no longer (or never did) resolve to
/// a stored category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PostCategory {
    Resolved(CategorySummary),
    Reference(String),
}

impl PostCategory {
    pub fn id(&self) -> &str {
        match self {
            Self::Resolved(summary) => &summary.id,
            Self::Reference(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Resolved(summary) => Some(&summary.name),
            Self::Reference(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-text byline, not tied to any account
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
    /// Insertion order is preserved
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(PostCategory::name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    /// Category id; not checked against the category store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_post_fields(&self.title, &self.content, &self.author)
    }

    /// Category id with blank values treated as absent
    pub fn category_id(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Full replacement of a post's text fields
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_post_fields(&self.title, &self.content, &self.author)
    }
}

fn validate_post_fields(title: &str, content: &str, author: &str) -> Result<(), SharedError> {
    require_non_empty("title", title, "Title is required")?;
    require_non_empty("content", content, "Content is required")?;
    require_non_empty("author", author, "Author is required")?;
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl AddCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("author", &self.author, "Author is required")?;
        require_non_empty("content", &self.content, "Comment content is required")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name, "Category name is required")
    }
}

/// Query string accepted by `GET /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PostListQuery {
    /// Case-insensitive substring of title or content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Case-insensitive category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 1-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PostListQuery {
    /// `(offset, limit)` when the caller asked for a page, `None` for everything
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }

        let limit = self
            .limit
            .map(|limit| (limit as usize).clamp(1, MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let page = self.page.unwrap_or(1).max(1) as usize;

        Some(((page - 1) * limit, limit))
    }
}

/// `{ "message": "..." }` body used for confirmations and errors alike
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
