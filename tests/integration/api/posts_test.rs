//! Post API integration tests

use axum::http::StatusCode;
use inkwell::shared::{Category, MessageResponse, Post};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, assert_unauthorized, register_alice, TestApp, TestUser};

async fn create_post(app: &TestApp, user: &TestUser, title: &str, content: &str, category: Option<&str>) -> Post {
    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({
            "title": title,
            "content": content,
            "author": "alice",
            "category": category
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json()
}

async fn create_category(app: &TestApp, user: &TestUser, name: &str) -> Category {
    let response = app
        .server
        .post("/api/categories")
        .authorization_bearer(&user.token)
        .json(&json!({"name": name}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json()
}

fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_empty_store_lists_placeholders() {
    let app = TestApp::new().await;

    let posts: Vec<Post> = app.server.get("/api/posts").await.json();

    assert_eq!(posts.len(), 2);
    assert_eq!((posts[0].id.as_str(), posts[0].title.as_str(), posts[0].author.as_str()), ("1", "Sample Post 1", "Test Author"));
    assert_eq!((posts[1].id.as_str(), posts[1].title.as_str(), posts[1].author.as_str()), ("2", "Sample Post 2", "Demo User"));
    assert!(posts.iter().all(|p| p.comments.is_empty() && p.category.is_none()));
}

#[tokio::test]
async fn test_empty_store_without_placeholders() {
    let app = TestApp::with_placeholders(false).await;

    let response = app.server.get("/api/posts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Post>>(), vec![]);
}

#[tokio::test]
async fn test_placeholders_disappear_once_a_post_exists() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    create_post(&app, &user, "Real post", "Body", None).await;

    let posts: Vec<Post> = app.server.get("/api/posts").await.json();
    assert_eq!(titles(&posts), vec!["Real post"]);
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/posts")
        .json(&json!({"title": "Hi", "content": "Body", "author": "alice"}))
        .await;

    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_create_then_get() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;

    let created = create_post(&app, &user, "Hello", "First post", None).await;
    let response = app.server.get(&format!("/api/posts/{}", created.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Post = response.json();
    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.content, "First post");
    assert_eq!(fetched.author, "alice");
    assert!(fetched.comments.is_empty());
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;

    let cases = [
        (json!({"title": "", "content": "Body", "author": "alice"}), "Title is required"),
        (json!({"title": "Hi", "content": "  ", "author": "alice"}), "Content is required"),
        (json!({"title": "Hi", "content": "Body"}), "Author is required"),
    ];

    for (body, message) in cases {
        let response = app
            .server
            .post("/api/posts")
            .authorization_bearer(&user.token)
            .json(&body)
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, message);
    }
}

#[tokio::test]
async fn test_malformed_input_gets_message_body() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;

    let bad_query = app.server.get("/api/posts").add_query_param("page", "abc").await;
    assert_eq!(bad_query.status_code(), StatusCode::BAD_REQUEST);
    assert!(!bad_query.json::<MessageResponse>().message.is_empty());

    let bad_body = app
        .server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({"title": 7, "content": "Body", "author": "alice"}))
        .await;
    assert_eq!(bad_body.status_code(), StatusCode::BAD_REQUEST);
    assert!(!bad_body.json::<MessageResponse>().message.is_empty());
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = TestApp::new().await;

    assert_error(&app.server.get("/api/posts/does-not-exist").await, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_update_post() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    let created = create_post(&app, &user, "Hello", "First post", None).await;

    let response = app
        .server
        .put(&format!("/api/posts/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&json!({"title": "Hello again", "content": "Edited", "author": "alice"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Post = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Hello again");
    assert_eq!(updated.content, "Edited");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_errors() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    let created = create_post(&app, &user, "Hello", "First post", None).await;

    let invalid = app
        .server
        .put(&format!("/api/posts/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&json!({"title": "", "content": "Edited", "author": "alice"}))
        .await;
    assert_error(&invalid, StatusCode::BAD_REQUEST, "Title is required");

    let missing = app
        .server
        .put("/api/posts/does-not-exist")
        .authorization_bearer(&user.token)
        .json(&json!({"title": "T", "content": "C", "author": "A"}))
        .await;
    assert_error(&missing, StatusCode::NOT_FOUND, "Post not found");

    let anonymous = app
        .server
        .put(&format!("/api/posts/{}", created.id))
        .json(&json!({"title": "T", "content": "C", "author": "A"}))
        .await;
    assert_unauthorized(&anonymous);
}

#[tokio::test]
async fn test_delete_then_get() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    let created = create_post(&app, &user, "Hello", "First post", None).await;
    let path = format!("/api/posts/{}", created.id);

    let response = app.server.delete(&path).authorization_bearer(&user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<MessageResponse>().message, "Post deleted successfully");

    assert_error(&app.server.get(&path).await, StatusCode::NOT_FOUND, "Post not found");
    assert_error(
        &app.server.delete(&path).authorization_bearer(&user.token).await,
        StatusCode::NOT_FOUND,
        "Post not found",
    );
}

#[tokio::test]
async fn test_any_user_may_edit_any_post() {
    let app = TestApp::new().await;
    let alice = register_alice(&app.server).await;
    let bob = crate::common::register_user(&app.server, "bob", "bob@example.com", "secret1").await;
    let created = create_post(&app, &alice, "Hello", "First post", None).await;

    let response = app
        .server
        .delete(&format!("/api/posts/{}", created.id))
        .authorization_bearer(&bob.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    for title in ["one", "two", "three"] {
        create_post(&app, &user, title, "Body", None).await;
    }

    let posts: Vec<Post> = app.server.get("/api/posts").await.json();
    assert_eq!(titles(&posts), vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_category_is_resolved_inline() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    let tech = create_category(&app, &user, "Technology").await;

    let post = create_post(&app, &user, "Rust", "Ownership", Some(&tech.id)).await;
    assert_eq!(post.category_name(), Some("Technology"));

    let fetched: serde_json::Value = app.server.get(&format!("/api/posts/{}", post.id)).await.json();
    assert_eq!(fetched["category"]["id"], tech.id.as_str());
    assert_eq!(fetched["category"]["name"], "Technology");
}

#[tokio::test]
async fn test_dangling_category_reference_is_kept() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;

    let post = create_post(&app, &user, "Orphan", "Body", Some("no-such-category")).await;

    let fetched: serde_json::Value = app.server.get(&format!("/api/posts/{}", post.id)).await.json();
    assert_eq!(fetched["category"], "no-such-category");
}

#[tokio::test]
async fn test_list_filters_and_pagination() {
    let app = TestApp::new().await;
    let user = register_alice(&app.server).await;
    let tech = create_category(&app, &user, "Technology").await;
    let life = create_category(&app, &user, "Lifestyle").await;

    create_post(&app, &user, "Rust tips", "Ownership", Some(&tech.id)).await;
    create_post(&app, &user, "Gardening", "Rust on tools", Some(&life.id)).await;
    create_post(&app, &user, "Async Rust", "Tokio", Some(&tech.id)).await;
    create_post(&app, &user, "Travel", "Trains", None).await;

    let search: Vec<Post> = app.server.get("/api/posts").add_query_param("search", "RUST").await.json();
    assert_eq!(titles(&search), vec!["Rust tips", "Gardening", "Async Rust"]);

    let by_category: Vec<Post> = app
        .server
        .get("/api/posts")
        .add_query_param("category", "technology")
        .await
        .json();
    assert_eq!(titles(&by_category), vec!["Rust tips", "Async Rust"]);

    let combined: Vec<Post> = app
        .server
        .get("/api/posts")
        .add_query_param("search", "rust")
        .add_query_param("category", "lifestyle")
        .await
        .json();
    assert_eq!(titles(&combined), vec!["Gardening"]);

    let page_two: Vec<Post> = app.server.get("/api/posts").add_query_param("page", 2).await.json();
    assert_eq!(titles(&page_two), vec!["Travel"]);

    let small_pages: Vec<Post> = app
        .server
        .get("/api/posts")
        .add_query_param("page", 2)
        .add_query_param("limit", 2)
        .await
        .json();
    assert_eq!(titles(&small_pages), vec!["Async Rust", "Travel"]);

    let no_match: Vec<Post> = app.server.get("/api/posts").add_query_param("search", "haskell").await.json();
    assert!(no_match.is_empty());
}
