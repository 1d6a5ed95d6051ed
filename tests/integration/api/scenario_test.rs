//! End-to-end scenarios
//!
//! The full register → post → comment → delete lifecycle, once through
//! `axum-test` and once through `BlogClient` over a real socket.

use axum::http::StatusCode;
use inkwell::backend::server::build_app;
use inkwell::client::{BlogClient, ClientError, Session};
use inkwell::shared::{
    AddCommentRequest, AuthResponse, CreateCategoryRequest, CreatePostRequest, LoginRequest, Post, PostListQuery,
    RegisterRequest, UpdatePostRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, create_test_pool, test_config, TestApp};

#[tokio::test]
async fn test_blog_lifecycle() {
    let app = TestApp::new().await;

    let registered = app
        .server
        .post("/api/auth/register")
        .json(&json!({"username": "alice", "email": "alice@x.com", "password": "secret1"}))
        .await;
    assert_eq!(registered.status_code(), StatusCode::CREATED);
    assert!(!registered.json::<AuthResponse>().token.is_empty());

    let login = app
        .server
        .post("/api/auth/login")
        .json(&json!({"email": "alice@x.com", "password": "secret1"}))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let token = login.json::<AuthResponse>().token;

    let created = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({"title": "Hi", "content": "Body", "author": "alice"}))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let post: Post = created.json();

    let commented = app
        .server
        .post(&format!("/api/posts/{}/comments", post.id))
        .authorization_bearer(&token)
        .json(&json!({"author": "bob", "content": "nice!"}))
        .await;
    assert_eq!(commented.status_code(), StatusCode::CREATED);
    let with_comment: Post = commented.json();
    assert_eq!(with_comment.comments.len(), 1);
    assert_eq!(with_comment.comments[0].author, "bob");
    assert_eq!(with_comment.comments[0].content, "nice!");

    let deleted = app
        .server
        .delete(&format!("/api/posts/{}", post.id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    assert_error(
        &app.server.get(&format!("/api/posts/{}", post.id)).await,
        StatusCode::NOT_FOUND,
        "Post not found",
    );
}

#[tokio::test]
async fn test_client_against_running_server() {
    let pool = create_test_pool().await;
    let app = build_app(pool, test_config(false)).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = BlogClient::new(format!("http://{addr}"));

    let session = client
        .register(&RegisterRequest {
            username: "alice".into(),
            email: "alice@x.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(client.me(&session).await.unwrap().username, "alice");

    // Persist and restore the session the way a CLI would between runs
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    session.save(&session_file).unwrap();
    let session = Session::load(&session_file).unwrap().unwrap();

    let tech = client
        .create_category(
            &session,
            &CreateCategoryRequest { name: "Technology".into(), description: None },
        )
        .await
        .unwrap();

    let post = client
        .create_post(
            &session,
            &CreatePostRequest {
                title: "Hi".into(),
                content: "Body".into(),
                author: "alice".into(),
                category: Some(tech.id.clone()),
            },
        )
        .await
        .unwrap();
    assert_eq!(post.category_name(), Some("Technology"));

    let post = client
        .update_post(
            &session,
            &post.id,
            &UpdatePostRequest { title: "Hi there".into(), content: "Body".into(), author: "alice".into() },
        )
        .await
        .unwrap();
    assert_eq!(post.title, "Hi there");

    let post = client
        .add_comment(&session, &post.id, &AddCommentRequest { author: "bob".into(), content: "nice!".into() })
        .await
        .unwrap();
    assert_eq!(post.comments.len(), 1);

    let listed = client
        .list_posts(&PostListQuery { category: Some("technology".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(client.list_categories().await.unwrap().len(), 1);

    let deleted = client.delete_post(&session, &post.id).await.unwrap();
    assert_eq!(deleted.message, "Post deleted successfully");

    let err = client.get_post(&post.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let err = client
        .login(&LoginRequest { email: "alice@x.com".into(), password: "wrong-password".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, ref message } if message == "Invalid credentials"));

    Session::clear(&session_file).unwrap();
    assert!(Session::load(&session_file).unwrap().is_none());
}
