/**
 * Blog API Client
 *
 * Async HTTP client for every endpoint of the blog API. Protected calls take
 * the caller's [`Session`]; the client itself keeps no login state.
 */

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::client::error::ClientError;
use crate::client::session::Session;
use crate::shared::{
    AddCommentRequest, AuthResponse, Category, CreateCategoryRequest, CreatePostRequest, LoginRequest,
    MessageResponse, Post, PostListQuery, RegisterRequest, UpdatePostRequest, UserResponse,
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

#[derive(Debug, Clone)]
pub struct BlogClient {
    http: Client,
    base_url: String,
}

impl Default for BlogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post_url(&self, id: &str) -> String {
        self.api_url(&format!("/api/posts/{id}"))
    }

    /// Create an account and return the new session
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError> {
        let response: AuthResponse = send(self.http.post(self.api_url("/api/auth/register")).json(request)).await?;
        Ok(response.into())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let response: AuthResponse = send(self.http.post(self.api_url("/api/auth/login")).json(request)).await?;
        Ok(response.into())
    }

    pub async fn me(&self, session: &Session) -> Result<UserResponse, ClientError> {
        send(authorized(self.http.get(self.api_url("/api/auth/me")), session)).await
    }

    pub async fn list_posts(&self, query: &PostListQuery) -> Result<Vec<Post>, ClientError> {
        send(self.http.get(self.api_url("/api/posts")).query(query)).await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        send(self.http.get(self.post_url(id))).await
    }

    pub async fn create_post(&self, session: &Session, request: &CreatePostRequest) -> Result<Post, ClientError> {
        send(authorized(self.http.post(self.api_url("/api/posts")), session).json(request)).await
    }

    pub async fn update_post(
        &self,
        session: &Session,
        id: &str,
        request: &UpdatePostRequest,
    ) -> Result<Post, ClientError> {
        send(authorized(self.http.put(self.post_url(id)), session).json(request)).await
    }

    pub async fn delete_post(&self, session: &Session, id: &str) -> Result<MessageResponse, ClientError> {
        send(authorized(self.http.delete(self.post_url(id)), session)).await
    }

    /// Add a comment; returns the whole post with its comments
    pub async fn add_comment(
        &self,
        session: &Session,
        post_id: &str,
        request: &AddCommentRequest,
    ) -> Result<Post, ClientError> {
        let url = self.api_url(&format!("/api/posts/{post_id}/comments"));
        send(authorized(self.http.post(url), session).json(request)).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        send(self.http.get(self.api_url("/api/categories"))).await
    }

    pub async fn create_category(
        &self,
        session: &Session,
        request: &CreateCategoryRequest,
    ) -> Result<Category, ClientError> {
        send(authorized(self.http.post(self.api_url("/api/categories")), session).json(request)).await
    }
}

fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    builder.header(AUTHORIZATION, session.bearer())
}

/// Send a request and decode the JSON body, or turn a failure status into
/// `ClientError::Api` carrying the server's `message`
async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
    let response = builder.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or_else(|_| if body.is_empty() { status.to_string() } else { body });
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
