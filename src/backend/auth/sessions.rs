/**
 * Session Tokens
 *
 * Issues and validates the stateless HS256 JWTs that gate every mutating
 * endpoint. Nothing is stored server-side; expiry is the only way a token
 * stops working.
 */

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::server::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a token was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("token subject is not a user id")]
    BadSubject,
}

/// Identity recovered from a valid token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub username: Option<String>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies session tokens with a shared secret and fixed TTL
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<Keys>,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.token_ttl)
    }

    /// Issue a token for `user`, valid from now for the configured TTL
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user, now_secs())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: u64) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: Some(user.username.clone()),
            exp: issued_at.saturating_add(self.ttl.as_secs()),
            iat: issued_at,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> Result<TokenIdentity, TokenError> {
        self.verify_at(token, now_secs())
    }

    /// Verify signature and expiry against `now`
    ///
    /// A token is expired once `now >= exp`; there is no leeway.
    pub fn verify_at(&self, token: &str, now: u64) -> Result<TokenIdentity, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.keys.decoding, &validation)?.claims;

        if now >= claims.exp {
            return Err(TokenError::Expired);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::BadSubject)?;

        Ok(TokenIdentity {
            user_id,
            email: claims.email,
            username: claims.username,
        })
    }
}

fn now_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
