use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: String,
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: impl Into<String>, user_id: Uuid, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user: user.into(),
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// Signed-in visitor, available to handlers as a request extension once the
/// gate has let an authenticated request through
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub user: String,
    pub user_id: Uuid,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        Self {
            user: claims.user,
            user_id: claims.user_id,
        }
    }
}

/// Why a request carries no usable session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no session cookie or Authorization header")]
    Missing,
    #[error("Authorization header must use Bearer token format")]
    MalformedHeader,
    #[error("invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("session secret not configured")]
    SecretNotConfigured,
}

/// Answers "does this request hold a valid session?"
///
/// Resolution must not fail: anything short of a valid session is `None`.
pub trait AuthOracle: Send + Sync + 'static {
    fn resolve(&self, headers: &HeaderMap) -> Option<SessionUser>;
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid JWT secret")]
    InvalidSecret,
}

/// Mint a session token for the given claims
pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::default(), claims, &encoding_key)?)
}
