use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::{AuthOracle, Claims, SessionError, SessionUser};

/// Session oracle backed by HS256 JWTs
///
/// The token is read from the session cookie first, then from an
/// `Authorization: Bearer` header. Any failure means "not signed in".
#[derive(Clone)]
pub struct JwtSessionOracle {
    decoding_key: Option<DecodingKey>,
    cookie_name: String,
}

impl JwtSessionOracle {
    pub fn new(secret: &str, cookie_name: impl Into<String>) -> Self {
        let decoding_key =
            (!secret.is_empty()).then(|| DecodingKey::from_secret(secret.as_bytes()));

        Self {
            decoding_key,
            cookie_name: cookie_name.into(),
        }
    }

    /// Validate the request's session token and extract its claims
    pub fn verify(&self, headers: &HeaderMap) -> Result<Claims, SessionError> {
        let decoding_key = self
            .decoding_key
            .as_ref()
            .ok_or(SessionError::SecretNotConfigured)?;

        let token = extract_token(headers, &self.cookie_name)?;
        let token_data = decode::<Claims>(&token, decoding_key, &Validation::default())?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtSessionOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionOracle")
            .field("cookie_name", &self.cookie_name)
            .field("configured", &self.decoding_key.is_some())
            .finish()
    }
}

impl AuthOracle for JwtSessionOracle {
    fn resolve(&self, headers: &HeaderMap) -> Option<SessionUser> {
        match self.verify(headers) {
            Ok(claims) => Some(SessionUser::from(claims)),
            Err(e) => {
                tracing::debug!(reason = %e, "request has no valid session");
                None
            }
        }
    }
}

/// Pull the session token out of the cookie jar or the Authorization header
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, SessionError> {
    if let Some(token) = cookie_value(headers, cookie_name) {
        return Ok(token);
    }

    let auth_header = match headers.get(header::AUTHORIZATION) {
        Some(value) => value,
        None => return Err(SessionError::Missing),
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| SessionError::MalformedHeader)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(SessionError::MalformedHeader),
    }
}

/// First non-empty value of the named cookie across all Cookie headers
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.trim_matches('"').to_string())
}
