#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, Response};
use axum::Router;
use tower::ServiceExt;
use uuid::Uuid;

use gatehouse::auth::{generate_jwt, AuthOracle, Claims, SessionUser};
use gatehouse::config::AppConfig;
use gatehouse::gate::PathMatcher;
use gatehouse::middleware::GateState;
use gatehouse::router::{build_router, gate_state};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Development profile with a known signing secret
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = TEST_SECRET.to_string();
    config.api.enable_request_logging = false;
    config
}

/// Router wired exactly like the binary wires it
pub fn app() -> Router {
    let config = test_config();
    build_router(gate_state(&config), &config)
}

/// Session cookie header value for a freshly signed-in user
pub fn session_cookie(user: &str) -> String {
    let config = test_config();
    let claims = Claims::new(user, Uuid::new_v4(), 1);
    let token = generate_jwt(&claims, TEST_SECRET).expect("failed to encode test JWT");
    format!("{}={}", config.security.session_cookie, token)
}

pub async fn get(app: Router, path: &str, cookie: Option<&str>) -> Result<Response<Body>> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(app.oneshot(builder.body(Body::empty())?).await?)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response<Body>) -> Result<serde_json::Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Oracle with a fixed answer that counts how often it is asked
#[derive(Clone)]
pub struct CountingOracle {
    pub user: Option<SessionUser>,
    pub calls: Arc<AtomicUsize>,
}

impl CountingOracle {
    pub fn new(authenticated: bool) -> Self {
        let user = authenticated.then(|| SessionUser {
            user: "fixture".to_string(),
            user_id: Uuid::nil(),
        });
        Self { user, calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthOracle for CountingOracle {
    fn resolve(&self, _headers: &HeaderMap) -> Option<SessionUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user.clone()
    }
}

/// Router gated by the given oracle and the default exclusions
pub fn app_with_oracle(oracle: CountingOracle) -> Router {
    let config = test_config();
    build_router(GateState::new(PathMatcher::default(), oracle), &config)
}
