use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::gate::PathMatcher;
use crate::handlers;
use crate::middleware::{request_gate, GateState, JwtSessionOracle};

/// Gate state wired from configuration: configured exclusions plus the JWT
/// session oracle
pub fn gate_state(config: &AppConfig) -> GateState {
    GateState::new(
        PathMatcher::new(config.gate.exclude_prefixes.iter().cloned()),
        JwtSessionOracle::new(
            &config.security.jwt_secret,
            config.security.session_cookie.as_str(),
        ),
    )
}

/// Full application router. The gate wraps every route and the fallback.
pub fn build_router(state: GateState, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/login", get(handlers::login_page))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::fallback)
        .layer(middleware::from_fn_with_state(state, request_gate));

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }

    if config.security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Some(CorsLayer::new().allow_origin(AllowOrigin::list(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_state_uses_configured_exclusions() {
        let mut config = AppConfig::development();
        config.gate.exclude_prefixes = vec!["assets".to_string()];

        let state = gate_state(&config);
        assert!(state.matcher.is_excluded("/assets/app.css"));
        assert!(!state.matcher.is_excluded("/api/health"));
    }

    #[test]
    fn test_gate_state_default_exclusions() {
        let state = gate_state(&AppConfig::production());
        assert!(state.matcher.is_excluded("/api/health"));
        assert!(state.matcher.is_excluded("/favicon.ico"));
        assert!(!state.matcher.is_excluded("/dashboard"));
    }
}
