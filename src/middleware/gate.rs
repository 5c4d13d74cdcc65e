use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::AuthOracle;
use crate::gate::{decide, PathMatcher, RoutingDecision};

/// Shared, read-only inputs of the gate
#[derive(Clone)]
pub struct GateState {
    pub matcher: Arc<PathMatcher>,
    pub oracle: Arc<dyn AuthOracle>,
}

impl GateState {
    pub fn new(matcher: PathMatcher, oracle: impl AuthOracle) -> Self {
        Self {
            matcher: Arc::new(matcher),
            oracle: Arc::new(oracle),
        }
    }
}

/// Middleware that redirects visitors between the login page and the
/// dashboard and keeps every other gated page behind a session
///
/// Excluded paths go straight to the router without consulting the oracle.
pub async fn request_gate(
    State(state): State<GateState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    if state.matcher.is_excluded(&path) {
        tracing::trace!(%path, "path excluded from gate");
        return next.run(request).await;
    }

    let session = state.oracle.resolve(request.headers());
    let decision = decide(&path, session.is_some());

    tracing::debug!(
        %path,
        authenticated = session.is_some(),
        redirect = decision.target().unwrap_or("-"),
        "gate decision"
    );

    match decision {
        RoutingDecision::Redirect(target) => Redirect::temporary(target).into_response(),
        RoutingDecision::Continue => {
            if let Some(user) = session {
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
    }
}
