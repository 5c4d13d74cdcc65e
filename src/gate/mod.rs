// gate/mod.rs - Request gate decision table
//
// The gate decides, from the request path and whether the visitor holds a
// valid session, if the request is redirected or allowed through. It is a
// pure function; the axum wiring lives in middleware::gate.

pub mod matcher;

pub use matcher::PathMatcher;

/// Landing page for signed-in visitors
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Sign-in page for anonymous visitors
pub const LOGIN_PATH: &str = "/login";

const ROOT_PATH: &str = "/";

/// Outcome of running a request through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Send the visitor elsewhere
    Redirect(&'static str),
    /// Hand the request to normal routing unchanged
    Continue,
}

impl RoutingDecision {
    pub fn target(&self) -> Option<&'static str> {
        match *self {
            RoutingDecision::Redirect(target) => Some(target),
            RoutingDecision::Continue => None,
        }
    }
}

/// Decide what happens to a request. First match wins:
///
/// - `/` always redirects: to the dashboard when signed in, else to login
/// - anything starting with `/login` passes for anonymous visitors and
///   bounces signed-in visitors to the dashboard
/// - every other path requires a session
pub fn decide(path: &str, is_authenticated: bool) -> RoutingDecision {
    if path == ROOT_PATH {
        return if is_authenticated {
            RoutingDecision::Redirect(DASHBOARD_PATH)
        } else {
            RoutingDecision::Redirect(LOGIN_PATH)
        };
    }

    if path.starts_with(LOGIN_PATH) {
        return if is_authenticated {
            RoutingDecision::Redirect(DASHBOARD_PATH)
        } else {
            RoutingDecision::Continue
        };
    }

    if !is_authenticated {
        return RoutingDecision::Redirect(LOGIN_PATH);
    }

    RoutingDecision::Continue
}
