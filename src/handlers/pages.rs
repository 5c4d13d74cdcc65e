use axum::{extract::Extension, http::Uri, response::Html};

use crate::auth::SessionUser;
use crate::error::ApiError;

const LOGIN_HTML: &str = r#"<!doctype html>
<html>
  <head><title>Sign in</title></head>
  <body>
    <h1>Sign in</h1>
    <p>Your session has ended or you have not signed in yet.</p>
  </body>
</html>
"#;

/// GET /login - only anonymous visitors get here
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

/// GET /dashboard - the gate has already attached the session user
pub async fn dashboard(user: Option<Extension<SessionUser>>) -> Result<Html<String>, ApiError> {
    // Missing when the dashboard was configured out of the gate
    let Extension(user) =
        user.ok_or_else(|| ApiError::unauthorized("Sign in to view the dashboard"))?;

    Ok(Html(format!(
        concat!(
            "<!doctype html>\n<html>\n  <head><title>Dashboard</title></head>\n",
            "  <body><h1>Welcome, {}</h1></body>\n</html>\n",
        ),
        escape_html(&user.user)
    )))
}

/// Anything that got past the gate but matches no route
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} not found", uri.path()))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>O'Neil & co</b>"), "&lt;b&gt;O&#39;Neil &amp; co&lt;/b&gt;");
        assert_eq!(escape_html("alice"), "alice");
    }
}
