/// Paths that skip the gate entirely
///
/// A path is excluded when the text after its leading `/` starts with one of
/// the configured prefixes. With the default prefixes this is the same set as
/// `/((?!api|_next/static|_next/image|favicon.ico).*)` leaves out: API
/// routes, build assets, optimized images and the favicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    prefixes: Vec<String>,
}

pub const DEFAULT_EXCLUDE_PREFIXES: [&str; 4] =
    ["api", "_next/static", "_next/image", "favicon.ico"];

impl PathMatcher {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| {
                let p: String = p.into();
                p.trim().trim_start_matches('/').to_string()
            })
            .filter(|p| !p.is_empty())
            .collect();

        Self { prefixes }
    }

    /// True when the gate must not see this path
    pub fn is_excluded(&self, path: &str) -> bool {
        // Paths that don't start with '/' never match the pattern's leading slash
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };

        self.prefixes.iter().any(|prefix| rest.starts_with(prefix.as_str()))
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PREFIXES)
    }
}
