//! Route classification.
//!
//! Every intercepted path falls into exactly one [`RouteCategory`]. The
//! classification is a pure predicate over two fixed allow-lists; nothing
//! is stored per route.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Paths reachable without a session.
pub const DEFAULT_PUBLIC_ROUTES: [&str; 4] = ["/signin", "/signup", "/", "/home"];

/// API paths reachable without a session.
pub const DEFAULT_PUBLIC_API_ROUTES: [&str; 1] = ["/api/videos"];

/// Category a path is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    /// Marketing and auth pages
    Public,
    /// Unauthenticated API endpoints
    PublicApi,
    /// Everything else
    Protected,
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteCategory::Public => write!(f, "public"),
            RouteCategory::PublicApi => write!(f, "public_api"),
            RouteCategory::Protected => write!(f, "protected"),
        }
    }
}

/// How allow-list entries are compared with a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The path must equal the entry
    #[default]
    Exact,
    /// The path must equal the entry or continue it with a `/` segment.
    ///
    /// The root entry `/` still only matches `/`.
    Prefix,
}

impl MatchMode {
    fn matches(self, entry: &str, path: &str) -> bool {
        match self {
            MatchMode::Exact => entry == path,
            MatchMode::Prefix => {
                if entry == "/" || entry == path {
                    return entry == path;
                }
                path.strip_prefix(entry.trim_end_matches('/'))
                    .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// The two allow-lists that drive classification.
///
/// # Examples
///
/// ```
/// use showcase_gate::{RouteCategory, RouteTable};
///
/// let table = RouteTable::default();
/// assert_eq!(table.classify("/signup"), RouteCategory::Public);
/// assert_eq!(table.classify("/api/videos"), RouteCategory::PublicApi);
/// assert_eq!(table.classify("/dashboard"), RouteCategory::Protected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    public: Vec<String>,
    public_api: Vec<String>,
    mode: MatchMode,
}

impl RouteTable {
    /// Creates a table from explicit allow-lists.
    pub fn new<P, A>(public: P, public_api: A, mode: MatchMode) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            public: public.into_iter().map(Into::into).collect(),
            public_api: public_api.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Classifies `path`. Public membership is checked before PublicApi.
    pub fn classify(&self, path: &str) -> RouteCategory {
        if self.is_listed(&self.public, path) {
            RouteCategory::Public
        } else if self.is_listed(&self.public_api, path) {
            RouteCategory::PublicApi
        } else {
            RouteCategory::Protected
        }
    }

    fn is_listed(&self, entries: &[String], path: &str) -> bool {
        entries.iter().any(|entry| self.mode.matches(entry, path))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_PUBLIC_ROUTES,
            DEFAULT_PUBLIC_API_ROUTES,
            MatchMode::Exact,
        )
    }
}

/// Classifies `path` against the default allow-lists.
pub fn classify(path: &str) -> RouteCategory {
    RouteTable::default().classify(path)
}
