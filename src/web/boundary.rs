//! Which requests reach the gate at all.
//!
//! Static assets and framework-internal paths bypass session lookup and the
//! access decision entirely. API paths are always intercepted, even when
//! they look like files.

/// Decides whether a path is intercepted by the gate.
///
/// A path is skipped when it contains a `.` anywhere or starts with one of
/// the internal prefixes, unless it starts with one of the always-intercept
/// prefixes.
///
/// # Examples
///
/// ```
/// use showcase_gate::web::BoundaryFilter;
///
/// let filter = BoundaryFilter::default();
/// assert!(filter.should_intercept("/dashboard"));
/// assert!(!filter.should_intercept("/favicon.ico"));
/// assert!(!filter.should_intercept("/_next/static/chunks/main"));
/// assert!(filter.should_intercept("/api/export.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryFilter {
    internal_prefixes: Vec<String>,
    always_intercept: Vec<String>,
}

impl BoundaryFilter {
    /// Creates a filter from explicit prefix lists.
    pub fn new<I, A>(internal_prefixes: I, always_intercept: A) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            internal_prefixes: internal_prefixes.into_iter().map(Into::into).collect(),
            always_intercept: always_intercept.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the gate must evaluate `path`.
    pub fn should_intercept(&self, path: &str) -> bool {
        if self
            .always_intercept
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return true;
        }

        if path.contains('.') {
            return false;
        }

        !self
            .internal_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for BoundaryFilter {
    fn default() -> Self {
        Self::new(["/_next"], ["/api", "/trpc"])
    }
}
