//! Identity provider boundary.
//!
//! The identity provider owns sign-in state. The gate only asks it, once
//! per request, which session the request carries.

use crate::{session::Session, web::RequestAdapter};

/// Resolves the session of an inbound request.
///
/// Implementations must not fail: anything missing, expired or malformed
/// resolves to [`Session::Anonymous`].
pub trait IdentityProvider: Send + Sync {
    /// Returns the session carried by `request`.
    fn session(&self, request: &RequestAdapter) -> Session;
}

/// Reads the user id from a header set by a trusted upstream auth proxy.
///
/// # Examples
///
/// ```
/// use showcase_gate::identity::{HeaderIdentity, IdentityProvider};
/// use showcase_gate::web::RequestAdapter;
///
/// let identity = HeaderIdentity::new("x-user-id");
///
/// let mut request = RequestAdapter::new("req-1", "/dashboard");
/// assert!(!identity.session(&request).is_authenticated());
///
/// request.add_header("X-User-Id", "user_2abc");
/// assert!(identity.session(&request).is_authenticated());
/// ```
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: String,
}

impl HeaderIdentity {
    /// Creates a provider reading `header` (case-insensitive).
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// Returns the header name this provider reads.
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl IdentityProvider for HeaderIdentity {
    fn session(&self, request: &RequestAdapter) -> Session {
        Session::from_raw(request.header(&self.header).map(str::trim))
    }
}

/// Always reports the same session. Useful for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    session: Session,
}

impl StaticIdentity {
    /// Creates a provider that always returns `session`.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// A provider that never sees a signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl IdentityProvider for StaticIdentity {
    fn session(&self, _request: &RequestAdapter) -> Session {
        self.session.clone()
    }
}
