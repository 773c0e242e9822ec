//! Session and per-request metadata.
//!
//! The identity provider creates and destroys sessions; this crate only
//! observes one per request and never mutates it.

use std::fmt;

/// Opaque user identifier issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps a provider-issued identifier.
    ///
    /// Returns `None` for an empty or whitespace-only value, which callers
    /// treat the same as a missing session.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication state of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No signed-in user
    #[default]
    Anonymous,
    /// Signed in as the given user
    Authenticated(UserId),
}

impl Session {
    /// Builds a session from a raw, possibly missing, identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use showcase_gate::Session;
    ///
    /// assert!(Session::from_raw(Some("user_2abc")).is_authenticated());
    /// assert_eq!(Session::from_raw(Some("")), Session::Anonymous);
    /// assert_eq!(Session::from_raw(None::<String>), Session::Anonymous);
    /// ```
    pub fn from_raw(raw: Option<impl Into<String>>) -> Self {
        raw.and_then(UserId::new).into()
    }

    /// Returns true for `Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// Returns the user id, if signed in.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(id) => Some(id),
        }
    }
}

impl From<Option<UserId>> for Session {
    fn from(id: Option<UserId>) -> Self {
        match id {
            Some(id) => Session::Authenticated(id),
            None => Session::Anonymous,
        }
    }
}

/// Metadata about an inbound request, as seen by the access gate.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// Session resolved for this request
    pub session: Session,
}
