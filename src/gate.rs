//! Access decision engine.
//!
//! Maps a session and a request path to allow or redirect using the
//! route table's allow-lists.

use std::fmt;

use crate::{
    route::{RouteCategory, RouteTable},
    session::Session,
};

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Continue to the requested page or endpoint
    Allow,
    /// Send the client to another path
    Redirect(String),
}

impl AccessDecision {
    /// Returns the redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Redirect(target) => Some(target),
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Allow => write!(f, "allow"),
            AccessDecision::Redirect(target) => write!(f, "redirect({})", target),
        }
    }
}

/// The rule that produced a decision, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// Signed-in user on a public page other than the landing page
    SignedInOnPublicPage,
    /// Anonymous user outside the public and public-API sets
    AnonymousOnProtectedRoute,
    /// Anonymous user in the API namespace outside the public-API set
    AnonymousOnPrivateApi,
    /// Nothing matched
    Fallthrough,
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessRule::SignedInOnPublicPage => write!(f, "signed_in_on_public_page"),
            AccessRule::AnonymousOnProtectedRoute => write!(f, "anonymous_on_protected_route"),
            AccessRule::AnonymousOnPrivateApi => write!(f, "anonymous_on_private_api"),
            AccessRule::Fallthrough => write!(f, "fallthrough"),
        }
    }
}

/// The access decision engine.
///
/// `AccessGate` maps a session and a path to [`AccessDecision::Allow`] or a
/// redirect. It is total: every input yields a decision, and a missing or
/// malformed session is simply [`Session::Anonymous`].
///
/// Rules are evaluated in order, first match wins:
///
/// 1. signed in, path is Public, path is not the landing page → landing page
/// 2. anonymous, path is neither Public nor PublicApi → sign-in page
/// 3. anonymous, path is in the API namespace and not PublicApi → sign-in page
/// 4. otherwise allow
///
/// Rule 3 cannot fire while rule 2 covers every non-public path; it is kept
/// as its own check because it keys off the path prefix rather than the
/// allow-lists.
///
/// # Examples
///
/// ```
/// use showcase_gate::{AccessDecision, AccessGate, Session};
///
/// let gate = AccessGate::default();
///
/// let signed_in = Session::from_raw(Some("user_1"));
/// assert_eq!(
///     gate.decide(&signed_in, "/signin"),
///     AccessDecision::Redirect("/home".to_string())
/// );
/// assert_eq!(gate.decide(&signed_in, "/home"), AccessDecision::Allow);
///
/// assert_eq!(
///     gate.decide(&Session::Anonymous, "/dashboard"),
///     AccessDecision::Redirect("/signin".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AccessGate {
    routes: RouteTable,
    landing_path: String,
    sign_in_path: String,
    api_prefix: String,
}

impl AccessGate {
    /// Creates a gate over the given route table with the default targets.
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            landing_path: "/home".to_string(),
            sign_in_path: "/signin".to_string(),
            api_prefix: "/api/".to_string(),
        }
    }

    /// Sets the page signed-in users land on.
    pub fn with_landing_path(mut self, path: impl Into<String>) -> Self {
        self.landing_path = path.into();
        self
    }

    /// Sets the page anonymous users are sent to.
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    /// Sets the prefix that marks the API namespace.
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Returns the landing path.
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Returns the sign-in path.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Decides whether `session` may proceed to `path`.
    pub fn decide(&self, session: &Session, path: &str) -> AccessDecision {
        self.evaluate(session, path).1
    }

    /// Decides and reports which rule matched.
    pub fn evaluate(&self, session: &Session, path: &str) -> (AccessRule, AccessDecision) {
        let category = self.routes.classify(path);
        let rule = self.matching_rule(session, category, path);

        let decision = match rule {
            AccessRule::SignedInOnPublicPage => AccessDecision::Redirect(self.landing_path.clone()),
            AccessRule::AnonymousOnProtectedRoute | AccessRule::AnonymousOnPrivateApi => {
                AccessDecision::Redirect(self.sign_in_path.clone())
            }
            AccessRule::Fallthrough => AccessDecision::Allow,
        };

        tracing::trace!(
            path,
            category = %category,
            rule = %rule,
            decision = %decision,
            "access evaluated"
        );

        (rule, decision)
    }

    fn matching_rule(&self, session: &Session, category: RouteCategory, path: &str) -> AccessRule {
        let anonymous = !session.is_authenticated();

        if !anonymous && category == RouteCategory::Public && path != self.landing_path {
            return AccessRule::SignedInOnPublicPage;
        }

        if anonymous && category != RouteCategory::Public && category != RouteCategory::PublicApi {
            return AccessRule::AnonymousOnProtectedRoute;
        }

        let in_api = path.starts_with(&self.api_prefix);
        if anonymous && in_api && category != RouteCategory::PublicApi {
            return AccessRule::AnonymousOnPrivateApi;
        }

        AccessRule::Fallthrough
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}
