//! Request interception in front of every page and API handler.
//!
//! ```text
//! HTTP Request
//!   ↓
//! BoundaryFilter        (assets, framework internals → pass through)
//!   ↓
//! IdentityProvider      (one session lookup)
//!   ↓
//! AccessGate::evaluate  (allow or redirect)
//!   ↓
//! inner handler  |  307 Location: <target>
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    gate::{AccessDecision, AccessGate},
    identity::IdentityProvider,
    logging::RequestLog,
    session::RequestMeta,
};

use super::{BoundaryFilter, RequestAdapter};

/// What to do with an inbound request.
#[derive(Debug, Clone)]
pub enum Interception {
    /// The boundary filter skipped the path; no session was looked up
    Bypass,
    /// The gate allowed the request
    Proceed(RequestMeta),
    /// The gate redirected the request
    Redirect {
        /// Request metadata
        meta: RequestMeta,
        /// Path to send the client to
        target: String,
    },
}

/// Everything the guard needs, shared across requests.
#[derive(Clone)]
pub struct GuardState {
    gate: Arc<AccessGate>,
    filter: Arc<BoundaryFilter>,
    identity: Arc<dyn IdentityProvider>,
}

impl GuardState {
    /// Bundles a gate, boundary filter and identity provider.
    pub fn new(
        gate: AccessGate,
        filter: BoundaryFilter,
        identity: impl IdentityProvider + 'static,
    ) -> Self {
        Self {
            gate: Arc::new(gate),
            filter: Arc::new(filter),
            identity: Arc::new(identity),
        }
    }

    /// Runs the boundary filter, identity lookup and access decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use showcase_gate::identity::StaticIdentity;
    /// use showcase_gate::web::{BoundaryFilter, GuardState, Interception, RequestAdapter};
    /// use showcase_gate::AccessGate;
    ///
    /// let state = GuardState::new(
    ///     AccessGate::default(),
    ///     BoundaryFilter::default(),
    ///     StaticIdentity::anonymous(),
    /// );
    ///
    /// let adapter = RequestAdapter::new("req-1", "/dashboard");
    /// match state.intercept(&adapter) {
    ///     Interception::Redirect { target, .. } => assert_eq!(target, "/signin"),
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    pub fn intercept(&self, adapter: &RequestAdapter) -> Interception {
        let log = RequestLog::new(adapter.request_id(), adapter.path());

        if !self.filter.should_intercept(adapter.path()) {
            log.debug(format_args!("outside gate boundary"));
            return Interception::Bypass;
        }

        let session = self.identity.session(adapter);
        let (rule, decision) = self.gate.evaluate(&session, adapter.path());
        let meta = RequestMeta {
            request_id: adapter.request_id().to_string(),
            session,
        };

        match decision {
            AccessDecision::Allow => {
                log.debug(format_args!("allowed ({})", rule));
                Interception::Proceed(meta)
            }
            AccessDecision::Redirect(target) => {
                log.info(format_args!("redirecting to {} ({})", target, rule));
                Interception::Redirect { meta, target }
            }
        }
    }
}

impl std::fmt::Debug for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardState")
            .field("gate", &self.gate)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// axum middleware enforcing the access gate.
///
/// Install with `axum::middleware::from_fn_with_state(state, route_guard)`.
/// Allowed requests continue with the resolved [`RequestMeta`] inserted as
/// a request extension; redirected requests get `307 Temporary Redirect`.
pub async fn route_guard(
    State(state): State<GuardState>,
    mut request: Request,
    next: Next,
) -> Response {
    let adapter = RequestAdapter::from_request(&request);

    match state.intercept(&adapter) {
        Interception::Bypass => next.run(request).await,
        Interception::Proceed(meta) => {
            request.extensions_mut().insert(meta);
            next.run(request).await
        }
        Interception::Redirect { target, .. } => Redirect::temporary(&target).into_response(),
    }
}
