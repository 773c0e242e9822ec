//! HTTP integration surface.
//!
//! This module maps inbound HTTP requests onto the gate:
//! - `RequestAdapter`: framework-agnostic view of a request
//! - `BoundaryFilter`: which paths the gate sees at all
//! - `GuardState::intercept`: filter, session lookup and decision in one step
//! - `route_guard`: the axum middleware honouring that decision
//! - `router`: the guarded application routes
//!
//! Page handlers here are thin stand-ins for the presentation layer. They
//! exist so every route category has something behind the guard.

mod adapter;
mod boundary;
mod middleware;

pub use adapter::{RequestAdapter, REQUEST_ID_HEADER};
pub use boundary::BoundaryFilter;
pub use middleware::{route_guard, GuardState, Interception};

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

use crate::{catalog, session::RequestMeta};

/// Builds the application router with every route behind the guard.
///
/// # Examples
///
/// ```
/// use showcase_gate::identity::StaticIdentity;
/// use showcase_gate::web::{router, BoundaryFilter, GuardState};
/// use showcase_gate::AccessGate;
///
/// let app = router(GuardState::new(
///     AccessGate::default(),
///     BoundaryFilter::default(),
///     StaticIdentity::anonymous(),
/// ));
/// # let _ = app;
/// ```
pub fn router(state: GuardState) -> Router {
    Router::new()
        .route("/", get(|| page("landing")))
        .route("/home", get(|| page("home")))
        .route("/signin", get(|| page("signin")))
        .route("/signup", get(|| page("signup")))
        .route("/dashboard", get(dashboard))
        .route("/api/videos", get(list_videos))
        .fallback(not_found)
        .layer(from_fn_with_state(state, route_guard))
}

async fn page(name: &'static str) -> Json<serde_json::Value> {
    Json(json!({ "page": name }))
}

async fn dashboard(request: Request) -> Json<serde_json::Value> {
    let user = request
        .extensions()
        .get::<RequestMeta>()
        .and_then(|meta| meta.session.user_id())
        .map(|id| id.to_string());

    Json(json!({
        "page": "dashboard",
        "user": user,
        "cards": catalog::placeholder_catalog(),
    }))
}

async fn list_videos() -> Json<Vec<catalog::MediaCard>> {
    Json(catalog::placeholder_catalog())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
