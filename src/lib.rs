//! Session-aware route access control for the media showcase front end.
//!
//! Every inbound navigation passes through this crate before a page
//! renders:
//! - **Route classification**: each path is Public, PublicApi or Protected
//! - **Access decisions**: session + path → allow or redirect
//! - **Notifications**: an ordered, auto-dismissed queue of status messages
//!
//! # Core Types
//!
//! - [`Session`]: Anonymous, or Authenticated with a [`UserId`]
//! - [`RouteTable`]: the public and public-API allow-lists
//! - [`AccessGate`]: the access decision engine
//! - [`notify::NotificationStore`]: injectable notification queue
//! - [`web::route_guard`]: axum middleware enforcing the gate
//!
//! # Examples
//!
//! ```
//! use showcase_gate::{AccessDecision, AccessGate, RouteCategory, Session, classify};
//!
//! assert_eq!(classify("/api/videos"), RouteCategory::PublicApi);
//!
//! let gate = AccessGate::default();
//! assert_eq!(
//!     gate.decide(&Session::Anonymous, "/api/private-data"),
//!     AccessDecision::Redirect("/signin".to_string())
//! );
//! assert_eq!(
//!     gate.decide(&Session::Anonymous, "/api/videos"),
//!     AccessDecision::Allow
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod catalog;
pub mod config;
mod error;
mod gate;
pub mod identity;
pub mod logging;
pub mod notify;
mod route;
mod session;
pub mod web;

pub use config::GateConfig;
pub use error::{Error, IdentityError, Result};
pub use gate::{AccessDecision, AccessGate, AccessRule};
pub use route::{
    classify, MatchMode, RouteCategory, RouteTable, DEFAULT_PUBLIC_API_ROUTES,
    DEFAULT_PUBLIC_ROUTES,
};
pub use session::{RequestMeta, Session, UserId};
