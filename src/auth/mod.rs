//! Auth screens: form rules and provider round-trips.
//!
//! These sit in the presentation layer's path, not the request path. The
//! gate never calls them; they only feed the notification store.

mod flow;
mod forms;

pub use flow::{AttemptStatus, AuthClient, AuthFlow, FlowOutcome, GOOGLE_OAUTH_STRATEGY};
pub use forms::{first_message, SignInForm, SignUpForm};
