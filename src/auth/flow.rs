//! Sign-in, sign-up, verification and sign-out flows.
//!
//! Each flow validates its form, calls the identity provider and reports
//! the result to the user through the notification store. Remote failures
//! are never interpreted; their message is shown as-is.

use std::future::Future;

use validator::Validate;

use crate::{
    error::{IdentityError, Result},
    notify::{NotificationKind, NotificationStore},
};

use super::{SignInForm, SignUpForm};

/// OAuth strategy name for Google sign-in.
pub const GOOGLE_OAUTH_STRATEGY: &str = "oauth_google";

/// Result of an attempt that may need further steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    /// The attempt finished and a session now exists
    Complete,
    /// The provider wants more steps (second factor, etc.)
    Incomplete,
}

/// Remote operations of the identity provider.
///
/// These are opaque calls: they succeed or fail with a message.
pub trait AuthClient: Send + Sync {
    /// Signs in with an identifier and password.
    fn sign_in(
        &self,
        identifier: &str,
        password: &str,
    ) -> impl Future<Output = Result<AttemptStatus, IdentityError>> + Send;

    /// Starts an OAuth sign-in that leaves the app.
    ///
    /// On success the provider has taken over navigation: it returns the
    /// user to `redirect_url` to finish the handshake, then to
    /// `redirect_url_complete`.
    fn sign_in_with_oauth(
        &self,
        strategy: &str,
        redirect_url: &str,
        redirect_url_complete: &str,
    ) -> impl Future<Output = Result<(), IdentityError>> + Send;

    /// Creates an account.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), IdentityError>> + Send;

    /// Sends an email verification code for the account being created.
    fn prepare_email_verification(
        &self,
    ) -> impl Future<Output = Result<(), IdentityError>> + Send;

    /// Submits the verification code.
    fn verify_email(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<AttemptStatus, IdentityError>> + Send;

    /// Ends the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), IdentityError>> + Send;
}

/// Where the presentation layer goes after a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Navigate to this path
    Navigate(String),
    /// Show the email verification step
    AwaitVerification,
    /// The identity provider is driving navigation (OAuth handshake)
    ProviderRedirect,
    /// Stay on the current page
    Stay,
}

/// Drives the auth screens against an [`AuthClient`].
#[derive(Debug, Clone)]
pub struct AuthFlow<C> {
    client: C,
    notifications: NotificationStore,
    landing_path: String,
    sign_in_path: String,
    sso_callback_path: String,
}

impl<C: AuthClient> AuthFlow<C> {
    /// Creates a flow reporting into `notifications`.
    pub fn new(client: C, notifications: NotificationStore) -> Self {
        Self {
            client,
            notifications,
            landing_path: "/home".to_string(),
            sign_in_path: "/signin".to_string(),
            sso_callback_path: "/sso-callback".to_string(),
        }
    }

    /// Sets the page opened after a completed sign-in or verification.
    pub fn with_landing_path(mut self, path: impl Into<String>) -> Self {
        self.landing_path = path.into();
        self
    }

    /// Sets the page opened after sign-out.
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    /// Sets the page the OAuth provider returns to mid-handshake.
    pub fn with_sso_callback_path(mut self, path: impl Into<String>) -> Self {
        self.sso_callback_path = path.into();
        self
    }

    /// Returns the identity client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Signs in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if the form
    /// is invalid; the provider is not called in that case.
    pub async fn sign_in(&self, form: &SignInForm) -> Result<FlowOutcome> {
        form.validate()?;

        let outcome = match self.client.sign_in(&form.identifier, &form.password).await {
            Ok(AttemptStatus::Complete) => {
                self.notify(NotificationKind::Success, "Signed in successfully");
                FlowOutcome::Navigate(self.landing_path.clone())
            }
            Ok(AttemptStatus::Incomplete) => {
                self.notify(NotificationKind::Error, "Sign-in incomplete. Please try again.");
                FlowOutcome::Stay
            }
            Err(err) => {
                self.notify(NotificationKind::Error, format!("Sign-in error: {}", err));
                FlowOutcome::Stay
            }
        };
        Ok(outcome)
    }

    /// Hands sign-in over to Google.
    ///
    /// Success is not announced here; the user comes back through the
    /// callback page and lands on the landing page.
    pub async fn sign_in_with_google(&self) -> FlowOutcome {
        let started = self
            .client
            .sign_in_with_oauth(
                GOOGLE_OAUTH_STRATEGY,
                &self.sso_callback_path,
                &self.landing_path,
            )
            .await;

        match started {
            Ok(()) => FlowOutcome::ProviderRedirect,
            Err(err) => {
                self.notify(NotificationKind::Error, format!("Google sign-in error: {}", err));
                FlowOutcome::Stay
            }
        }
    }

    /// Creates an account and sends a verification code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if the form
    /// is invalid.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<FlowOutcome> {
        form.validate()?;

        let created = async {
            self.client.sign_up(&form.email, &form.password).await?;
            self.client.prepare_email_verification().await
        };

        let outcome = match created.await {
            Ok(()) => {
                self.notify(
                    NotificationKind::Success,
                    "Sign up successful. Please check your email for verification.",
                );
                FlowOutcome::AwaitVerification
            }
            Err(err) => {
                self.notify(NotificationKind::Error, format!("Sign up failed: {}", err));
                FlowOutcome::Stay
            }
        };
        Ok(outcome)
    }

    /// Submits an email verification code.
    pub async fn verify_email(&self, code: &str) -> FlowOutcome {
        match self.client.verify_email(code).await {
            Ok(AttemptStatus::Complete) => {
                self.notify(NotificationKind::Success, "Email verified successfully. Welcome!");
                FlowOutcome::Navigate(self.landing_path.clone())
            }
            Ok(AttemptStatus::Incomplete) => {
                self.notify(NotificationKind::Error, "Verification failed. Please try again.");
                FlowOutcome::Stay
            }
            Err(err) => {
                self.notify(NotificationKind::Error, format!("Verification failed: {}", err));
                FlowOutcome::Stay
            }
        }
    }

    /// Signs out and returns to the sign-in page.
    pub async fn sign_out(&self) -> FlowOutcome {
        match self.client.sign_out().await {
            Ok(()) => FlowOutcome::Navigate(self.sign_in_path.clone()),
            Err(err) => {
                self.notify(NotificationKind::Error, format!("Sign-out failed: {}", err));
                FlowOutcome::Stay
            }
        }
    }

    fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.add(kind, message);
    }
}
