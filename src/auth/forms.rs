//! Sign-in and sign-up form validation.

use validator::{Validate, ValidationErrors};

/// Credentials submitted on the sign-in page.
///
/// # Examples
///
/// ```
/// use showcase_gate::auth::{first_message, SignInForm};
/// use validator::Validate;
///
/// let form = SignInForm { identifier: "alice".into(), password: String::new() };
/// let errors = form.validate().unwrap_err();
/// assert_eq!(first_message(&errors, "password").as_deref(), Some("Password is required"));
/// ```
#[derive(Debug, Clone, Default, Validate)]
pub struct SignInForm {
    /// Email address or username
    #[validate(length(min = 1, message = "Email/Username is required"))]
    pub identifier: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Details submitted on the sign-up page.
///
/// Each field is checked independently, so a bad email and mismatched
/// passwords are reported together. An empty email is an invalid email.
#[derive(Debug, Clone, Default, Validate)]
pub struct SignUpForm {
    /// Email address
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Chosen password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Password typed a second time
    #[validate(length(min = 1, message = "Confirm Password is required"))]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Returns the first message recorded for `field`, the one a form shows
/// under its input.
pub fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .into_iter()
        .find(|(name, _)| AsRef::<str>::as_ref(name) == field)
        .and_then(|(_, failures)| failures.first())
        .and_then(|failure| failure.message.as_ref())
        .map(|message| message.to_string())
}
