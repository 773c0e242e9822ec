//! Crate error type.
//!
//! Access decisions and route classification are total and never produce
//! an [`Error`]; these variants cover configuration, form input and the
//! identity provider's remote operations.

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in the gate crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A submitted form failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// An identity provider operation failed
    #[error("{0}")]
    Identity(#[from] IdentityError),

    /// I/O failure (binding a listener, reading a file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns the form errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&validator::ValidationErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::config(err.to_string())
    }
}

/// Opaque failure reported by the identity provider.
///
/// The crate never interprets the message; it is only surfaced to the user
/// through an error notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct IdentityError {
    /// Provider-supplied message
    pub message: String,
}

impl IdentityError {
    /// Creates a new identity error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn identity_error_displays_provider_message() {
        let err: Error = IdentityError::new("network unreachable").into();
        assert_eq!(err.to_string(), "network unreachable");
        assert!(err.validation_errors().is_none());
    }

    #[test]
    fn validation_errors_convert_and_are_recoverable() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        let err: Error = errors.into();
        assert!(err.to_string().starts_with("validation failed"));
        assert!(err.validation_errors().is_some());
    }

    #[test]
    fn figment_errors_become_config_errors() {
        let err: Error = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, Error::Config { .. }));
    }
}
