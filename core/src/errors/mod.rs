//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// I/O failures are converted into `Database`/`Mail`/`Internal` variants at
/// their call sites, each carrying the one-line message reported to the
/// caller; nothing below this type crosses the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Persistence collaborator failure
    #[error("{message}")]
    Database { message: String },

    /// Mail transport collaborator failure
    #[error("{message}")]
    Mail { message: String },

    /// Hashing or other internal failure
    #[error("{message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_message_passthrough() {
        let err: DomainError = AuthError::OtpExpired.into();
        assert_eq!(err.to_string(), "Code has expired! Please request again.");
    }

    #[test]
    fn test_transport_error_message() {
        let err = DomainError::Database {
            message: "An error occurred while saving user account!".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "An error occurred while saving user account!"
        );
    }
}
