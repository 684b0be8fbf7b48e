//! Domain-specific error types for the account, verification and
//! password-reset lifecycles.
//!
//! Each variant carries the one-line human-readable message the API
//! surfaces to the mobile client.

use thiserror::Error;

/// Account and token lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User with the provided email already exists!")]
    AccountExists,

    #[error("No account with this email exists!")]
    AccountNotFound,

    #[error("Invalid credentials entered!")]
    InvalidCredentials,

    #[error("Invalid password entered")]
    InvalidPassword,

    #[error("Account record doesn't exist or has been verified already. Please sign up or log in!")]
    VerificationNotFound,

    #[error("Code has expired! Please request again.")]
    OtpExpired,

    #[error("Invalid code passed. Please check your inbox.")]
    OtpMismatch,

    #[error("Link has expired. Please sign up again!")]
    LinkExpired,

    #[error("Invalid verification details passed. Check your inbox.")]
    LinkMismatch,

    #[error("Password reset request not found!")]
    ResetNotFound,

    #[error("Password reset link has expired!")]
    ResetExpired,

    #[error("Invalid password reset details passed!")]
    ResetMismatch,
}

/// Input validation errors, raised before any I/O is attempted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty input fields!")]
    EmptyInput,

    #[error("Invalid name entered")]
    InvalidName,

    #[error("Invalid email entered")]
    InvalidEmail,

    #[error("Invalid date of birth entered")]
    InvalidDateOfBirth,

    #[error("Password is too short!")]
    PasswordTooShort,

    #[error("Empty credentials supplied!")]
    EmptyCredentials,

    #[error("Empty user details are not allowed!")]
    EmptyUserDetails,

    #[error("Empty otp details are not allowed.")]
    EmptyOtpDetails,
}
