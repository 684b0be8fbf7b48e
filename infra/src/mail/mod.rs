//! Mail transport implementations.
//!
//! `SmtpMailService` delivers over an authenticated STARTTLS relay;
//! `MockMailService` echoes messages to the console for development and
//! testing.

pub mod mock;
pub mod smtp;

pub use mock::MockMailService;
pub use smtp::SmtpMailService;
