//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{
    SecretToken, TokenKind,
    LINK_EXPIRY_HOURS, OTP_EXPIRY_MINUTES, RESET_EXPIRY_MINUTES,
};
pub use user::User;
