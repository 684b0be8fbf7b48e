//! One-time secret token entity backing the verification and
//! password-reset lifecycles.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minutes before an OTP verification code expires
pub const OTP_EXPIRY_MINUTES: i64 = 60;

/// Hours before an email verification link expires
pub const LINK_EXPIRY_HOURS: i64 = 6;

/// Minutes before a password reset string expires
pub const RESET_EXPIRY_MINUTES: i64 = 60;

/// The three kinds of one-time secret issued by the system.
///
/// Each kind behaves as its own collection: lookups, issuance and
/// invalidation never cross kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Clickable email verification link
    EmailLink,
    /// Four-digit code entered in the app
    Otp,
    /// Password reset string
    PasswordReset,
}

impl TokenKind {
    /// Stable string form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EmailLink => "email_link",
            TokenKind::Otp => "otp",
            TokenKind::PasswordReset => "password_reset",
        }
    }

    /// Parse the persisted string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email_link" => Some(TokenKind::EmailLink),
            "otp" => Some(TokenKind::Otp),
            "password_reset" => Some(TokenKind::PasswordReset),
            _ => None,
        }
    }
}

/// A persisted, expiring, single-use credential tied to a user.
///
/// Only the bcrypt hash of the secret is stored; the plaintext exists
/// solely in the email handed to the mail transport (and, for password
/// resets, in the API payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Owning user, referenced by identifier
    pub user_id: Uuid,

    /// Which lifecycle issued this token
    pub kind: TokenKind,

    /// bcrypt hash of the one-time secret
    pub secret_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the token can no longer be consumed
    pub expires_at: DateTime<Utc>,
}

impl SecretToken {
    /// Creates a new token expiring `ttl` from now
    pub fn new(user_id: Uuid, kind: TokenKind, secret_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            secret_hash,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks whether the token has passed its expiry time
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_expired() {
        let token = SecretToken::new(
            Uuid::new_v4(),
            TokenKind::Otp,
            "hash".to_string(),
            Duration::minutes(OTP_EXPIRY_MINUTES),
        );

        assert!(!token.is_expired());
        assert_eq!(token.expires_at - token.created_at, Duration::minutes(60));
    }

    #[test]
    fn test_token_with_past_expiry_is_expired() {
        let mut token = SecretToken::new(
            Uuid::new_v4(),
            TokenKind::PasswordReset,
            "hash".to_string(),
            Duration::minutes(RESET_EXPIRY_MINUTES),
        );
        token.expires_at = Utc::now() - Duration::seconds(1);

        assert!(token.is_expired());
    }

    #[test]
    fn test_kind_string_form() {
        for kind in [TokenKind::EmailLink, TokenKind::Otp, TokenKind::PasswordReset] {
            assert_eq!(TokenKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(TokenKind::parse("refresh"), None);
    }
}
