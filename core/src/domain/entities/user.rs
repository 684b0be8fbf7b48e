//! User entity representing a registered account in the BloomAccess system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across all accounts)
    pub email: String,

    /// bcrypt hash of the password; the plaintext is never stored
    pub password_hash: String,

    /// Date of birth supplied at signup
    pub date_of_birth: NaiveDate,

    /// Whether the account's email address has been verified
    pub verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unverified User
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash,
            date_of_birth,
            verified: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the account's email as verified
    pub fn verify(&mut self) {
        self.verified = true;
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}
