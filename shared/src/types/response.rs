//! API response envelope
//!
//! Every JSON endpoint answers HTTP 200 and signals the outcome in-band
//! through the `status` discriminator, matching the mobile client's
//! expectations.

use serde::{Deserialize, Serialize};

/// Outcome discriminator carried in every JSON response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// The operation started and awaits a follow-up step (e.g. code entry)
    Pending,
    /// The operation completed
    Success,
    /// The operation failed; `message` carries the reason
    Failed,
    /// The account's email was verified
    Verified,
}

/// Response body shared by all JSON endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse<T> {
    /// Outcome of the request
    pub status: UserStatus,

    /// One-line human-readable description of the outcome
    pub message: String,

    /// Operation-specific payload (present on success paths that carry data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> StatusResponse<T> {
    /// A `PENDING` response with payload
    pub fn pending(message: impl Into<String>, data: T) -> Self {
        Self {
            status: UserStatus::Pending,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A `SUCCESS` response with payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: UserStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl StatusResponse<()> {
    /// A `VERIFIED` response (no payload)
    pub fn verified(message: impl Into<String>) -> Self {
        Self {
            status: UserStatus::Verified,
            message: message.into(),
            data: None,
        }
    }

    /// A `SUCCESS` response without payload
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: UserStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    /// A `FAILED` response; the error is signaled in-band, not via the
    /// HTTP status code
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: UserStatus::Failed,
            message: message.into(),
            data: None,
        }
    }
}
