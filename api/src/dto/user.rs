//! DTOs for the account, verification and password-reset endpoints.
//!
//! Wire names are camelCase to match the mobile client protocol.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ba_core::domain::entities::user::User;
use ba_shared::types::response::UserStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub user_id: Uuid,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendRequest {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPasswordResetRequest {
    pub email: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub user_id: Uuid,
    pub reset_string: String,
    pub new_password: String,
}

/// Payload of PENDING verification responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationData {
    pub user_id: Uuid,
    pub email: String,
}

/// Account record as exposed by signin.
///
/// The stored password hash is stripped before the record leaves the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AccountData {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            verified: user.verified,
            created_at: user.created_at,
        }
    }
}

/// Response of requestPasswordReset; the plaintext reset string rides along
/// at the top level so the app can drive its code-entry screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequestedResponse {
    pub status: UserStatus,
    pub message: String,
    pub reset_link: String,
    pub user_id: Uuid,
    pub reset_string: String,
}
