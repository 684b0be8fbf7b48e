//! Types for verification lifecycle results

use uuid::Uuid;

/// Result of issuing a verification secret (OTP or link)
#[derive(Debug, Clone)]
pub struct IssuedVerification {
    /// The user awaiting verification
    pub user_id: Uuid,
    /// Address the message was sent to
    pub email: String,
    /// Identifier returned by the mail transport
    pub message_id: String,
}
