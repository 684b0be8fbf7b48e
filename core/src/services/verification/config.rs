//! Configuration for the verification lifecycle

use crate::domain::entities::token::{LINK_EXPIRY_HOURS, OTP_EXPIRY_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Minutes before an issued OTP expires
    pub otp_expiry_minutes: i64,
    /// Hours before an issued verification link expires
    pub link_expiry_hours: i64,
    /// Public base URL used to build the clickable verification link
    pub app_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            otp_expiry_minutes: OTP_EXPIRY_MINUTES,
            link_expiry_hours: LINK_EXPIRY_HOURS,
            app_url: String::from("http://127.0.0.1:8080"),
        }
    }
}
