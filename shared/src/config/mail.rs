//! Mail transport configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Which mail transport implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailDriver {
    /// Real SMTP delivery
    Smtp,
    /// Console-logging mock for development and testing
    Mock,
}

/// Outbound mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Transport selection
    pub driver: MailDriver,

    /// SMTP relay hostname (e.g. smtp.gmail.com)
    pub smtp_host: String,

    /// SMTP relay port (typically 587 for STARTTLS)
    pub smtp_port: u16,

    /// SMTP account used for authentication and as the sender address
    pub auth_email: String,

    /// SMTP password or app-specific password
    pub auth_password: String,

    /// Display name on outgoing messages
    pub from_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            driver: MailDriver::Mock,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 587,
            auth_email: String::new(),
            auth_password: String::new(),
            from_name: String::from("BloomAccess"),
        }
    }
}

impl MailConfig {
    /// Load mail configuration from `MAIL_DRIVER`, `SMTP_HOST`, `SMTP_PORT`,
    /// `AUTH_EMAIL`, `AUTH_PASS` and `MAIL_FROM_NAME`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let driver = match env::var("MAIL_DRIVER").as_deref() {
            Ok("smtp") => MailDriver::Smtp,
            Ok("mock") => MailDriver::Mock,
            _ => defaults.driver,
        };
        Self {
            driver,
            smtp_host: env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            auth_email: env::var("AUTH_EMAIL").unwrap_or(defaults.auth_email),
            auth_password: env::var("AUTH_PASS").unwrap_or(defaults.auth_password),
            from_name: env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
        }
    }

    /// Formatted sender mailbox, e.g. `BloomAccess <noreply@bloomaccess.app>`
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.auth_email)
    }
}
