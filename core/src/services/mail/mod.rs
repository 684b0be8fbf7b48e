//! Mail transport contract and message rendering.
//!
//! The lifecycle services render a complete message and hand it to the
//! transport; implementations (SMTP, mock) live in the infrastructure crate.

pub mod templates;

use async_trait::async_trait;

/// A fully rendered email ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub body_html: String,
}

/// Trait for the outbound mail transport
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a rendered message
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(reason)` - Delivery failed
    async fn send_mail(&self, message: &MailMessage) -> Result<String, String>;
}

/// Mask a mailbox for logging, keeping the first character of the local
/// part and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => {
                    let hidden = "*".repeat(local.chars().count() - 1);
                    format!("{}{}@{}", first, hidden, domain)
                }
                None => format!("*@{}", domain),
            }
        }
        None => "*".repeat(email.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@x.com"), "j***@x.com");
        assert_eq!(mask_email("a@x.com"), "a@x.com");
        assert_eq!(mask_email("not-an-email"), "************");
    }
}
