//! SMTP mail transport over lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::PoolConfig;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use ba_core::services::mail::{mask_email, MailMessage, MailService};
use ba_shared::config::MailConfig;

use crate::InfrastructureError;

/// Mail transport delivering over an authenticated SMTP relay.
///
/// The transport is constructed once at startup and injected into the
/// lifecycle services; there is no process-global mailer state.
pub struct SmtpMailService {
    /// Pooled SMTP transport
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender mailbox, e.g. `BloomAccess <noreply@bloomaccess.app>`
    from: String,
}

impl SmtpMailService {
    /// Build the transport from the mail configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.auth_email.is_empty() {
            return Err(InfrastructureError::Config(
                "AUTH_EMAIL must be set for the smtp mail driver".to_string(),
            ));
        }

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("Failed to create SMTP transport: {}", e)))?
            .credentials(Credentials::new(
                config.auth_email.clone(),
                config.auth_password.clone(),
            ))
            .port(config.smtp_port)
            .pool_config(PoolConfig::new().max_size(4))
            .build();

        Ok(Self {
            transport,
            from: config.from_mailbox(),
        })
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, String> {
        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {}", e))?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.body_html.clone())
            .map_err(|e| format!("Failed to build email: {}", e))?;

        let message_id = format!("smtp_{}", Uuid::new_v4());

        self.transport
            .send(email)
            .await
            .map_err(|e| format!("Failed to send email: {}", e))?;

        tracing::info!(
            target: "mail_service",
            provider = "smtp",
            to = %mask_email(&message.to),
            message_id = %message_id,
            "Email sent"
        );

        Ok(message_id)
    }
}
