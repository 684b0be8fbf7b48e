//! Mock mail transport for development and testing.
//!
//! Logs messages to the console instead of sending them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use ba_core::services::mail::{mask_email, MailMessage, MailService};

/// Mock mail transport
///
/// This implementation:
/// - Echoes messages to the console
/// - Generates mock message IDs
/// - Tracks the message count for testing
pub struct MockMailService {
    /// Counter for the number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to the console
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                to = %mask_email(&message.to),
                "Mock mail service simulating failure"
            );
            return Err("Simulated mail sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", message.to);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", message.body_html);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %mask_email(&message.to),
            message_id = %message_id,
            body_length = message.body_html.len(),
            "Email sent (mock)"
        );

        Ok(message_id)
    }
}
