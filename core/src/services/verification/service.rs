//! Verification lifecycle implementation

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::token::{SecretToken, TokenKind};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::{mask_email, templates, MailService};
use crate::services::secret::SecretStore;

use super::config::VerificationConfig;
use super::types::IssuedVerification;

/// Orchestrates issuing, resending and consuming the email/OTP verification
/// secrets that gate the `verified` flag on a user record.
///
/// All collaborators are injected at construction; the service holds no
/// global state.
pub struct VerificationService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// Token repository for one-time secret records
    tokens: Arc<T>,
    /// User repository for the verified-flag transition
    users: Arc<U>,
    /// Outbound mail transport
    mail: Arc<M>,
    /// Secret generation and hashing
    secrets: Arc<SecretStore>,
    /// Service configuration
    config: VerificationConfig,
}

impl<T, U, M> VerificationService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// Create a new verification service
    pub fn new(
        tokens: Arc<T>,
        users: Arc<U>,
        mail: Arc<M>,
        secrets: Arc<SecretStore>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            tokens,
            users,
            mail,
            secrets,
            config,
        }
    }

    /// Issue a four-digit OTP to the given user.
    ///
    /// Hashes and persists a new OTP record, then emails the plaintext code.
    /// Prior OTP records are left in place; only the resend path invalidates
    /// them first.
    pub async fn issue_otp(&self, user_id: Uuid, email: &str) -> DomainResult<IssuedVerification> {
        let otp = self.secrets.generate_otp();
        let message = templates::otp_verification(email, &otp);

        let secret_hash = self.secrets.hash(&otp).await.map_err(|e| {
            tracing::error!(error = %e, event = "otp_hash_failed", "Hashing verification code failed");
            DomainError::Internal {
                message: "An error occurred while hashing the verification code!".to_string(),
            }
        })?;

        let token = SecretToken::new(
            user_id,
            TokenKind::Otp,
            secret_hash,
            Duration::minutes(self.config.otp_expiry_minutes),
        );
        self.tokens.create(token).await.map_err(|e| {
            tracing::error!(error = %e, event = "otp_store_failed", "Storing verification code failed");
            DomainError::Database {
                message: "Couldn't save verification otp data!".to_string(),
            }
        })?;

        let message_id = self.mail.send_mail(&message).await.map_err(|e| {
            tracing::error!(error = %e, event = "otp_mail_failed", "Sending verification otp email failed");
            DomainError::Mail {
                message: "Verification otp email failed!".to_string(),
            }
        })?;

        tracing::info!(
            user_id = %user_id,
            email = %mask_email(email),
            event = "otp_issued",
            "Issued verification code"
        );

        Ok(IssuedVerification {
            user_id,
            email: email.to_string(),
            message_id,
        })
    }

    /// Issue a clickable email verification link to the given user.
    pub async fn issue_link(&self, user_id: Uuid, email: &str) -> DomainResult<IssuedVerification> {
        let unique_string = self.secrets.generate_unique_string(user_id);
        let verify_url = format!(
            "{}/user/verify/{}/{}",
            self.config.app_url, user_id, unique_string
        );
        let message = templates::verification_link(email, &verify_url);

        let secret_hash = self.secrets.hash(&unique_string).await.map_err(|e| {
            tracing::error!(error = %e, event = "link_hash_failed", "Hashing verification link failed");
            DomainError::Internal {
                message: "An error occurred while hashing email data!".to_string(),
            }
        })?;

        let token = SecretToken::new(
            user_id,
            TokenKind::EmailLink,
            secret_hash,
            Duration::hours(self.config.link_expiry_hours),
        );
        self.tokens.create(token).await.map_err(|e| {
            tracing::error!(error = %e, event = "link_store_failed", "Storing verification link failed");
            DomainError::Database {
                message: "Couldn't save verification email data!".to_string(),
            }
        })?;

        let message_id = self.mail.send_mail(&message).await.map_err(|e| {
            tracing::error!(error = %e, event = "link_mail_failed", "Sending verification email failed");
            DomainError::Mail {
                message: "Verification email failed!".to_string(),
            }
        })?;

        tracing::info!(
            user_id = %user_id,
            email = %mask_email(email),
            event = "link_issued",
            "Issued verification link"
        );

        Ok(IssuedVerification {
            user_id,
            email: email.to_string(),
            message_id,
        })
    }

    /// Invalidate every pending OTP for the user, then issue a fresh one.
    pub async fn resend_otp(&self, user_id: Uuid, email: &str) -> DomainResult<IssuedVerification> {
        if email.trim().is_empty() {
            return Err(ValidationError::EmptyUserDetails.into());
        }

        self.tokens.delete_by_user(user_id, TokenKind::Otp).await?;
        self.issue_otp(user_id, email.trim()).await
    }

    /// Invalidate every pending verification link for the user, then issue
    /// a fresh one.
    pub async fn resend_link(&self, user_id: Uuid, email: &str) -> DomainResult<IssuedVerification> {
        if email.trim().is_empty() {
            return Err(ValidationError::EmptyUserDetails.into());
        }

        self.tokens
            .delete_by_user(user_id, TokenKind::EmailLink)
            .await?;
        self.issue_link(user_id, email.trim()).await
    }

    /// Consume an OTP, flipping the user's verified flag on success.
    ///
    /// An expired record is deleted and reported as expired; a mismatched
    /// code leaves the record consumable.
    pub async fn verify_otp(&self, user_id: Uuid, candidate_otp: &str) -> DomainResult<()> {
        let candidate = candidate_otp.trim();
        if candidate.is_empty() {
            return Err(ValidationError::EmptyOtpDetails.into());
        }

        let token = self
            .tokens
            .find_by_user(user_id, TokenKind::Otp)
            .await?
            .ok_or(AuthError::VerificationNotFound)?;

        if token.is_expired() {
            self.tokens.delete_by_user(user_id, TokenKind::Otp).await?;
            return Err(AuthError::OtpExpired.into());
        }

        let matches = self
            .secrets
            .verify(candidate, &token.secret_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "otp_compare_failed", "Comparing verification codes failed");
                DomainError::Internal {
                    message: "An error occurred while comparing verification codes!".to_string(),
                }
            })?;
        if !matches {
            return Err(AuthError::OtpMismatch.into());
        }

        self.mark_verified(user_id).await?;
        self.tokens.delete_by_user(user_id, TokenKind::Otp).await?;

        tracing::info!(user_id = %user_id, event = "email_verified", "User email verified via OTP");
        Ok(())
    }

    /// Consume a verification link secret.
    ///
    /// Expiry on this path abandons the signup: the token record and the
    /// owning account are both deleted before the expiry is reported.
    pub async fn verify_link(&self, user_id: Uuid, candidate_string: &str) -> DomainResult<()> {
        let token = self
            .tokens
            .find_by_user(user_id, TokenKind::EmailLink)
            .await?
            .ok_or(AuthError::VerificationNotFound)?;

        if token.is_expired() {
            self.tokens
                .delete_by_user(user_id, TokenKind::EmailLink)
                .await?;
            self.users.delete(user_id).await?;
            tracing::warn!(
                user_id = %user_id,
                event = "signup_abandoned",
                "Verification link expired; account deleted"
            );
            return Err(AuthError::LinkExpired.into());
        }

        let matches = self
            .secrets
            .verify(candidate_string, &token.secret_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "link_compare_failed", "Comparing verification details failed");
                DomainError::Internal {
                    message: "An error occurred while comparing verification details!".to_string(),
                }
            })?;
        if !matches {
            return Err(AuthError::LinkMismatch.into());
        }

        self.mark_verified(user_id).await?;
        self.tokens
            .delete_by_user(user_id, TokenKind::EmailLink)
            .await?;

        tracing::info!(user_id = %user_id, event = "email_verified", "User email verified via link");
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::VerificationNotFound)?;
        user.verify();
        self.users.update(user).await?;
        Ok(())
    }
}
