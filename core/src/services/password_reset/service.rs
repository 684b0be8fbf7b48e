//! Password reset lifecycle implementation

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::token::{SecretToken, TokenKind, RESET_EXPIRY_MINUTES};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::{mask_email, templates, MailService};
use crate::services::secret::SecretStore;

/// Result of requesting a password reset.
///
/// The plaintext reset string is part of the payload: the mobile client
/// drives an in-app code-entry step with it in addition to the emailed
/// copy.
#[derive(Debug, Clone)]
pub struct ResetRequested {
    /// The account the reset was issued for
    pub user_id: Uuid,
    /// `{redirect}/{user_id}/{secret}` as embedded in the email
    pub reset_link: String,
    /// The plaintext one-time secret
    pub reset_string: String,
    /// Identifier returned by the mail transport
    pub message_id: String,
}

/// Orchestrates issuing and consuming password-reset secrets, rotating the
/// account's password hash on successful consumption.
pub struct PasswordResetService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// Token repository for reset records
    tokens: Arc<T>,
    /// User repository for the password rotation
    users: Arc<U>,
    /// Outbound mail transport
    mail: Arc<M>,
    /// Secret generation and hashing
    secrets: Arc<SecretStore>,
}

impl<T, U, M> PasswordResetService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// Create a new password reset service
    pub fn new(tokens: Arc<T>, users: Arc<U>, mail: Arc<M>, secrets: Arc<SecretStore>) -> Self {
        Self {
            tokens,
            users,
            mail,
            secrets,
        }
    }

    /// Start a reset for the account registered under `email`.
    ///
    /// All prior reset records for the account are invalidated before the
    /// new secret is issued; the delete-insert pair is not transactional.
    pub async fn request_reset(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> DomainResult<ResetRequested> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "reset_lookup_failed", "Account lookup failed");
                DomainError::Database {
                    message: "An error occurred while checking for existing user.".to_string(),
                }
            })?
            .ok_or(AuthError::AccountNotFound)?;

        self.tokens
            .delete_by_user(user.id, TokenKind::PasswordReset)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "reset_invalidate_failed", "Clearing reset records failed");
                DomainError::Database {
                    message: "Clearing existing password reset records failed!".to_string(),
                }
            })?;

        let reset_string = self.secrets.generate_unique_string(user.id);
        let reset_link = format!("{}/{}/{}", redirect_url, user.id, reset_string);
        let message = templates::password_reset(&user.email, &reset_link);

        let secret_hash = self.secrets.hash(&reset_string).await.map_err(|e| {
            tracing::error!(error = %e, event = "reset_hash_failed", "Hashing reset string failed");
            DomainError::Internal {
                message: "An error occurred while hashing the password reset data!".to_string(),
            }
        })?;

        let token = SecretToken::new(
            user.id,
            TokenKind::PasswordReset,
            secret_hash,
            Duration::minutes(RESET_EXPIRY_MINUTES),
        );
        self.tokens.create(token).await.map_err(|e| {
            tracing::error!(error = %e, event = "reset_store_failed", "Storing reset record failed");
            DomainError::Database {
                message: "Couldn't save password reset data!".to_string(),
            }
        })?;

        let message_id = self.mail.send_mail(&message).await.map_err(|e| {
            tracing::error!(error = %e, event = "reset_mail_failed", "Sending password reset email failed");
            DomainError::Mail {
                message: "Password reset email failed!".to_string(),
            }
        })?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "reset_requested",
            "Password reset issued"
        );

        Ok(ResetRequested {
            user_id: user.id,
            reset_link,
            reset_string,
            message_id,
        })
    }

    /// Consume a reset secret and rotate the account's password hash.
    ///
    /// Each step reports its own failure reason; the record survives a
    /// mismatch but not expiry or successful consumption.
    pub async fn reset_password(
        &self,
        user_id: Uuid,
        candidate_reset_string: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let token = self
            .tokens
            .find_by_user(user_id, TokenKind::PasswordReset)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "reset_record_lookup_failed", "Reset record lookup failed");
                DomainError::Database {
                    message: "Checking for existing password reset record failed!".to_string(),
                }
            })?
            .ok_or(AuthError::ResetNotFound)?;

        if token.is_expired() {
            self.tokens
                .delete_by_user(user_id, TokenKind::PasswordReset)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, event = "reset_cleanup_failed", "Clearing expired reset record failed");
                    DomainError::Database {
                        message: "Clearing password reset record failed!".to_string(),
                    }
                })?;
            return Err(AuthError::ResetExpired.into());
        }

        let matches = self
            .secrets
            .verify(candidate_reset_string, &token.secret_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "reset_compare_failed", "Comparing reset strings failed");
                DomainError::Internal {
                    message: "Comparing password reset strings failed!".to_string(),
                }
            })?;
        if !matches {
            return Err(AuthError::ResetMismatch.into());
        }

        let new_hash = self.secrets.hash(new_password).await.map_err(|e| {
            tracing::error!(error = %e, event = "password_hash_failed", "Hashing new password failed");
            DomainError::Internal {
                message: "An error occurred while hashing new password!".to_string(),
            }
        })?;

        let mut user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "password_update_failed", "Account lookup for update failed");
                DomainError::Database {
                    message: "Updating user password failed!".to_string(),
                }
            })?
            .ok_or(DomainError::Database {
                message: "Updating user password failed!".to_string(),
            })?;
        user.set_password_hash(new_hash);
        self.users.update(user).await.map_err(|e| {
            tracing::error!(error = %e, event = "password_update_failed", "Writing new password hash failed");
            DomainError::Database {
                message: "Updating user password failed!".to_string(),
            }
        })?;

        self.tokens
            .delete_by_user(user_id, TokenKind::PasswordReset)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "reset_finalize_failed", "Deleting consumed reset record failed");
                DomainError::Database {
                    message: "An error occurred while finalizing password reset!".to_string(),
                }
            })?;

        tracing::info!(user_id = %user_id, event = "password_reset", "Password has been reset");
        Ok(())
    }
}
