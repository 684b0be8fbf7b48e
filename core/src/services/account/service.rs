//! Account signup and signin implementation

use std::sync::Arc;

use ba_shared::utils::validation::{
    is_valid_email, is_valid_name, is_valid_password, parse_date_of_birth,
};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::{mask_email, MailService};
use crate::services::secret::SecretStore;
use crate::services::verification::{IssuedVerification, VerificationService};

/// Handles account creation and credential checks.
///
/// Signup validates fields in a fixed priority order (empty input, name
/// format, email format, date format, password length), each violation
/// reported with its own reason before any I/O happens.
pub struct AccountService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// User repository for account records
    users: Arc<U>,
    /// Secret hashing for passwords
    secrets: Arc<SecretStore>,
    /// Verification lifecycle triggered right after signup
    verification: Arc<VerificationService<T, U, M>>,
}

impl<T, U, M> AccountService<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    /// Create a new account service
    pub fn new(
        users: Arc<U>,
        secrets: Arc<SecretStore>,
        verification: Arc<VerificationService<T, U, M>>,
    ) -> Self {
        Self {
            users,
            secrets,
            verification,
        }
    }

    /// Register a new account and immediately issue its verification OTP.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        date_of_birth: &str,
    ) -> DomainResult<IssuedVerification> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();
        let date_of_birth = date_of_birth.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() || date_of_birth.is_empty() {
            return Err(ValidationError::EmptyInput.into());
        }
        if !is_valid_name(name) {
            return Err(ValidationError::InvalidName.into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let date_of_birth =
            parse_date_of_birth(date_of_birth).ok_or(ValidationError::InvalidDateOfBirth)?;
        if !is_valid_password(password) {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let exists = self.users.exists_by_email(email).await.map_err(|e| {
            tracing::error!(error = %e, event = "signup_lookup_failed", "Duplicate-account check failed");
            DomainError::Database {
                message: "An error occurred while checking for existing user!".to_string(),
            }
        })?;
        if exists {
            return Err(AuthError::AccountExists.into());
        }

        let password_hash = self.secrets.hash(password).await.map_err(|e| {
            tracing::error!(error = %e, event = "password_hash_failed", "Hashing signup password failed");
            DomainError::Internal {
                message: "An error occurred while hashing password!".to_string(),
            }
        })?;

        let user = User::new(name, email, password_hash, date_of_birth);
        let user = self.users.create(user).await.map_err(|e| {
            tracing::error!(error = %e, event = "account_store_failed", "Saving new account failed");
            DomainError::Database {
                message: "An error occurred while saving user account!".to_string(),
            }
        })?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "account_created",
            "New unverified account created"
        );

        self.verification.issue_otp(user.id, &user.email).await
    }

    /// Check credentials and return the matching account record.
    pub async fn signin(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = email.trim();
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::EmptyCredentials.into());
        }

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "signin_lookup_failed", "Account lookup failed");
                DomainError::Database {
                    message: "An error occurred while checking for existing user".to_string(),
                }
            })?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self
            .secrets
            .verify(password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "password_compare_failed", "Comparing passwords failed");
                DomainError::Internal {
                    message: "An error occurred while comparing passwords".to_string(),
                }
            })?;
        if !matches {
            return Err(AuthError::InvalidPassword.into());
        }

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "signin",
            "Signin successful"
        );
        Ok(user)
    }
}
