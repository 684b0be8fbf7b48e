//! End-to-end lifecycle scenarios over the public crate API.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use ba_core::domain::entities::token::{SecretToken, TokenKind};
use ba_core::errors::{AuthError, DomainError};
use ba_core::repositories::{MockTokenRepository, MockUserRepository, TokenRepository, UserRepository};
use ba_core::services::account::AccountService;
use ba_core::services::mail::{MailMessage, MailService};
use ba_core::services::password_reset::PasswordResetService;
use ba_core::services::secret::SecretStore;
use ba_core::services::verification::{VerificationConfig, VerificationService};

/// Mail transport that records messages for inspection
struct RecordingMail {
    sent: RwLock<Vec<MailMessage>>,
}

impl RecordingMail {
    fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
        }
    }

    async fn last_body(&self) -> String {
        self.sent
            .read()
            .await
            .last()
            .map(|m| m.body_html.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailService for RecordingMail {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, String> {
        self.sent.write().await.push(message.clone());
        Ok(format!("mock-{}", Uuid::new_v4()))
    }
}

/// First four-digit run in an email body
fn extract_otp(body: &str) -> String {
    let mut run = String::new();
    for c in body.chars() {
        if c.is_ascii_digit() {
            run.push(c);
            if run.len() == 4 {
                return run;
            }
        } else {
            run.clear();
        }
    }
    panic!("no OTP found in body: {body}");
}

struct App {
    tokens: Arc<MockTokenRepository>,
    users: Arc<MockUserRepository>,
    mail: Arc<RecordingMail>,
    secrets: Arc<SecretStore>,
    accounts: Arc<AccountService<MockTokenRepository, MockUserRepository, RecordingMail>>,
    verification: Arc<VerificationService<MockTokenRepository, MockUserRepository, RecordingMail>>,
    password_reset: Arc<PasswordResetService<MockTokenRepository, MockUserRepository, RecordingMail>>,
}

fn app() -> App {
    let tokens = Arc::new(MockTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(RecordingMail::new());
    let secrets = Arc::new(SecretStore::with_cost(4));

    let verification = Arc::new(VerificationService::new(
        tokens.clone(),
        users.clone(),
        mail.clone(),
        secrets.clone(),
        VerificationConfig::default(),
    ));
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        secrets.clone(),
        verification.clone(),
    ));
    let password_reset = Arc::new(PasswordResetService::new(
        tokens.clone(),
        users.clone(),
        mail.clone(),
        secrets.clone(),
    ));

    App {
        tokens,
        users,
        mail,
        secrets,
        accounts,
        verification,
        password_reset,
    }
}

#[tokio::test]
async fn signup_then_otp_verification_happy_path() {
    let app = app();

    let issued = app
        .accounts
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap();

    // Exactly one account and one verification token, account unverified
    let user = app.users.find_by_id(issued.user_id).await.unwrap().unwrap();
    assert!(!user.verified);
    assert_eq!(app.tokens.count_by_user(user.id, TokenKind::Otp).await, 1);

    let otp = extract_otp(&app.mail.last_body().await);
    let wrong = if otp == "1234" { "4321" } else { "1234" };

    // Wrong code first: mismatch, record survives
    let result = app.verification.verify_otp(user.id, wrong).await;
    assert_eq!(result.unwrap_err(), DomainError::Auth(AuthError::OtpMismatch));

    // Correct code: verified flips exactly once, record consumed
    app.verification.verify_otp(user.id, &otp).await.unwrap();
    let user = app.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(user.verified);

    // Replay fails with a missing-record error
    let result = app.verification.verify_otp(user.id, &otp).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::VerificationNotFound)
    );
}

#[tokio::test]
async fn password_reset_rotates_credentials() {
    let app = app();

    let issued = app
        .accounts
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap();

    let requested = app
        .password_reset
        .request_reset("jane@x.com", "app")
        .await
        .unwrap();
    assert_eq!(requested.user_id, issued.user_id);

    app.password_reset
        .reset_password(issued.user_id, &requested.reset_string, "newpass123")
        .await
        .unwrap();

    // The old password no longer signs in; the new one does
    let result = app.accounts.signin("jane@x.com", "password1").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidPassword)
    );

    let user = app.accounts.signin("jane@x.com", "newpass123").await.unwrap();
    assert_eq!(user.email, "jane@x.com");
}

#[tokio::test]
async fn expired_token_is_reported_and_removed() {
    let app = app();

    let issued = app
        .accounts
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap();
    let user_id = issued.user_id;

    // Replace the live OTP with one whose clock has already run out
    app.tokens.delete_by_user(user_id, TokenKind::Otp).await.unwrap();
    let hash = app.secrets.hash("1234").await.unwrap();
    let mut token = SecretToken::new(user_id, TokenKind::Otp, hash, Duration::minutes(5));
    token.expires_at = Utc::now() - Duration::seconds(1);
    app.tokens.create(token).await.unwrap();

    let result = app.verification.verify_otp(user_id, "1234").await;
    assert_eq!(result.unwrap_err(), DomainError::Auth(AuthError::OtpExpired));
    assert_eq!(app.tokens.count_by_user(user_id, TokenKind::Otp).await, 0);

    let result = app.verification.verify_otp(user_id, "1234").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::VerificationNotFound)
    );
}

#[tokio::test]
async fn expired_link_abandons_the_signup() {
    let app = app();

    let issued = app
        .accounts
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap();
    let user_id = issued.user_id;

    let hash = app.secrets.hash("stale").await.unwrap();
    let mut token = SecretToken::new(user_id, TokenKind::EmailLink, hash, Duration::hours(6));
    token.expires_at = Utc::now() - Duration::seconds(1);
    app.tokens.create(token).await.unwrap();

    let result = app.verification.verify_link(user_id, "stale").await;
    assert_eq!(result.unwrap_err(), DomainError::Auth(AuthError::LinkExpired));

    // The account itself is rolled back; a fresh signup succeeds
    assert!(app.users.find_by_id(user_id).await.unwrap().is_none());
    app.accounts
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap();
}
