//! Behavioral tests for signup and signin

use std::sync::Arc;

use crate::domain::entities::token::TokenKind;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockTokenRepository, MockUserRepository, UserRepository};
use crate::services::account::AccountService;
use crate::services::verification::tests::mocks::{CapturingMailService, Collaborators};
use crate::services::verification::{VerificationConfig, VerificationService};

type Service = AccountService<MockTokenRepository, MockUserRepository, CapturingMailService>;

fn service(c: &Collaborators) -> Service {
    let verification = Arc::new(VerificationService::new(
        c.tokens.clone(),
        c.users.clone(),
        c.mail.clone(),
        c.secrets.clone(),
        VerificationConfig::default(),
    ));
    AccountService::new(c.users.clone(), c.secrets.clone(), verification)
}

async fn signup_jane(svc: &Service) -> crate::services::verification::IssuedVerification {
    svc.signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await
        .unwrap()
}

#[tokio::test]
async fn signup_validates_fields_in_priority_order() {
    let c = Collaborators::new();
    let svc = service(&c);

    // Empty input wins over every later rule
    let result = svc.signup("", "not-an-email", "short", "nope").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::EmptyInput)
    );

    let result = svc.signup("Jane1", "not-an-email", "short", "nope").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidName)
    );

    let result = svc.signup("Jane Doe", "not-an-email", "short", "nope").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidEmail)
    );

    let result = svc.signup("Jane Doe", "jane@x.com", "short", "nope").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidDateOfBirth)
    );

    let result = svc
        .signup("Jane Doe", "jane@x.com", "short", "2000-01-01")
        .await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::PasswordTooShort)
    );

    // Nothing was persisted or sent along the way
    assert!(c.users.find_by_email("jane@x.com").await.unwrap().is_none());
    assert_eq!(c.mail.sent_count().await, 0);
}

#[tokio::test]
async fn signup_creates_unverified_account_and_issues_otp() {
    let c = Collaborators::new();
    let svc = service(&c);

    let issued = signup_jane(&svc).await;

    let user = c.users.find_by_email("jane@x.com").await.unwrap().unwrap();
    assert_eq!(issued.user_id, user.id);
    assert_eq!(issued.email, "jane@x.com");
    assert!(!user.verified);
    assert_ne!(user.password_hash, "password1");
    assert!(c.secrets.verify("password1", &user.password_hash).await.unwrap());

    // Exactly one verification token and one message
    assert_eq!(c.tokens.count_by_user(user.id, TokenKind::Otp).await, 1);
    assert_eq!(c.mail.sent_count().await, 1);
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let c = Collaborators::new();
    let svc = service(&c);

    signup_jane(&svc).await;
    let result = svc
        .signup("Jane Doe", "jane@x.com", "password1", "2000-01-01")
        .await;
    assert_eq!(result.unwrap_err(), DomainError::Auth(AuthError::AccountExists));
}

#[tokio::test]
async fn signup_trims_surrounding_whitespace() {
    let c = Collaborators::new();
    let svc = service(&c);

    svc.signup(" Jane Doe ", " jane@x.com ", " password1 ", " 2000-01-01 ")
        .await
        .unwrap();

    let user = c.users.find_by_email("jane@x.com").await.unwrap().unwrap();
    assert_eq!(user.name, "Jane Doe");
}

#[tokio::test]
async fn signin_rejects_empty_credentials() {
    let c = Collaborators::new();
    let svc = service(&c);

    let result = svc.signin("", "password1").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::EmptyCredentials)
    );
}

#[tokio::test]
async fn signin_rejects_unknown_email() {
    let c = Collaborators::new();
    let svc = service(&c);

    let result = svc.signin("jane@x.com", "password1").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidCredentials)
    );
}

#[tokio::test]
async fn signin_rejects_wrong_password() {
    let c = Collaborators::new();
    let svc = service(&c);
    signup_jane(&svc).await;

    let result = svc.signin("jane@x.com", "password2").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidPassword)
    );
}

#[tokio::test]
async fn signin_returns_the_account_record() {
    let c = Collaborators::new();
    let svc = service(&c);
    signup_jane(&svc).await;

    let user = svc.signin("jane@x.com", "password1").await.unwrap();
    assert_eq!(user.email, "jane@x.com");
    assert_eq!(user.name, "Jane Doe");
}
