//! HTTP-level tests over the full route set with mock collaborators.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{json, Value};

use ba_api::app::create_app;
use ba_api::routes::user::AppState;
use ba_core::repositories::{MockTokenRepository, MockUserRepository};
use ba_core::services::account::AccountService;
use ba_core::services::password_reset::PasswordResetService;
use ba_core::services::secret::SecretStore;
use ba_core::services::verification::{VerificationConfig, VerificationService};
use ba_infra::mail::MockMailService;

type TestState = AppState<MockTokenRepository, MockUserRepository, MockMailService>;

/// Helper function to create test application state
fn create_test_app_state() -> TestState {
    let tokens = Arc::new(MockTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(MockMailService::with_options(false, false));
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
    let password_reset = Arc::new(PasswordResetService::new(tokens, users, mail, secrets));

    AppState {
        accounts,
        verification,
        password_reset,
    }
}

fn signup_body() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "password": "password1",
        "dateOfBirth": "2000-01-01"
    })
}

macro_rules! test_app {
    () => {
        test::init_service(create_app(web::Data::new(create_test_app_state()))).await
    };
}

#[actix_web::test]
async fn signup_answers_pending_with_user_data() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["data"]["email"], "jane@x.com");
    assert!(body["data"]["userId"].as_str().is_some());
}

#[actix_web::test]
async fn signup_validation_failure_is_in_band() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(json!({
            "name": "",
            "email": "jane@x.com",
            "password": "password1",
            "dateOfBirth": "2000-01-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Logical failures still answer HTTP 200
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["message"], "Empty input fields!");
}

#[actix_web::test]
async fn signup_rejects_duplicate_email() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["message"], "User with the provided email already exists!");
}

#[actix_web::test]
async fn verify_otp_without_account_fails_in_band() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/verifyOTP")
        .set_json(json!({
            "userId": "550e8400-e29b-41d4-a716-446655440000",
            "otp": "1234"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(
        body["message"],
        "Account record doesn't exist or has been verified already. Please sign up or log in!"
    );
}

#[actix_web::test]
async fn verify_otp_with_wrong_code_reports_mismatch() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = body["data"]["userId"].as_str().unwrap().to_string();

    // Issued codes live in [1000, 9999], so these candidates can never
    // match; the token survives each mismatch and keeps reporting it.
    for candidate in ["0000", "0001"] {
        let req = test::TestRequest::post()
            .uri("/user/verifyOTP")
            .set_json(json!({ "userId": user_id, "otp": candidate }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["message"], "Invalid code passed. Please check your inbox.");
    }
}

#[actix_web::test]
async fn resend_otp_answers_pending() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = body["data"]["userId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/user/resendOTPVerificationCode")
        .set_json(json!({ "userId": user_id, "email": "jane@x.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["data"]["email"], "jane@x.com");
}

#[actix_web::test]
async fn signin_round_trip_strips_the_password_hash() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    // Wrong password
    let req = test::TestRequest::post()
        .uri("/user/signin")
        .set_json(json!({ "email": "jane@x.com", "password": "password2" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["message"], "Invalid password entered");

    // Correct password
    let req = test::TestRequest::post()
        .uri("/user/signin")
        .set_json(json!({ "email": "jane@x.com", "password": "password1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["data"]["email"], "jane@x.com");
    assert!(body["data"].get("passwordHash").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_web::test]
async fn password_reset_flow_over_http() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    // Request a reset; the plaintext secret rides along in the payload
    let req = test::TestRequest::post()
        .uri("/user/requestPasswordReset")
        .set_json(json!({ "email": "jane@x.com", "redirectUrl": "app" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["message"], "Password reset email sent!");
    let user_id = body["userId"].as_str().unwrap().to_string();
    let reset_string = body["resetString"].as_str().unwrap().to_string();
    assert!(body["resetLink"].as_str().unwrap().contains(&reset_string));

    // Consume the secret
    let req = test::TestRequest::post()
        .uri("/user/resetPassword")
        .set_json(json!({
            "userId": user_id,
            "resetString": reset_string,
            "newPassword": "newpass123"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "SUCCESS");

    // The old password is gone, the new one works
    let req = test::TestRequest::post()
        .uri("/user/signin")
        .set_json(json!({ "email": "jane@x.com", "password": "password1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "FAILED");

    let req = test::TestRequest::post()
        .uri("/user/signin")
        .set_json(json!({ "email": "jane@x.com", "password": "newpass123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "SUCCESS");
}

#[actix_web::test]
async fn password_reset_for_unknown_email_fails_in_band() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/user/requestPasswordReset")
        .set_json(json!({ "email": "nobody@x.com", "redirectUrl": "app" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["message"], "No account with this email exists!");
}

#[actix_web::test]
async fn verify_link_failure_redirects_with_error() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/user/verify/550e8400-e29b-41d4-a716-446655440000/some-string")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp
        .headers()
        .get(actix_web::http::header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("/user/verified?error=true&message="));
}

#[actix_web::test]
async fn verified_page_renders_success_and_error_views() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/user/verified").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Email verified"));

    let req = test::TestRequest::get()
        .uri("/user/verified?error=true&message=Link%20has%20expired")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Link has expired"));
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "bloom-access-api");
}
