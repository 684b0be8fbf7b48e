//! Account, verification and password-reset routes.
//!
//! Every JSON endpoint answers HTTP 200 and reports logical failures
//! in-band through the `status` discriminator; the link-verification GET
//! answers with redirects instead.

pub mod request_password_reset;
pub mod resend_link;
pub mod resend_otp;
pub mod reset_password;
pub mod signin;
pub mod signup;
pub mod verified;
pub mod verify_link;
pub mod verify_otp;

use std::sync::Arc;

use actix_web::HttpResponse;

use ba_core::errors::DomainError;
use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::account::AccountService;
use ba_core::services::mail::MailService;
use ba_core::services::password_reset::PasswordResetService;
use ba_core::services::verification::VerificationService;
use ba_shared::types::response::StatusResponse;

/// Application state that holds the shared lifecycle services
pub struct AppState<T, U, M>
where
    T: TokenRepository,
    U: UserRepository,
    M: MailService,
{
    pub accounts: Arc<AccountService<T, U, M>>,
    pub verification: Arc<VerificationService<T, U, M>>,
    pub password_reset: Arc<PasswordResetService<T, U, M>>,
}

/// Render a domain failure as the in-band FAILED envelope (HTTP 200)
pub(crate) fn failed(error: &DomainError) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::failed(error.to_string()))
}
