//! Handler for POST /user/verifyOTP

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;
use ba_shared::types::response::StatusResponse;

use crate::dto::user::VerifyOtpRequest;

use super::{failed, AppState};

/// Consumes a verification OTP, flipping the account's verified flag.
pub async fn verify_otp<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    match state
        .verification
        .verify_otp(request.user_id, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::verified(
            "User email verified successfully.",
        )),
        Err(error) => {
            log::warn!("OTP verification failed for user {}: {}", request.user_id, error);
            failed(&error)
        }
    }
}
