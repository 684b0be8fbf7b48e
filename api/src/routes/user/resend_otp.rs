//! Handler for POST /user/resendOTPVerificationCode

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;
use ba_shared::types::response::StatusResponse;

use crate::dto::user::{ResendRequest, VerificationData};

use super::{failed, AppState};

/// Invalidates pending OTP records and issues a fresh code.
pub async fn resend_otp<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<ResendRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    match state
        .verification
        .resend_otp(request.user_id, &request.email)
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(StatusResponse::pending(
            "Verification otp email sent",
            VerificationData {
                user_id: issued.user_id,
                email: issued.email,
            },
        )),
        Err(error) => {
            log::warn!("OTP resend failed for user {}: {}", request.user_id, error);
            failed(&error)
        }
    }
}
