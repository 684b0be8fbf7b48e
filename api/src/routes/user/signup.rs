//! Handler for POST /user/signup

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::{mask_email, MailService};
use ba_shared::types::response::StatusResponse;

use crate::dto::user::{SignupRequest, VerificationData};

use super::{failed, AppState};

/// Registers a new account and issues its verification OTP.
pub async fn signup<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    log::info!(
        "Processing signup request for email: {}",
        mask_email(&request.email)
    );

    match state
        .accounts
        .signup(
            &request.name,
            &request.email,
            &request.password,
            &request.date_of_birth,
        )
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
            log::warn!(
                "Signup failed for email {}: {}",
                mask_email(&request.email),
                error
            );
            failed(&error)
        }
    }
}
