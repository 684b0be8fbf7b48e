//! Handler for POST /user/resendVerificationLink

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;
use ba_shared::types::response::StatusResponse;

use crate::dto::user::{ResendRequest, VerificationData};

use super::{failed, AppState};

/// Invalidates pending link records and issues a fresh verification link.
pub async fn resend_link<T, U, M>(
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
        .resend_link(request.user_id, &request.email)
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(StatusResponse::pending(
            "Verification email sent",
            VerificationData {
                user_id: issued.user_id,
                email: issued.email,
            },
        )),
        Err(error) => {
            log::warn!("Link resend failed for user {}: {}", request.user_id, error);
            failed(&error)
        }
    }
}
