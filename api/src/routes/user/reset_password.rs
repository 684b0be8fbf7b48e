//! Handler for POST /user/resetPassword

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;
use ba_shared::types::response::StatusResponse;

use crate::dto::user::ResetPasswordRequest;

use super::{failed, AppState};

/// Consumes a reset secret and rotates the account password.
pub async fn reset_password<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    match state
        .password_reset
        .reset_password(
            request.user_id,
            &request.reset_string,
            &request.new_password,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::success_empty(
            "Password has been reset successfully!",
        )),
        Err(error) => {
            log::warn!("Password reset failed for user {}: {}", request.user_id, error);
            failed(&error)
        }
    }
}
