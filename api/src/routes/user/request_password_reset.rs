//! Handler for POST /user/requestPasswordReset

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::{mask_email, MailService};
use ba_shared::types::response::UserStatus;

use crate::dto::user::{RequestPasswordResetRequest, ResetRequestedResponse};

use super::{failed, AppState};

/// Issues a password reset secret for the account registered under the
/// given email.
pub async fn request_password_reset<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<RequestPasswordResetRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    match state
        .password_reset
        .request_reset(&request.email, &request.redirect_url)
        .await
    {
        Ok(requested) => HttpResponse::Ok().json(ResetRequestedResponse {
            status: UserStatus::Pending,
            message: "Password reset email sent!".to_string(),
            reset_link: requested.reset_link,
            user_id: requested.user_id,
            reset_string: requested.reset_string,
        }),
        Err(error) => {
            log::warn!(
                "Password reset request failed for email {}: {}",
                mask_email(&request.email),
                error
            );
            failed(&error)
        }
    }
}
