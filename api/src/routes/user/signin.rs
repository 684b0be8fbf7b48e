//! Handler for POST /user/signin

use actix_web::{web, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::{mask_email, MailService};
use ba_shared::types::response::StatusResponse;

use crate::dto::user::{AccountData, SigninRequest};

use super::{failed, AppState};

/// Checks credentials and returns the account record (password hash
/// stripped).
pub async fn signin<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    match state.accounts.signin(&request.email, &request.password).await {
        Ok(user) => HttpResponse::Ok().json(StatusResponse::success(
            "Signin successful",
            AccountData::from(user),
        )),
        Err(error) => {
            log::warn!(
                "Signin failed for email {}: {}",
                mask_email(&request.email),
                error
            );
            failed(&error)
        }
    }
}
