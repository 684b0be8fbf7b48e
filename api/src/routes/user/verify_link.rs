//! Handler for GET /user/verify/{userId}/{uniqueString}
//!
//! The link flow answers with redirects rather than the JSON envelope:
//! success lands on the verified page, any failure lands on the same page
//! with `error=true` and the reason in the query string.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use uuid::Uuid;

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;

use super::AppState;

/// Consumes an email verification link secret.
pub async fn verify_link<T, U, M>(
    state: web::Data<AppState<T, U, M>>,
    path: web::Path<(Uuid, String)>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    let (user_id, unique_string) = path.into_inner();

    match state.verification.verify_link(user_id, &unique_string).await {
        Ok(()) => redirect("/user/verified"),
        Err(error) => {
            log::warn!("Link verification failed for user {}: {}", user_id, error);
            let reason = error.to_string();
            let message = utf8_percent_encode(&reason, NON_ALPHANUMERIC);
            redirect(&format!("/user/verified?error=true&message={}", message))
        }
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
