//! Handler for GET /user/verified
//!
//! The HTML landing page the link-verification flow redirects to.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifiedQuery {
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Renders the verification landing page.
pub async fn verified_page(query: web::Query<VerifiedQuery>) -> HttpResponse {
    let is_error = query.error.as_deref() == Some("true");
    let body = if is_error {
        let message = query
            .message
            .as_deref()
            .unwrap_or("Verification failed.")
            .replace('&', "&amp;")
            .replace('<', "&lt;");
        page(
            "Verification failed",
            &format!("<p class=\"error\">{}</p>", message),
        )
    } else {
        page(
            "Email verified",
            "<p>Your email address has been verified. You can now log into your account.</p>",
        )
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><head><title>{title} - BloomAccess</title></head>\
         <body><h1>{title}</h1>{content}</body></html>"
    )
}
