//! Application factory
//!
//! Builds the actix-web application with all routes and middleware wired
//! against the injected lifecycle services.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use ba_core::repositories::{TokenRepository, UserRepository};
use ba_core::services::mail::MailService;

use crate::middleware::cors::create_cors;
use crate::routes::user::{
    request_password_reset::request_password_reset, resend_link::resend_link,
    resend_otp::resend_otp, reset_password::reset_password, signin::signin, signup::signup,
    verified::verified_page, verify_link::verify_link, verify_otp::verify_otp, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<T, U, M>(
    app_state: web::Data<AppState<T, U, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    M: MailService + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // User routes
        .service(
            web::scope("/user")
                .route("/signup", web::post().to(signup::<T, U, M>))
                .route("/signin", web::post().to(signin::<T, U, M>))
                .route("/verifyOTP", web::post().to(verify_otp::<T, U, M>))
                .route(
                    "/resendOTPVerificationCode",
                    web::post().to(resend_otp::<T, U, M>),
                )
                .route(
                    "/resendVerificationLink",
                    web::post().to(resend_link::<T, U, M>),
                )
                .route(
                    "/verify/{userId}/{uniqueString}",
                    web::get().to(verify_link::<T, U, M>),
                )
                .route("/verified", web::get().to(verified_page))
                .route(
                    "/requestPasswordReset",
                    web::post().to(request_password_reset::<T, U, M>),
                )
                .route("/resetPassword", web::post().to(reset_password::<T, U, M>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bloom-access-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
