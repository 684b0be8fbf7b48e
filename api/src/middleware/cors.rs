//! CORS middleware configuration for cross-origin requests.
//!
//! The mobile clients (iOS, Android) call the API from app-local origins,
//! so the configuration stays permissive.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates the CORS middleware instance.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
