//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and mail-transport
//! collaborators consumed by the BloomAccess core:
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: SMTP delivery via lettre, plus a console mock for
//!   development and testing

pub mod database;
pub mod mail;

use thiserror::Error;

/// Errors raised by infrastructure collaborators
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connectivity or query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport failure
    #[error("Mail transport error: {0}")]
    Mail(String),
}
