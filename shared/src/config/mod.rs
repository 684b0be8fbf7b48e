//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `mail` - Outbound mail transport configuration
//! - `secrets` - Secret generation and hashing configuration
//! - `server` - HTTP server configuration

pub mod database;
pub mod mail;
pub mod secrets;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use mail::{MailConfig, MailDriver};
pub use secrets::SecretConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Mail transport configuration
    pub mail: MailConfig,

    /// Secret generation and hashing configuration
    pub secrets: SecretConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            secrets: SecretConfig::from_env(),
        }
    }
}
