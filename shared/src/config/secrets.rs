//! Secret generation and hashing configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for one-time secret handling
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecretConfig {
    /// bcrypt cost factor used when hashing passwords and one-time secrets
    pub bcrypt_cost: u32,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

impl SecretConfig {
    /// Load secret configuration from `BCRYPT_COST`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}
