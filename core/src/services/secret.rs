//! One-time secret generation, hashing and verification.

use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

/// Default bcrypt cost factor (salt rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Failure while hashing or comparing a secret
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("hashing failed: {0}")]
    Hash(String),
}

/// Generates, hashes and verifies the one-time secrets used by the
/// verification and password-reset lifecycles.
///
/// Hashing runs on the blocking pool since bcrypt is CPU-bound.
#[derive(Debug, Clone)]
pub struct SecretStore {
    cost: u32,
}

impl SecretStore {
    /// Create a store with the default cost factor
    pub fn new() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Create a store with an explicit cost factor (tests use a low cost)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Four-digit one-time code, uniform over [1000, 9999], drawn from the
    /// operating system's RNG
    pub fn generate_otp(&self) -> String {
        OsRng.gen_range(1000..=9999).to_string()
    }

    /// Random unique string bound to a user: a fresh UUID concatenated with
    /// the user identifier
    pub fn generate_unique_string(&self, user_id: Uuid) -> String {
        format!("{}{}", Uuid::new_v4(), user_id)
    }

    /// Salted one-way hash of a secret
    pub async fn hash(&self, secret: &str) -> Result<String, SecretError> {
        let secret = secret.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(|e| SecretError::Hash(e.to_string()))?
            .map_err(|e| SecretError::Hash(e.to_string()))
    }

    /// Compare a candidate secret against a stored hash
    pub async fn verify(&self, secret: &str, hash: &str) -> Result<bool, SecretError> {
        let secret = secret.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash))
            .await
            .map_err(|e| SecretError::Hash(e.to_string()))?
            .map_err(|e| SecretError::Hash(e.to_string()))
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}
