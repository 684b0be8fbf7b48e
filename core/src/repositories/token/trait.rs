//! Token repository trait defining the interface for one-time secret
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{SecretToken, TokenKind};
use crate::errors::DomainError;

/// Repository trait for SecretToken persistence operations
///
/// Every operation filters by `TokenKind`, so each kind behaves as its own
/// collection. Secrets are hashed before they reach this boundary.
///
/// Issuing paths that must guarantee at most one active token call
/// `delete_by_user` before `create`; the pair is not transactional, and two
/// interleaved issuers can leave zero or two live records.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new token record
    async fn create(&self, token: SecretToken) -> Result<SecretToken, DomainError>;

    /// Find the oldest token of the given kind for a user
    ///
    /// # Returns
    /// * `Ok(Some(SecretToken))` - An active or expired record exists
    /// * `Ok(None)` - No record of this kind for the user
    async fn find_by_user(
        &self,
        user_id: Uuid,
        kind: TokenKind,
    ) -> Result<Option<SecretToken>, DomainError>;

    /// Delete every token of the given kind for a user
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records removed
    async fn delete_by_user(&self, user_id: Uuid, kind: TokenKind) -> Result<u64, DomainError>;
}
