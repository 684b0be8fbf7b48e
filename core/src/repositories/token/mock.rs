//! Mock implementation of TokenRepository for development and testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::{SecretToken, TokenKind};
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Mock token repository backed by an in-memory map
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, SecretToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records of a kind for a user (test helper)
    pub async fn count_by_user(&self, user_id: Uuid, kind: TokenKind) -> usize {
        let tokens = self.tokens.read().await;
        tokens
            .values()
            .filter(|t| t.user_id == user_id && t.kind == kind)
            .count()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn create(&self, token: SecretToken) -> Result<SecretToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        kind: TokenKind,
    ) -> Result<Option<SecretToken>, DomainError> {
        let tokens = self.tokens.read().await;
        // Oldest first, matching insertion-order reads of the store
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id && t.kind == kind)
            .min_by_key(|t| t.created_at)
            .cloned())
    }

    async fn delete_by_user(&self, user_id: Uuid, kind: TokenKind) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !(t.user_id == user_id && t.kind == kind));
        Ok((before - tokens.len()) as u64)
    }
}
