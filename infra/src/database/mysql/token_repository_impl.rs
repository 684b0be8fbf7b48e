//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ba_core::domain::entities::token::{SecretToken, TokenKind};
use ba_core::errors::DomainError;
use ba_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a SecretToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<SecretToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let kind: String = row.try_get("kind").map_err(|e| DomainError::Database {
            message: format!("Failed to get kind: {}", e),
        })?;

        Ok(SecretToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            kind: TokenKind::parse(&kind).ok_or_else(|| DomainError::Database {
                message: format!("Unknown token kind: {}", kind),
            })?,
            secret_hash: row
                .try_get("secret_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get secret_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn create(&self, token: SecretToken) -> Result<SecretToken, DomainError> {
        let query = r#"
            INSERT INTO secret_tokens (id, user_id, kind, secret_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(token.kind.as_str())
            .bind(&token.secret_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database insert failed: {}", e),
            })?;

        Ok(token)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        kind: TokenKind,
    ) -> Result<Option<SecretToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, kind, secret_hash, created_at, expires_at
            FROM secret_tokens
            WHERE user_id = ? AND kind = ?
            ORDER BY created_at ASC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(kind.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_user(&self, user_id: Uuid, kind: TokenKind) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM secret_tokens WHERE user_id = ? AND kind = ?")
            .bind(user_id.to_string())
            .bind(kind.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database delete failed: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
