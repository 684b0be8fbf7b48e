//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ba_core::domain::entities::user::User;
use ba_core::errors::DomainError;
use ba_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_of_birth: {}", e),
                })?,
            verified: row.try_get("verified").map_err(|e| DomainError::Database {
                message: format!("Failed to get verified: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, date_of_birth, verified, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, date_of_birth, verified, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.exists_by_email(&user.email).await? {
            return Err(DomainError::Database {
                message: "Email already registered".to_string(),
            });
        }

        let query = r#"
            INSERT INTO users (id, name, email, password_hash, date_of_birth, verified, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.date_of_birth)
            .bind(user.verified)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database insert failed: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = ?, email = ?, password_hash = ?, date_of_birth = ?, verified = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.date_of_birth)
            .bind(user.verified)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database update failed: {}", e),
            })?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database delete failed: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        Ok(result.is_some())
    }
}
