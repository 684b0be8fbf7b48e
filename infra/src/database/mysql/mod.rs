//! MySQL repository implementations.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id            CHAR(36) PRIMARY KEY,
//!     name          VARCHAR(255) NOT NULL,
//!     email         VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     date_of_birth DATE NOT NULL,
//!     verified      BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at    TIMESTAMP NOT NULL
//! );
//!
//! CREATE TABLE secret_tokens (
//!     id          CHAR(36) PRIMARY KEY,
//!     user_id     CHAR(36) NOT NULL,
//!     kind        VARCHAR(32) NOT NULL,
//!     secret_hash VARCHAR(255) NOT NULL,
//!     created_at  TIMESTAMP NOT NULL,
//!     expires_at  TIMESTAMP NOT NULL,
//!     INDEX idx_secret_tokens_user_kind (user_id, kind)
//! );
//! ```

pub mod token_repository_impl;
pub mod user_repository_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
