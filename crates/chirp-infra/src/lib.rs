//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`:
//! SQLite persistence via SeaORM, JWT tokens, and Argon2 password hashing.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository,
};
