//! SQLite persistence via SeaORM.

mod connection;
pub mod entity;
mod sqlite_base;
mod sqlite_repo;

pub use connection::{DatabaseConfig, connect};
pub use sea_orm::{DbConn, DbErr};
pub use sqlite_base::SqliteBaseRepository;
pub use sqlite_repo::{SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository};
