//! Application state - dependency wiring shared across all handlers.

use std::sync::Arc;

use chirp_core::ports::{
    CommentRepository, PasswordService, PostRepository, TokenService, UserRepository,
};
use chirp_core::services::{AuthService, CommentService, PostService, UserService};
use chirp_infra::database::{self, DatabaseConfig, DbErr};
use chirp_infra::{
    Argon2PasswordService, JwtConfig, JwtTokenService, SqliteCommentRepository,
    SqlitePostRepository, SqliteUserRepository,
};
use chirp_migration::{Migrator, MigratorTrait};

/// Shared application state, built once at startup and cloned per worker.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    /// Used by the bearer gate to decode tokens.
    pub tokens: Arc<dyn TokenService>,
    /// Used by the bearer gate to confirm the token's user still exists.
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Connect to the database, apply pending migrations, and wire services.
    pub async fn new(db_config: &DatabaseConfig, jwt_config: JwtConfig) -> Result<Self, DbErr> {
        let db = database::connect(db_config).await?;

        Migrator::up(&db, None).await?;
        tracing::info!("Database schema is up to date");

        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(db.clone()));
        let post_repo: Arc<dyn PostRepository> = Arc::new(SqlitePostRepository::new(db.clone()));
        let comment_repo: Arc<dyn CommentRepository> = Arc::new(SqliteCommentRepository::new(db));

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt_config));

        tracing::info!("Application state initialized");

        Ok(Self {
            auth: Arc::new(AuthService::new(
                user_repo.clone(),
                passwords.clone(),
                tokens.clone(),
            )),
            users: Arc::new(UserService::new(user_repo.clone(), passwords)),
            posts: Arc::new(PostService::new(post_repo.clone(), user_repo.clone())),
            comments: Arc::new(CommentService::new(comment_repo, post_repo)),
            tokens,
            user_repo,
        })
    }
}
