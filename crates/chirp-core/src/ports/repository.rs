use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch every entity of this type.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when
    /// no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Delete every entity of this type, returning the number of rows removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Delete a post only if it belongs to the given user.
    /// Returns the number of rows removed (0 on an ownership mismatch).
    async fn delete_for_user(&self, post_id: Uuid, user_id: Uuid) -> Result<u64, RepoError>;
}

/// Comment repository. All lookups are scoped to the owning post.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Fetch every comment under a post.
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Find a comment by id within a post.
    async fn find_scoped(
        &self,
        comment_id: Uuid,
        post_id: Uuid,
    ) -> Result<Option<Comment>, RepoError>;

    /// Delete a comment by id within a post, returning the rows removed.
    async fn delete_scoped(&self, comment_id: Uuid, post_id: Uuid) -> Result<u64, RepoError>;

    /// Delete every comment under a post, returning the rows removed.
    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, RepoError>;
}
