//! Post CRUD rules.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

use super::storage;

/// Post management rules. Creation and scoped deletion are validated
/// against the owning user.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.find_all().await.map_err(storage)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(storage)?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    /// Create a post for an existing user.
    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, DomainError> {
        if self
            .users
            .find_by_id(user_id)
            .await
            .map_err(storage)?
            .is_none()
        {
            return Err(DomainError::not_found("User"));
        }

        self.posts
            .insert(Post::new(user_id, title, description))
            .await
            .map_err(storage)
    }

    /// Replace title and description of an existing post.
    ///
    /// The existence check runs before field validation, so an unknown id
    /// answers 404 even when the body is also incomplete.
    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        let (Some(title), Some(description)) = (title, description) else {
            return Err(DomainError::Validation(
                "Title and description are required".to_string(),
            ));
        };

        post.title = title;
        post.description = description;
        post.updated_at = chrono::Utc::now();

        self.posts.update(post).await.map_err(storage)
    }

    /// Delete a post within a user scope.
    ///
    /// Both the user and the post must exist; the row is removed only when
    /// the post actually belongs to that user. A mismatched pair deletes
    /// nothing and is not reported as an error.
    pub async fn delete_scoped(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        if self
            .users
            .find_by_id(user_id)
            .await
            .map_err(storage)?
            .is_none()
        {
            return Err(DomainError::not_found("User"));
        }
        self.get(post_id).await?;

        let removed = self
            .posts
            .delete_for_user(post_id, user_id)
            .await
            .map_err(storage)?;
        if removed == 0 {
            tracing::debug!(%post_id, %user_id, "Post not owned by user, nothing deleted");
        }

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        self.posts.delete_all().await.map_err(storage)
    }
}
