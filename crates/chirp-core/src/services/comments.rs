//! Comment CRUD rules, always scoped under a post.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Comment;
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

use super::storage;

/// Comment management rules. Every operation validates the parent post
/// where the route implies one.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    async fn require_post(&self, post_id: Uuid) -> Result<(), DomainError> {
        if self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(storage)?
            .is_none()
        {
            return Err(DomainError::not_found("Post"));
        }
        Ok(())
    }

    pub async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.require_post(post_id).await?;
        self.comments.find_by_post(post_id).await.map_err(storage)
    }

    pub async fn get_scoped(&self, post_id: Uuid, comment_id: Uuid) -> Result<Comment, DomainError> {
        self.comments
            .find_scoped(comment_id, post_id)
            .await
            .map_err(storage)?
            .ok_or_else(|| DomainError::not_found("Comment"))
    }

    /// Create a comment under an existing post.
    pub async fn create(&self, post_id: Uuid, content: String) -> Result<Comment, DomainError> {
        self.require_post(post_id).await?;

        self.comments
            .insert(Comment::new(post_id, content))
            .await
            .map_err(storage)
    }

    pub async fn delete_scoped(&self, post_id: Uuid, comment_id: Uuid) -> Result<(), DomainError> {
        self.get_scoped(post_id, comment_id).await?;

        self.comments
            .delete_scoped(comment_id, post_id)
            .await
            .map_err(storage)?;
        Ok(())
    }

    pub async fn delete_for_post(&self, post_id: Uuid) -> Result<u64, DomainError> {
        self.require_post(post_id).await?;
        self.comments.delete_by_post(post_id).await.map_err(storage)
    }
}
