//! Data Transfer Objects - request and response types for the API.
//!
//! Request fields arrive as `Option` so that missing or empty values can be
//! rejected with the API's own 400 body instead of a deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use chirp_core::domain::{Comment, Post, User};

/// Body for `POST /signup` and `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body for `POST /signin`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Bearer token issued on successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Partial update for a single user (`PUT /users/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One element of a batch user update.
///
/// The id is a plain string: an unparsable id marks that element as failed
/// without poisoning the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserUpdateItem {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body for `PUT /users` - best-effort batch update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUsersRequest {
    pub users: Option<Vec<UserUpdateItem>>,
}

/// Public view of a post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            description: post.description,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Post fields for create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body returned by `POST /users/{id}/post`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostCreatedResponse {
    pub message: String,
    pub post: PostResponse,
}

/// Public view of a comment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Comment fields for create requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentBody {
    pub content: Option<String>,
}

/// Body returned by `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentCreatedResponse {
    pub message: String,
    pub comment: CommentResponse,
}
