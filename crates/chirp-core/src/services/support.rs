//! In-memory test doubles for the service layer.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;
use crate::ports::{
    AuthError, BaseRepository, CommentRepository, PasswordService, PostRepository, TokenClaims,
    TokenService, UserRepository,
};

pub struct MemUsers(Mutex<Vec<User>>);

impl MemUsers {
    pub fn with(users: Vec<User>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(users)))
    }

    pub async fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for MemUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let mut users = self.0.lock().unwrap();
        if users.iter().any(|u| u.email == entity.email) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        users.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let mut users = self.0.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut users = self.0.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut users = self.0.lock().unwrap();
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for MemUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

pub struct MemPosts(Mutex<Vec<Post>>);

impl MemPosts {
    pub fn with(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(posts)))
    }

    pub async fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MemPosts {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        self.0.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.0.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.0.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.0.lock().unwrap();
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}

#[async_trait]
impl PostRepository for MemPosts {
    async fn delete_for_user(&self, post_id: Uuid, user_id: Uuid) -> Result<u64, RepoError> {
        let mut posts = self.0.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !(p.id == post_id && p.user_id == user_id));
        Ok((before - posts.len()) as u64)
    }
}

pub struct MemComments(Mutex<Vec<Comment>>);

impl MemComments {
    pub fn with(comments: Vec<Comment>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(comments)))
    }

    pub async fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for MemComments {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Comment>, RepoError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn insert(&self, entity: Comment) -> Result<Comment, RepoError> {
        self.0.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut comments = self.0.lock().unwrap();
        let slot = comments
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut comments = self.0.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut comments = self.0.lock().unwrap();
        let removed = comments.len() as u64;
        comments.clear();
        Ok(removed)
    }
}

#[async_trait]
impl CommentRepository for MemComments {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_scoped(
        &self,
        comment_id: Uuid,
        post_id: Uuid,
    ) -> Result<Option<Comment>, RepoError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == comment_id && c.post_id == post_id)
            .cloned())
    }

    async fn delete_scoped(&self, comment_id: Uuid, post_id: Uuid) -> Result<u64, RepoError> {
        let mut comments = self.0.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| !(c.id == comment_id && c.post_id == post_id));
        Ok((before - comments.len()) as u64)
    }

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        let mut comments = self.0.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.post_id != post_id);
        Ok((before - comments.len()) as u64)
    }
}

/// Reversible stand-in for the Argon2 service.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed::{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed::{password}"))
    }
}

/// Token service whose tokens are just the user id.
pub struct StaticTokens;

impl TokenService for StaticTokens {
    fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        Ok(user_id.to_string())
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let user_id =
            Uuid::parse_str(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(TokenClaims { user_id, exp: 0 })
    }
}
