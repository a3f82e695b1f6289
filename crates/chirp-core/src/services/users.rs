//! User CRUD rules.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, UserRepository};

use super::storage;

const ENTITY: &str = "User";

/// Partial update for one user in a batch request.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User management rules.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await.map_err(storage)
    }

    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(storage)?
            .ok_or_else(|| DomainError::not_found(ENTITY))
    }

    /// Create a user with a hashed password. The email must not be taken.
    pub async fn create(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, DomainError> {
        if self
            .users
            .find_by_email(&email)
            .await
            .map_err(storage)?
            .is_some()
        {
            return Err(DomainError::EmailExists);
        }

        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(name, email, password_hash);
        self.users.insert(user).await.map_err(|e| match e {
            RepoError::Constraint(_) => DomainError::EmailExists,
            other => storage(other),
        })
    }

    /// Update name and/or email of an existing user.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, DomainError> {
        let mut user = self.get(id).await?;
        user.apply_update(name, email);

        self.users.update(user).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(ENTITY),
            RepoError::Constraint(_) => DomainError::EmailExists,
            other => storage(other),
        })
    }

    /// Apply each update independently, best-effort.
    ///
    /// A failing element is logged and skipped; earlier successes are kept
    /// and later elements still run. Returns the number of users updated.
    pub async fn update_many(&self, updates: Vec<UserUpdate>) -> Result<usize, DomainError> {
        let mut applied = 0;
        for update in updates {
            match self.update(update.id, update.name, update.email).await {
                Ok(_) => applied += 1,
                Err(err) => {
                    tracing::warn!(user_id = %update.id, error = %err, "Skipping failed user update");
                }
            }
        }
        Ok(applied)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.users.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(ENTITY),
            other => storage(other),
        })
    }

    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        self.users.delete_all().await.map_err(storage)
    }
}
