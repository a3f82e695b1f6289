//! Credential verification and token issuance.

use std::sync::Arc;

use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};

use super::storage;

/// Sign-up and sign-in rules.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password fail identically so the response
    /// does not reveal which half was wrong.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let Some(user) = self.users.find_by_email(email).await.map_err(storage)? else {
            return Err(DomainError::InvalidCredentials);
        };

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        self.tokens
            .generate_token(user.id)
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Register a new account. The email must not be taken.
    pub async fn sign_up(
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
            // The unique index can still fire if two sign-ups race.
            RepoError::Constraint(_) => DomainError::EmailExists,
            other => storage(other),
        })
    }
}
