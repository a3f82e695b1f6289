//! Per-entity services - the business-rule layer.
//!
//! Services enforce cross-entity invariants (a post needs its user, a
//! comment needs its post) and translate repository failures into domain
//! errors before anything reaches the HTTP layer.

mod auth;
mod comments;
mod posts;
mod users;

#[cfg(test)]
pub(crate) mod support;

pub use auth::AuthService;
pub use comments::CommentService;
pub use posts::PostService;
pub use users::{UserService, UserUpdate};

use crate::error::{DomainError, RepoError};

/// Fold an unexpected repository failure into a domain-internal error.
pub(crate) fn storage(err: RepoError) -> DomainError {
    DomainError::Internal(err.to_string())
}
