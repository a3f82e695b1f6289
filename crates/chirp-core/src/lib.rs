//! # Chirp Core
//!
//! The domain layer of the Chirp backend.
//! This crate contains pure business logic with zero infrastructure
//! dependencies: entities, error types, ports, and the per-entity services
//! that enforce cross-entity rules before touching a repository.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
