//! # Chirp API Server
//!
//! Actix-web HTTP surface over the chirp-core services. Exposed as a
//! library so integration tests can assemble the same application.

pub mod config;
pub mod doc;
pub mod handlers;
pub mod middleware;
pub mod state;
