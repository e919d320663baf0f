//! Persistence repositories.
//!
//! # Responsibility
//! - Keep SQL and encoding details inside the persistence boundary.
//! - Expose storage-agnostic traits to the service layer.

pub mod state_repo;
