//! Use-case services over the owned application state.
//!
//! # Responsibility
//! - Provide stable entry points for the UI layer.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass store validation or repository contracts.
//! - There is exactly one owning state container per session.

pub mod backup;
pub mod session;
