//! Domain model for the spatial task canvas.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one aggregate persisted root (`AppState`) with no side roots.
//!
//! # Invariants
//! - Every card is identified by a stable `CardId`.
//! - The persisted shape tolerates older documents via per-field defaults.

pub mod card;
pub mod palette;
pub mod state;
