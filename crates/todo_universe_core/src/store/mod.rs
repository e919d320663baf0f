//! In-memory card collection operations.

pub mod card_store;
