//! Pointer, wheel and touch interaction handling.
//!
//! # Responsibility
//! - Translate raw input events into camera or card-position mutations.
//! - Keep all gesture bookkeeping in one place (drag, pan, pinch).
//!
//! # Invariants
//! - All handlers run synchronously on the single UI thread; there is
//!   exactly one mutator at a time.

pub mod controller;
pub mod drag;
pub mod pinch;

pub use controller::{InputEffect, InteractionController, PointerTarget};
pub use drag::DragTrack;
pub use pinch::PinchState;
