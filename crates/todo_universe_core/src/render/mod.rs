//! Presentation projections: everything the drawing layer reads.
//!
//! Pure computation only; nothing here touches state or performs i/o.

pub mod meteors;
pub mod scene;
pub mod starfield;
