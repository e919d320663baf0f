//! Two-finger pinch-zoom gesture state.
//!
//! # Invariants
//! - The zoom ratio is always computed against the distance and zoom
//!   captured at gesture start, never incrementally per frame, so repeated
//!   move events cannot accumulate drift.

use kurbo::Point;

use crate::camera::clamp_zoom;

/// Captured start of a pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchState {
    initial_distance: f64,
    initial_zoom: f64,
}

impl PinchState {
    /// Begins a pinch from two touch points and the zoom at gesture start.
    ///
    /// Returns `None` when the fingers are (numerically) on top of each
    /// other, since no meaningful ratio can be derived from that.
    pub fn begin(a: Point, b: Point, zoom: f64) -> Option<Self> {
        let initial_distance = a.distance(b);
        if initial_distance <= f64::EPSILON {
            return None;
        }
        Some(Self {
            initial_distance,
            initial_zoom: zoom,
        })
    }

    /// Target zoom for the current finger positions, clamped into bounds.
    pub fn target_zoom(&self, a: Point, b: Point) -> f64 {
        let ratio = a.distance(b) / self.initial_distance;
        clamp_zoom(self.initial_zoom * ratio)
    }

    /// Midpoint between the two fingers; the zoom anchor.
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}
