//! Orbit layout clock and circle placement math.
//!
//! # Responsibility
//! - Advance the shared orbit angle one fixed step per animation frame.
//! - Expose an explicit start/stop lifecycle instead of a self-rescheduling
//!   callback, so toggling orbit mode off (or tearing the view down) always
//!   leaves no recurring work behind.
//!
//! # Invariants
//! - A clock built with reduced motion preferred never starts.
//! - `tick` only advances while the clock is running.

use kurbo::Point;
use std::f64::consts::TAU;

/// Radius of the shared orbit circle, in world units.
pub const ORBIT_RADIUS: f64 = 350.0;

/// Angle advance per animation frame, in radians.
pub const ORBIT_STEP_RADIANS: f64 = 0.001;

/// Frame-driven clock for the shared orbit angle.
#[derive(Debug, Clone)]
pub struct OrbitClock {
    angle: f64,
    running: bool,
    reduced_motion: bool,
}

impl OrbitClock {
    /// Creates a stopped clock. `reduced_motion` reflects the user or
    /// system preference and permanently disables the animation.
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            angle: 0.0,
            running: false,
            reduced_motion,
        }
    }

    /// Starts advancing. No-op when reduced motion is preferred.
    pub fn start(&mut self) {
        if self.reduced_motion {
            return;
        }
        self.running = true;
    }

    /// Stops advancing. The angle keeps its current value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the shared angle by one frame step while running.
    pub fn tick(&mut self) {
        if self.running {
            self.angle += ORBIT_STEP_RADIANS;
        }
    }

    /// Current shared orbit angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// Angle for the card at `index` out of `count` cards: the shared angle plus
/// an evenly spaced per-card offset.
pub fn orbit_angle(index: usize, count: usize, shared_angle: f64) -> f64 {
    shared_angle + index as f64 * TAU / count.max(1) as f64
}

/// World position on the orbit circle around the given center.
pub fn orbit_position(center: Point, angle: f64) -> Point {
    Point::new(
        center.x + angle.cos() * ORBIT_RADIUS,
        center.y + angle.sin() * ORBIT_RADIUS,
    )
}
