//! Decorative meteor shower over the canvas.
//!
//! # Responsibility
//! - Spawn a meteor on a fixed interval and retire it after its lifetime.
//! - Project live meteors into drawable sprites along a fixed diagonal.
//!
//! # Invariants
//! - Driven entirely by explicit `tick` calls; dropping the shower leaves no
//!   recurring work behind.
//! - A shower built with reduced motion preferred never spawns anything.
//! - Every meteor despawns exactly once, `duration` seconds after spawn.

use kurbo::Point;
use rand::Rng;
use std::f64::consts::FRAC_PI_4;

/// Seconds between meteor spawns.
pub const SPAWN_INTERVAL_SECONDS: f64 = 2.0;

/// Travel direction of every meteor, measured from straight down.
pub const METEOR_ANGLE_RADIANS: f64 = FRAC_PI_4;

const SPAWN_Y: f64 = -50.0;
const MIN_LENGTH: f64 = 50.0;
const MAX_LENGTH: f64 = 150.0;
const MIN_DURATION_SECONDS: f64 = 2.0;
const MAX_DURATION_SECONDS: f64 = 5.0;

/// One live meteor, in screen space.
#[derive(Debug, Clone, PartialEq)]
struct Meteor {
    spawn: Point,
    length: f64,
    duration_seconds: f64,
    age_seconds: f64,
}

/// A meteor projected for drawing: a streak fading out as it falls.
#[derive(Debug, Clone, PartialEq)]
pub struct MeteorSprite {
    pub position: Point,
    pub length: f64,
    pub rotation_radians: f64,
    pub opacity: f64,
}

/// Frame-driven meteor shower state.
#[derive(Debug, Clone)]
pub struct MeteorShower {
    meteors: Vec<Meteor>,
    since_spawn_seconds: f64,
    reduced_motion: bool,
}

impl MeteorShower {
    /// Creates an empty shower. `reduced_motion` permanently disables it.
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            meteors: Vec::new(),
            since_spawn_seconds: 0.0,
            reduced_motion,
        }
    }

    /// Advances all meteors by the elapsed frame time, retiring expired
    /// ones and spawning a new meteor per elapsed interval.
    pub fn tick(&mut self, dt_seconds: f64, viewport_width: f64, rng: &mut impl Rng) {
        if self.reduced_motion {
            return;
        }

        for meteor in &mut self.meteors {
            meteor.age_seconds += dt_seconds;
        }
        self.meteors
            .retain(|meteor| meteor.age_seconds < meteor.duration_seconds);

        self.since_spawn_seconds += dt_seconds;
        while self.since_spawn_seconds >= SPAWN_INTERVAL_SECONDS {
            self.since_spawn_seconds -= SPAWN_INTERVAL_SECONDS;
            self.meteors.push(spawn_meteor(viewport_width, rng));
        }
    }

    /// Number of currently live meteors.
    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }

    /// Retires all meteors, e.g. when the view is torn down.
    pub fn clear(&mut self) {
        self.meteors.clear();
        self.since_spawn_seconds = 0.0;
    }

    /// Projects live meteors into sprites. Each meteor travels one viewport
    /// width diagonally down-left over its lifetime while fading to zero.
    pub fn sprites(&self, viewport_width: f64) -> Vec<MeteorSprite> {
        self.meteors
            .iter()
            .map(|meteor| {
                let progress = meteor.age_seconds / meteor.duration_seconds;
                MeteorSprite {
                    position: Point::new(
                        meteor.spawn.x - viewport_width * progress,
                        meteor.spawn.y + viewport_width * progress,
                    ),
                    length: meteor.length,
                    rotation_radians: METEOR_ANGLE_RADIANS,
                    opacity: 1.0 - progress,
                }
            })
            .collect()
    }
}

fn spawn_meteor(viewport_width: f64, rng: &mut impl Rng) -> Meteor {
    Meteor {
        spawn: Point::new(rng.gen_range(0.0..viewport_width * 1.5), SPAWN_Y),
        length: rng.gen_range(MIN_LENGTH..MAX_LENGTH),
        duration_seconds: rng.gen_range(MIN_DURATION_SECONDS..MAX_DURATION_SECONDS),
        age_seconds: 0.0,
    }
}
