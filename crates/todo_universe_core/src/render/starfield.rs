//! Decorative background starfield.
//!
//! # Responsibility
//! - Generate a fixed field of stars and nebulae once per session.
//! - Project visible elements through the camera with viewport culling.
//!
//! The field is generated once and never mutated; parallax comes entirely
//! from the camera transform at draw time.

use kurbo::Point;
use rand::Rng;

use crate::camera::world_to_screen;
use crate::model::state::Camera;

/// Half-width of the world box the background is scattered over.
pub const FIELD_EXTENT: f64 = 5000.0;

const STAR_COUNT: usize = 1500;
const NEBULA_COUNT: usize = 50;

/// A single background star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Point,
    /// Radius in world units.
    pub size: f64,
    /// Base opacity in `[0.3, 1.0]`, modulated by twinkle at draw time.
    pub opacity: f64,
    /// Twinkle phase speed; multiplied by elapsed time.
    pub twinkle_speed: f64,
}

/// A soft radial-gradient blob behind the stars.
#[derive(Debug, Clone, PartialEq)]
pub struct Nebula {
    pub position: Point,
    /// Radius in world units.
    pub size: f64,
    /// RGBA color, alpha premultiplied into the `a` channel.
    pub color: (u8, u8, u8, f64),
}

/// The generated background field.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub nebulae: Vec<Nebula>,
}

/// A star projected into screen space, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSprite {
    pub screen_position: Point,
    pub radius: f64,
    pub alpha: f64,
}

impl Starfield {
    /// Scatters stars and nebulae uniformly over the field box.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: random_field_point(rng),
                size: rng.gen_range(0.5..2.5),
                opacity: rng.gen_range(0.3..1.0),
                twinkle_speed: rng.gen_range(0.0..0.015),
            })
            .collect();

        let nebulae = (0..NEBULA_COUNT)
            .map(|_| Nebula {
                position: random_field_point(rng),
                size: rng.gen_range(100.0..500.0),
                color: (
                    rng.gen_range(100..150),
                    rng.gen_range(100..150),
                    rng.gen_range(155..205),
                    rng.gen_range(0.05..0.15),
                ),
            })
            .collect();

        Self { stars, nebulae }
    }

    /// Projects stars onto the screen, culling anything outside the
    /// viewport. `time_seconds` drives the twinkle phase.
    pub fn visible_stars(
        &self,
        camera: &Camera,
        viewport_center: Point,
        viewport_size: (f64, f64),
        time_seconds: f64,
    ) -> Vec<StarSprite> {
        let (width, height) = viewport_size;
        self.stars
            .iter()
            .filter_map(|star| {
                let screen = world_to_screen(star.position, camera, viewport_center);
                let radius = star.size * camera.zoom;
                // Cull with the scaled radius as margin so a star straddling
                // the viewport edge keeps drawing its on-screen part.
                if screen.x + radius < 0.0
                    || screen.x - radius > width
                    || screen.y + radius < 0.0
                    || screen.y - radius > height
                {
                    return None;
                }
                let twinkle = (time_seconds * star.twinkle_speed).sin().abs();
                Some(StarSprite {
                    screen_position: screen,
                    radius,
                    alpha: star.opacity * twinkle,
                })
            })
            .collect()
    }

    /// Nebulae whose scaled extent overlaps the viewport.
    pub fn visible_nebulae(
        &self,
        camera: &Camera,
        viewport_center: Point,
        viewport_size: (f64, f64),
    ) -> Vec<&Nebula> {
        let (width, height) = viewport_size;
        self.nebulae
            .iter()
            .filter(|nebula| {
                let screen = world_to_screen(nebula.position, camera, viewport_center);
                let extent = nebula.size * camera.zoom;
                screen.x + extent >= 0.0
                    && screen.x - extent <= width
                    && screen.y + extent >= 0.0
                    && screen.y - extent <= height
            })
            .collect()
    }
}

fn random_field_point(rng: &mut impl Rng) -> Point {
    Point::new(
        rng.gen_range(-FIELD_EXTENT..FIELD_EXTENT),
        rng.gen_range(-FIELD_EXTENT..FIELD_EXTENT),
    )
}
