//! Per-card screen placement.
//!
//! # Responsibility
//! - Project every card through the camera into screen coordinates,
//!   honoring orbit mode.
//!
//! # Invariants
//! - Placements come back in `AppState.cards` order; the index doubles as
//!   z-order exactly like the card sequence itself.

use kurbo::Point;

use crate::animation::{orbit_angle, orbit_position};
use crate::camera::world_to_screen;
use crate::model::card::CardId;
use crate::model::state::AppState;

/// Where and how to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlacement {
    pub id: CardId,
    /// Screen position of the card center.
    pub screen_position: Point,
    /// Uniform scale to draw the card at; equals the camera zoom.
    pub scale: f64,
    /// Rotation in degrees; non-zero only in orbit mode, where cards face
    /// along their orbit tangent.
    pub rotation_degrees: f64,
}

/// Computes screen placements for all cards in z-order.
///
/// In orbit mode the stored free-form positions are ignored and cards sit
/// evenly spaced on the shared circle around the camera center, rotated by
/// the shared orbit angle.
pub fn card_placements(
    state: &AppState,
    viewport_center: Point,
    shared_orbit_angle: f64,
) -> Vec<CardPlacement> {
    let count = state.cards.len();
    state
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let (world, rotation_degrees) = if state.orbit_mode {
                let angle = orbit_angle(index, count, shared_orbit_angle);
                (
                    orbit_position(state.camera.position, angle),
                    angle.to_degrees() + 90.0,
                )
            } else {
                (card.position, 0.0)
            };
            CardPlacement {
                id: card.id.clone(),
                screen_position: world_to_screen(world, &state.camera, viewport_center),
                scale: state.camera.zoom,
                rotation_degrees,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ORBIT_RADIUS;
    use crate::model::state::welcome_state;
    use crate::store::card_store::create_card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTER: Point = Point::new(400.0, 300.0);

    #[test]
    fn free_mode_projects_stored_positions() {
        let state = welcome_state();
        let placements = card_placements(&state, CENTER, 0.0);

        assert_eq!(placements.len(), 1);
        // Welcome card sits at the origin, which the default camera puts at
        // the viewport center.
        assert_eq!(placements[0].screen_position, CENTER);
        assert_eq!(placements[0].scale, 1.0);
        assert_eq!(placements[0].rotation_degrees, 0.0);
    }

    #[test]
    fn placements_preserve_card_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = welcome_state();
        let (state, a) = create_card(&state, &mut rng);
        let (state, b) = create_card(&state, &mut rng);

        let placements = card_placements(&state, CENTER, 0.0);
        assert_eq!(placements[1].id, a);
        assert_eq!(placements[2].id, b);
    }

    #[test]
    fn orbit_mode_puts_cards_on_the_shared_circle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = welcome_state();
        for _ in 0..3 {
            state = create_card(&state, &mut rng).0;
        }
        state.orbit_mode = true;

        let placements = card_placements(&state, CENTER, 0.25);
        for placement in &placements {
            let dx = placement.screen_position.x - CENTER.x;
            let dy = placement.screen_position.y - CENTER.y;
            // Camera is at the circle center with zoom 1, so the screen
            // distance equals the orbit radius.
            assert!(((dx * dx + dy * dy).sqrt() - ORBIT_RADIUS).abs() < 1e-9);
            assert_ne!(placement.rotation_degrees, 0.0);
        }
    }
}
