//! Persisted application root: cards, camera, theme and layout mode.
//!
//! # Responsibility
//! - Define the single aggregate object held for the session lifetime.
//! - Provide the default welcome state used when nothing is stored.
//! - State the per-field defaulting rules for older stored shapes.
//!
//! # Invariants
//! - `cards` insertion order is render/z-order and must be preserved.
//! - `camera.zoom` stays within `[MIN_ZOOM, MAX_ZOOM]`.
//! - Fields added after the first release always default on load instead of
//!   failing (`links` -> empty, `orbitMode` -> false).

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::model::card::TodoCard;
use crate::model::palette::CARD_COLORS;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Viewport center in world coordinates plus a uniform magnification factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-space point currently centered on screen.
    pub position: Point,
    /// Magnification, invariant-bounded to `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

/// Visual theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// The single root of persisted state.
///
/// `cards` and `camera` are required in any stored or imported document;
/// everything else defaults when absent so older shapes keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub cards: Vec<TodoCard>,
    pub camera: Camera,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub orbit_mode: bool,
}

impl AppState {
    /// Looks up a card by id.
    pub fn card(&self, id: &str) -> Option<&TodoCard> {
        self.cards.iter().find(|card| card.id == id)
    }
}

/// Builds the default state shown when no stored state exists or the stored
/// payload is malformed: one welcome card at the world origin.
pub fn welcome_state() -> AppState {
    let mut card = TodoCard::new(Point::ORIGIN, CARD_COLORS[0]);
    card.brief = "Welcome to your To-Do Universe!".to_string();
    card.notes = "Pan by dragging the background. Zoom with the scroll wheel \
                  or by pinching. Create new tasks from the sidebar!"
        .to_string();
    AppState {
        cards: vec![card],
        camera: Camera::default(),
        theme: Theme::default(),
        orbit_mode: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_is_centered_at_unit_zoom() {
        let camera = Camera::default();
        assert_eq!(camera.position, Point::ORIGIN);
        assert_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn welcome_state_has_one_card_at_origin() {
        let state = welcome_state();
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.cards[0].position, Point::ORIGIN);
        assert!(!state.orbit_mode);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn state_without_orbit_mode_defaults_to_false() {
        let json = r#"{
            "cards": [],
            "camera": { "position": { "x": 0.0, "y": 0.0 }, "zoom": 1.0 },
            "theme": "light"
        }"#;
        let state: AppState = serde_json::from_str(json).expect("legacy state should load");
        assert!(!state.orbit_mode);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = welcome_state();
        let json = serde_json::to_string(&state).expect("state should serialize");
        let back: AppState = serde_json::from_str(&json).expect("state should deserialize");
        assert_eq!(back, state);
    }

    #[test]
    fn orbit_mode_serializes_as_camel_case() {
        let state = welcome_state();
        let json = serde_json::to_value(&state).expect("state should serialize");
        assert!(json.get("orbitMode").is_some());
    }
}
