//! Interaction state machine over pointer, wheel and touch events.
//!
//! # Responsibility
//! - Decide whether a gesture pans the camera or drags a card.
//! - Convert screen-pixel motion into world-space mutations.
//!
//! # Invariants
//! - Modes: Idle -> Panning (background press) or Idle -> DraggingCard
//!   (card press, orbit off); release always returns to Idle.
//! - Card drags are disabled while orbit mode is active.
//! - All motion is scaled by inverse zoom so screen distance maps to the
//!   same world distance at any magnification.

use kurbo::Point;

use crate::camera::{pan, zoom_about_screen_point, zoom_to_about_screen_point, WHEEL_ZOOM_STEP};
use crate::input::drag::DragTrack;
use crate::input::pinch::PinchState;
use crate::model::card::CardId;
use crate::model::state::{AppState, Camera};

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas background; a press here starts a pan.
    Background,
    /// A card; a press here starts a card drag unless orbit mode is on.
    Card(CardId),
}

/// State mutation produced by an input event, applied by the session owner.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEffect {
    CameraChanged(Camera),
    CardMoved { id: CardId, position: Point },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Idle,
    Panning,
    DraggingCard(CardId),
}

/// Single-threaded interaction controller.
///
/// Owns gesture bookkeeping only; the resulting [`InputEffect`] values are
/// applied to the state by whoever owns it.
#[derive(Debug, Clone)]
pub struct InteractionController {
    mode: Mode,
    drag: DragTrack,
    pinch: Option<PinchState>,
    viewport_center: Point,
}

impl InteractionController {
    /// Creates a controller for a viewport whose center is at the given
    /// screen coordinate.
    pub fn new(viewport_center: Point) -> Self {
        Self {
            mode: Mode::Idle,
            drag: DragTrack::default(),
            pinch: None,
            viewport_center,
        }
    }

    /// Updates the viewport center after a window resize.
    pub fn set_viewport_center(&mut self, center: Point) {
        self.viewport_center = center;
    }

    /// Returns `true` while a background pan is in progress.
    pub fn is_panning(&self) -> bool {
        self.mode == Mode::Panning
    }

    /// Returns the id of the card currently being dragged, if any.
    pub fn dragging_card(&self) -> Option<&CardId> {
        match &self.mode {
            Mode::DraggingCard(id) => Some(id),
            _ => None,
        }
    }

    /// Pointer press: begins a pan or a card drag.
    ///
    /// Card presses are ignored while orbit mode positions the cards, so a
    /// press on a card then behaves like a press on nothing at all.
    pub fn pointer_down(&mut self, state: &AppState, pos: Point, target: PointerTarget) {
        match target {
            PointerTarget::Background => {
                self.mode = Mode::Panning;
                self.drag.begin(pos);
            }
            PointerTarget::Card(id) => {
                if state.orbit_mode {
                    return;
                }
                self.mode = Mode::DraggingCard(id);
                self.drag.begin(pos);
            }
        }
    }

    /// Pointer move: produces a camera shift or a card move, or nothing
    /// while idle.
    pub fn pointer_move(&mut self, state: &AppState, pos: Point) -> Option<InputEffect> {
        let delta = self.drag.advance(pos)?;
        match &self.mode {
            Mode::Idle => None,
            Mode::Panning => Some(InputEffect::CameraChanged(pan(&state.camera, delta))),
            Mode::DraggingCard(id) => {
                let card = state.card(id)?;
                let position = Point::new(
                    card.position.x + delta.x / state.camera.zoom,
                    card.position.y + delta.y / state.camera.zoom,
                );
                Some(InputEffect::CardMoved {
                    id: id.clone(),
                    position,
                })
            }
        }
    }

    /// Pointer release or capture loss: back to idle.
    pub fn pointer_up(&mut self) {
        self.mode = Mode::Idle;
        self.drag.finish();
    }

    /// Wheel notch: one multiplicative zoom step anchored at the pointer.
    pub fn wheel(&self, state: &AppState, pos: Point, zoom_in: bool) -> InputEffect {
        let factor = if zoom_in {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        InputEffect::CameraChanged(zoom_about_screen_point(
            &state.camera,
            factor,
            pos,
            self.viewport_center,
        ))
    }

    /// Two fingers down: captures the pinch baseline. Any other finger
    /// count clears it.
    pub fn touch_start(&mut self, state: &AppState, touches: &[Point]) {
        self.pinch = match touches {
            [a, b] => PinchState::begin(*a, *b, state.camera.zoom),
            _ => None,
        };
    }

    /// Two fingers moved: re-derives zoom from the gesture baseline and
    /// anchors it at the current midpoint.
    pub fn touch_move(&mut self, state: &AppState, touches: &[Point]) -> Option<InputEffect> {
        let [a, b] = touches else {
            return None;
        };
        let pinch = self.pinch.as_ref()?;
        let target = pinch.target_zoom(*a, *b);
        let midpoint = PinchState::midpoint(*a, *b);
        Some(InputEffect::CameraChanged(zoom_to_about_screen_point(
            &state.camera,
            target,
            midpoint,
            self.viewport_center,
        )))
    }

    /// Fingers lifted: ends the pinch.
    pub fn touch_end(&mut self) {
        self.pinch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{screen_to_world, world_to_screen};
    use crate::model::state::welcome_state;

    const CENTER: Point = Point::new(400.0, 300.0);

    fn controller() -> InteractionController {
        InteractionController::new(CENTER)
    }

    #[test]
    fn background_press_starts_a_pan() {
        let state = welcome_state();
        let mut ctl = controller();

        ctl.pointer_down(&state, Point::new(10.0, 10.0), PointerTarget::Background);
        assert!(ctl.is_panning());

        let effect = ctl.pointer_move(&state, Point::new(30.0, 10.0));
        let InputEffect::CameraChanged(camera) = effect.expect("pan produces a camera") else {
            panic!("expected camera effect");
        };
        // 20px right at zoom 1 moves the camera 20 world units left.
        assert_eq!(camera.position, Point::new(-20.0, 0.0));

        ctl.pointer_up();
        assert!(!ctl.is_panning());
        assert_eq!(ctl.pointer_move(&state, Point::new(50.0, 10.0)), None);
    }

    #[test]
    fn card_press_starts_a_drag_scaled_by_inverse_zoom() {
        let mut state = welcome_state();
        state.camera.zoom = 2.0;
        let id = state.cards[0].id.clone();
        let mut ctl = controller();

        ctl.pointer_down(&state, Point::new(0.0, 0.0), PointerTarget::Card(id.clone()));
        assert_eq!(ctl.dragging_card(), Some(&id));

        let effect = ctl.pointer_move(&state, Point::new(10.0, -6.0));
        let Some(InputEffect::CardMoved { id: moved, position }) = effect else {
            panic!("expected card move");
        };
        assert_eq!(moved, id);
        assert_eq!(position, Point::new(5.0, -3.0));
    }

    #[test]
    fn card_press_is_ignored_in_orbit_mode() {
        let mut state = welcome_state();
        state.orbit_mode = true;
        let id = state.cards[0].id.clone();
        let mut ctl = controller();

        ctl.pointer_down(&state, Point::new(0.0, 0.0), PointerTarget::Card(id));
        assert_eq!(ctl.dragging_card(), None);
        assert_eq!(ctl.pointer_move(&state, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn wheel_zoom_keeps_the_world_point_under_the_pointer() {
        let state = welcome_state();
        let ctl = controller();

        let anchor = world_to_screen(Point::new(100.0, 100.0), &state.camera, CENTER);
        let InputEffect::CameraChanged(camera) = ctl.wheel(&state, anchor, true) else {
            panic!("expected camera effect");
        };

        assert!((camera.zoom - 1.1).abs() < 1e-12);
        let after = world_to_screen(Point::new(100.0, 100.0), &camera, CENTER);
        assert!((after.x - anchor.x).abs() < 1e-9);
        assert!((after.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn pinch_zooms_relative_to_gesture_start_and_anchors_midpoint() {
        let state = welcome_state();
        let mut ctl = controller();

        let a = Point::new(300.0, 300.0);
        let b = Point::new(500.0, 300.0);
        ctl.touch_start(&state, &[a, b]);

        // Fingers spread to 1.5x the starting distance; the gesture anchors
        // at the midpoint of the current finger positions.
        let b2 = Point::new(600.0, 300.0);
        let new_mid = PinchState::midpoint(a, b2);
        let world_under_mid = screen_to_world(new_mid, &state.camera, CENTER);

        let effect = ctl.touch_move(&state, &[a, b2]);
        let Some(InputEffect::CameraChanged(camera)) = effect else {
            panic!("expected camera effect");
        };
        assert!((camera.zoom - 1.5).abs() < 1e-12);

        let after = world_to_screen(world_under_mid, &camera, CENTER);
        assert!((after.x - new_mid.x).abs() < 1e-9);
        assert!((after.y - new_mid.y).abs() < 1e-9);

        ctl.touch_end();
        assert_eq!(ctl.touch_move(&state, &[a, b2]), None);
    }

    #[test]
    fn single_finger_touch_does_not_pinch() {
        let state = welcome_state();
        let mut ctl = controller();

        ctl.touch_start(&state, &[Point::new(10.0, 10.0)]);
        assert_eq!(ctl.touch_move(&state, &[Point::new(20.0, 20.0)]), None);
    }
}
