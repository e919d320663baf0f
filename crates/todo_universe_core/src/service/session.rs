//! Session service: the single owning container for application state.
//!
//! # Responsibility
//! - Hold the one `AppState` for the session lifetime and hand out reads.
//! - Route every mutation through copy-on-write store/camera operations.
//! - Persist the full state after each mutation, best-effort.
//!
//! # Invariants
//! - Persistence failures are logged and absorbed; a mutation never fails
//!   because the durable slot misbehaved ("never block the user").
//! - A malformed or missing stored document falls back to the welcome
//!   state at startup instead of propagating an error.
//! - Any state entering the session from outside (stored slot, import) has
//!   its zoom forced back into bounds before a camera operation can divide
//!   by it.
//! - The orbit clock runs exactly when orbit mode is on (and motion is not
//!   reduced); toggling the mode starts/stops it in the same call.

use kurbo::{Point, Vec2};
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::animation::OrbitClock;
use crate::camera;
use crate::input::InputEffect;
use crate::model::card::{CardId, TodoLink};
use crate::model::state::{welcome_state, AppState, Camera};
use crate::repo::state_repo::StateRepository;
use crate::store::card_store::{self, CardPatch, StoreError, StoreResult};

/// Failure raised by session-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A link needs a non-empty URL.
    EmptyLinkUrl,
    /// A link needs a non-empty label.
    EmptyLinkLabel,
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLinkUrl => write!(f, "a link requires a URL"),
            Self::EmptyLinkLabel => write!(f, "a link requires a label"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Owns the application state, its durable slot and the orbit clock.
pub struct Session<R: StateRepository> {
    state: AppState,
    repo: R,
    orbit: OrbitClock,
}

impl<R: StateRepository> Session<R> {
    /// Opens a session: loads the stored state or falls back to the
    /// welcome state when nothing usable is stored.
    pub fn open(repo: R, reduced_motion: bool) -> Self {
        let state = match repo.load_state() {
            Ok(Some(state)) => {
                info!(
                    "event=session_open module=session status=ok source=slot cards={}",
                    state.cards.len()
                );
                sanitize_zoom(state)
            }
            Ok(None) => {
                info!("event=session_open module=session status=ok source=welcome");
                welcome_state()
            }
            Err(err) => {
                warn!(
                    "event=session_open module=session status=fallback source=welcome error={err}"
                );
                welcome_state()
            }
        };

        let mut orbit = OrbitClock::new(reduced_motion);
        if state.orbit_mode {
            orbit.start();
        }

        Self { state, repo, orbit }
    }

    /// Read access to the current state version.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Shared orbit angle for this frame.
    pub fn orbit_angle(&self) -> f64 {
        self.orbit.angle()
    }

    /// Returns `true` while the orbit animation is advancing.
    pub fn orbit_animating(&self) -> bool {
        self.orbit.is_running()
    }

    /// Advances per-frame animation state. Call once per animation frame
    /// while the view is mounted.
    pub fn tick(&mut self) {
        self.orbit.tick();
    }

    // --- card operations ---

    /// Creates a card near the camera center; returns its id.
    pub fn create_card(&mut self, rng: &mut impl Rng) -> CardId {
        let (next, id) = card_store::create_card(&self.state, rng);
        self.commit(next);
        id
    }

    /// Applies a partial content update to a card.
    pub fn update_card(&mut self, id: &str, patch: CardPatch) -> StoreResult<()> {
        let next = card_store::update_card(&self.state, id, patch)?;
        self.commit(next);
        Ok(())
    }

    /// Deletes a card; idempotent for absent ids.
    pub fn delete_card(&mut self, id: &str) {
        let next = card_store::delete_card(&self.state, id);
        self.commit(next);
    }

    /// Moves a card without touching its content timestamps.
    pub fn reposition_card(&mut self, id: &str, position: Point) {
        let next = card_store::reposition_card(&self.state, id, position);
        self.commit(next);
    }

    /// Appends a link to a card after validating the user input.
    ///
    /// # Errors
    /// - [`SessionError::EmptyLinkUrl`] / [`SessionError::EmptyLinkLabel`]
    ///   when either input is blank; no partial link is created.
    /// - [`SessionError::Store`] when the card does not exist.
    pub fn add_link(&mut self, card_id: &str, url: &str, label: &str) -> Result<(), SessionError> {
        if url.trim().is_empty() {
            return Err(SessionError::EmptyLinkUrl);
        }
        if label.trim().is_empty() {
            return Err(SessionError::EmptyLinkLabel);
        }

        let card = self
            .state
            .card(card_id)
            .ok_or_else(|| StoreError::NotFound(card_id.to_string()))?;
        let mut links = card.links.clone();
        links.push(TodoLink::new(url, label));

        let next = card_store::update_card(
            &self.state,
            card_id,
            CardPatch {
                links: Some(links),
                ..CardPatch::default()
            },
        )?;
        self.commit(next);
        Ok(())
    }

    // --- camera and mode operations ---

    /// Applies an effect produced by the interaction controller.
    pub fn apply_effect(&mut self, effect: InputEffect) {
        match effect {
            InputEffect::CameraChanged(camera) => self.set_camera(camera),
            InputEffect::CardMoved { id, position } => self.reposition_card(&id, position),
        }
    }

    /// Replaces the camera wholesale (already-clamped values expected from
    /// the camera module; zoom is re-clamped anyway to keep the invariant
    /// local).
    pub fn set_camera(&mut self, camera: Camera) {
        let mut next = self.state.clone();
        next.camera = Camera {
            position: camera.position,
            zoom: camera::clamp_zoom(camera.zoom),
        };
        self.commit(next);
    }

    /// Pans by a pointer delta in screen pixels.
    pub fn pan(&mut self, pointer_delta: Vec2) {
        let camera = camera::pan(&self.state.camera, pointer_delta);
        self.set_camera(camera);
    }

    /// Center-anchored zoom used by the sidebar buttons.
    pub fn zoom_by(&mut self, factor: f64) {
        let camera = camera::zoom_by(&self.state.camera, factor);
        self.set_camera(camera);
    }

    /// Returns the camera to the origin at unit zoom.
    pub fn reset_view(&mut self) {
        self.set_camera(Camera::default());
    }

    /// Flips between light and dark theme.
    pub fn toggle_theme(&mut self) {
        use crate::model::state::Theme;
        let mut next = self.state.clone();
        next.theme = match next.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        self.commit(next);
    }

    /// Toggles orbit layout mode, starting or stopping the orbit clock.
    /// Returns the new mode.
    pub fn toggle_orbit_mode(&mut self) -> bool {
        let mut next = self.state.clone();
        next.orbit_mode = !next.orbit_mode;
        if next.orbit_mode {
            self.orbit.start();
        } else {
            self.orbit.stop();
        }
        let mode = next.orbit_mode;
        self.commit(next);
        mode
    }

    /// Replaces the whole state, e.g. after a successful import. The orbit
    /// clock is re-aligned with the imported mode.
    pub fn replace_state(&mut self, state: AppState) {
        if state.orbit_mode {
            self.orbit.start();
        } else {
            self.orbit.stop();
        }
        self.commit(sanitize_zoom(state));
    }

    /// Installs the next state version and persists it best-effort.
    fn commit(&mut self, next: AppState) {
        self.state = next;
        if let Err(err) = self.repo.save_state(&self.state) {
            // Deliberate policy: persistence is best-effort and must never
            // interrupt the interaction that triggered it.
            warn!("event=state_save module=session status=error error={err}");
        }
    }
}

/// Forces the zoom of an externally produced state back into bounds.
///
/// Documents written by other tools can carry a zero, negative or
/// non-finite zoom; accepting one wholesale would let the next pan or
/// anchored zoom divide by it and persist a non-finite camera.
fn sanitize_zoom(mut state: AppState) -> AppState {
    state.camera.zoom = if state.camera.zoom.is_finite() {
        camera::clamp_zoom(state.camera.zoom)
    } else {
        1.0
    };
    state
}
