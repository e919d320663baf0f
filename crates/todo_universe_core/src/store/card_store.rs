//! Copy-on-write operations over the card collection.
//!
//! # Responsibility
//! - Provide create/update/delete/reposition over `AppState.cards`.
//! - Return a fresh `AppState` per mutation; callers never see shared
//!   mutable aliasing across state versions.
//!
//! # Invariants
//! - Card ids are unique within a state and immutable once assigned.
//! - Relative card order (z-order) survives every operation.
//! - `update_card` refreshes `updated_at`; `reposition_card` never does.
//! - Writes are validated (`TodoCard::validate`) before being accepted.

use chrono::Utc;
use kurbo::Point;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::card::{CardId, CardValidationError, TodoCard, TodoLink};
use crate::model::palette::pick_card_color;
use crate::model::state::AppState;

/// Half-width of the random placement box for new cards, in world units at
/// zoom 1. The effective offset is scaled by inverse zoom so new cards land
/// near whatever is on screen at any magnification.
pub const CREATE_JITTER_WORLD_UNITS: f64 = 100.0;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by card store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(CardValidationError),
    NotFound(CardId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "card not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<CardValidationError> for StoreError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Partial content update for a card. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub brief: Option<String>,
    pub notes: Option<String>,
    pub links: Option<Vec<TodoLink>>,
    pub color: Option<String>,
}

/// Creates a new card near the camera center and appends it to the state.
///
/// The position is jittered by up to `±CREATE_JITTER_WORLD_UNITS / zoom`
/// per axis, and the color comes from the fixed palette using the
/// index-with-wraparound-plus-random policy.
pub fn create_card(state: &AppState, rng: &mut impl Rng) -> (AppState, CardId) {
    let zoom = state.camera.zoom;
    let jitter = CREATE_JITTER_WORLD_UNITS / zoom;
    let position = Point::new(
        state.camera.position.x + rng.gen_range(-1.0..1.0) * jitter,
        state.camera.position.y + rng.gen_range(-1.0..1.0) * jitter,
    );
    let color = pick_card_color(rng, state.cards.len());

    let card = TodoCard::new(position, color);
    let id = card.id.clone();

    let mut next = state.clone();
    next.cards.push(card);
    (next, id)
}

/// Merges a partial content update into the matching card.
///
/// Refreshes `updated_at` because every patched field is content.
///
/// # Errors
/// - [`StoreError::NotFound`] when no card has the given id.
/// - [`StoreError::Validation`] when the patched brief exceeds its bound;
///   the returned state is not produced in that case.
pub fn update_card(state: &AppState, id: &str, patch: CardPatch) -> StoreResult<AppState> {
    let index = state
        .cards
        .iter()
        .position(|card| card.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

    let mut card = state.cards[index].clone();
    if let Some(brief) = patch.brief {
        card.brief = brief;
    }
    if let Some(notes) = patch.notes {
        card.notes = notes;
    }
    if let Some(links) = patch.links {
        card.links = links;
    }
    if let Some(color) = patch.color {
        card.color = color;
    }
    card.updated_at = Utc::now();
    card.validate()?;

    let mut next = state.clone();
    next.cards[index] = card;
    Ok(next)
}

/// Removes the matching card, preserving the order of all others.
///
/// Deleting an id that is already absent returns an unchanged copy.
pub fn delete_card(state: &AppState, id: &str) -> AppState {
    let mut next = state.clone();
    next.cards.retain(|card| card.id != id);
    next
}

/// Moves a card to a new world position.
///
/// Position is drag-driven and ephemeral, so `updated_at` is deliberately
/// left alone. An absent id is a no-op, matching drag semantics where the
/// card may have been deleted mid-gesture.
pub fn reposition_card(state: &AppState, id: &str, position: Point) -> AppState {
    let mut next = state.clone();
    if let Some(card) = next.cards.iter_mut().find(|card| card.id == id) {
        card.position = position;
    }
    next
}
