//! Card and link domain model.
//!
//! # Responsibility
//! - Define the canonical card record placed on the canvas.
//! - Classify link targets once at creation time.
//! - Enforce the brief-length bound before any store mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another card.
//! - `updated_at` moves forward on content edits, never on drag-only moves.
//! - `TodoLink.kind` is derived from the URL shape at creation and then
//!   stored; it is never recomputed from the URL afterwards.

use chrono::{DateTime, Utc};
use kurbo::Point;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum length of a card brief, counted in characters.
pub const BRIEF_MAX_CHARS: usize = 120;

/// Default brief assigned to freshly created cards.
pub const DEFAULT_BRIEF: &str = "New Task";

/// Stable identifier for a card.
///
/// Kept as a plain string alias: imported documents may carry ids minted by
/// other tools, and the persisted format only promises uniqueness, not any
/// particular shape. Fresh ids are UUID v4 strings.
pub type CardId = String;

/// Stable identifier for a link attached to a card.
pub type LinkId = String;

// Anything with a URL scheme (https://, file://, obsidian://, ...) opens
// externally; everything else is treated as a local file-system path.
static SCHEMED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").expect("scheme pattern is valid"));

/// Link target classification, decided once when the link is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Schemed URL opened in the host browser.
    External,
    /// Local file-system path, offered for copy rather than navigation.
    Local,
}

/// Classifies a URL string into [`LinkKind`] based on its shape.
pub fn detect_link_kind(url: &str) -> LinkKind {
    if SCHEMED_URL.is_match(url.trim()) {
        LinkKind::External
    } else {
        LinkKind::Local
    }
}

/// A labeled link attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoLink {
    pub id: LinkId,
    pub url: String,
    pub label: String,
    /// Serialized as `type` to match the persisted document shape.
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

impl TodoLink {
    /// Creates a link with a fresh id, classifying the URL once.
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        let url = url.into();
        let kind = detect_link_kind(&url);
        Self {
            id: Uuid::new_v4().to_string(),
            url,
            label: label.into(),
            kind,
        }
    }
}

/// Validation failure raised before a card write is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    /// The brief exceeds [`BRIEF_MAX_CHARS`] characters.
    BriefTooLong { chars: usize },
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BriefTooLong { chars } => write!(
                f,
                "card brief has {chars} characters, limit is {BRIEF_MAX_CHARS}"
            ),
        }
    }
}

impl Error for CardValidationError {}

/// A movable task card positioned in world coordinates.
///
/// Cards render in `AppState.cards` insertion order, so the sequence position
/// doubles as z-order and must be preserved by every store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoCard {
    /// Immutable once created.
    pub id: CardId,
    /// One-line summary, at most [`BRIEF_MAX_CHARS`] characters.
    pub brief: String,
    /// Free-form markdown body.
    pub notes: String,
    /// Ordered links. Absent in documents written before links existed.
    #[serde(default)]
    pub links: Vec<TodoLink>,
    /// World-space position of the card center.
    pub position: Point,
    /// Background color as a `#rrggbb` hex string.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoCard {
    /// Creates a card with a fresh id and both timestamps set to now.
    pub fn new(position: Point, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            brief: DEFAULT_BRIEF.to_string(),
            notes: String::new(),
            links: Vec::new(),
            position,
            color: color.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks store-boundary invariants.
    ///
    /// # Errors
    /// - [`CardValidationError::BriefTooLong`] when the brief exceeds the
    ///   character bound.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        let chars = self.brief.chars().count();
        if chars > BRIEF_MAX_CHARS {
            return Err(CardValidationError::BriefTooLong { chars });
        }
        Ok(())
    }
}
