//! State slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full `AppState` document under one fixed slot key.
//! - Decode stored documents with the per-field defaulting rules for
//!   older shapes (`links` -> empty, `orbitMode` -> false).
//!
//! # Invariants
//! - Every save is a full-object overwrite; there are no partial writes.
//! - Read paths report typed errors; the best-effort fallback policy lives
//!   in the session layer, not here.

use crate::db::DbError;
use crate::model::state::AppState;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key the application state lives under.
pub const STATE_SLOT_KEY: &str = "todo-universe-state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for state persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode app state: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted app state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the single persisted state document.
pub trait StateRepository {
    /// Overwrites the stored document with the given state.
    fn save_state(&self, state: &AppState) -> RepoResult<()>;

    /// Loads the stored document, or `None` when nothing was ever saved.
    fn load_state(&self) -> RepoResult<Option<AppState>>;
}

/// SQLite-backed state repository over the `app_state` slot table.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn save_state(&self, state: &AppState) -> RepoResult<()> {
        let payload = serde_json::to_string(state).map_err(RepoError::Encode)?;
        self.conn.execute(
            "INSERT INTO app_state (slot, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![STATE_SLOT_KEY, payload],
        )?;
        Ok(())
    }

    fn load_state(&self) -> RepoResult<Option<AppState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM app_state WHERE slot = ?1;",
                [STATE_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(Some(decode_state(&payload)?)),
            None => Ok(None),
        }
    }
}

/// Decodes a stored JSON document into `AppState`.
///
/// Defaulting rules for older shapes are declared on the model itself
/// (`#[serde(default)]`), so a document written before `links` or
/// `orbitMode` existed still loads. A document that fails to decode is
/// reported as `InvalidData` rather than silently repaired.
pub fn decode_state(payload: &str) -> RepoResult<AppState> {
    serde_json::from_str(payload)
        .map_err(|err| RepoError::InvalidData(format!("slot `{STATE_SLOT_KEY}`: {err}")))
}
