//! Backup export and import of the full application state.
//!
//! # Responsibility
//! - Write the current state as a pretty-printed JSON backup file.
//! - Validate and parse user-supplied backup files before they replace
//!   the live state.
//!
//! # Invariants
//! - Import accepts a document only if it carries both a `cards` sequence
//!   and a `camera` object; anything else is rejected with a typed error
//!   and the caller's current state stays untouched.
//! - An accepted document is taken wholesale, with the same per-field
//!   defaulting rules as the durable slot.

use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::state::AppState;

/// Default file name for exported backups.
pub const BACKUP_FILE_NAME: &str = "todo-universe-backup.json";

/// Failure raised by backup export or import.
#[derive(Debug)]
pub enum BackupError {
    Io(std::io::Error),
    /// The file is not JSON at all.
    Malformed(serde_json::Error),
    /// The document has no `cards` sequence.
    MissingCards,
    /// The document has no `camera` object.
    MissingCamera,
    /// The document passed the minimal shape check but still does not
    /// decode into an application state.
    InvalidState(String),
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "backup file i/o failed: {err}"),
            Self::Malformed(err) => write!(f, "backup file is not valid JSON: {err}"),
            Self::MissingCards => write!(f, "invalid backup file: missing `cards` sequence"),
            Self::MissingCamera => write!(f, "invalid backup file: missing `camera` object"),
            Self::InvalidState(message) => write!(f, "invalid backup file: {message}"),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BackupError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Conventional backup location inside a directory.
pub fn default_backup_path(dir: &Path) -> PathBuf {
    dir.join(BACKUP_FILE_NAME)
}

/// Serializes the full state as pretty-printed JSON to the given path.
pub fn export_state(state: &AppState, path: &Path) -> Result<(), BackupError> {
    let payload = serde_json::to_string_pretty(state)
        .map_err(|err| BackupError::InvalidState(err.to_string()))?;
    fs::write(path, payload)?;
    Ok(())
}

/// Reads and validates a backup file into a replacement state.
pub fn import_state(path: &Path) -> Result<AppState, BackupError> {
    let text = fs::read_to_string(path)?;
    parse_backup(&text)
}

/// Parses backup file contents.
///
/// Minimal validation first (`cards` sequence and `camera` object present),
/// then the document is decoded wholesale.
pub fn parse_backup(text: &str) -> Result<AppState, BackupError> {
    let value: Value = serde_json::from_str(text).map_err(BackupError::Malformed)?;

    if !value.get("cards").is_some_and(Value::is_array) {
        return Err(BackupError::MissingCards);
    }
    if !value.get("camera").is_some_and(Value::is_object) {
        return Err(BackupError::MissingCamera);
    }

    serde_json::from_value(value).map_err(|err| BackupError::InvalidState(err.to_string()))
}
