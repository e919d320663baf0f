//! Core domain logic for the To-Do Universe spatial note canvas.
//! This crate is the single source of truth for business invariants.

pub mod animation;
pub mod camera;
pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod store;

pub use animation::{OrbitClock, ORBIT_RADIUS, ORBIT_STEP_RADIANS};
pub use input::{InputEffect, InteractionController, PointerTarget};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{CardId, LinkKind, TodoCard, TodoLink, BRIEF_MAX_CHARS};
pub use model::state::{welcome_state, AppState, Camera, Theme, MAX_ZOOM, MIN_ZOOM};
pub use repo::state_repo::{RepoError, RepoResult, SqliteStateRepository, StateRepository};
pub use service::backup::{export_state, import_state, BackupError, BACKUP_FILE_NAME};
pub use service::session::{Session, SessionError};
pub use store::card_store::{CardPatch, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
