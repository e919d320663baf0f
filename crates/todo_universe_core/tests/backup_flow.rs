use rand::rngs::StdRng;
use rand::SeedableRng;
use todo_universe_core::db::{open_db, open_db_in_memory};
use todo_universe_core::repo::state_repo::SqliteStateRepository;
use todo_universe_core::service::backup::default_backup_path;
use todo_universe_core::{export_state, import_state, BackupError, Session};

#[test]
fn export_from_one_session_and_import_into_another() {
    let dir = tempfile::tempdir().unwrap();
    let backup = default_backup_path(dir.path());
    let mut rng = StdRng::seed_from_u64(77);

    // Session A: build up some state and export it.
    let conn_a = open_db_in_memory().unwrap();
    let mut session_a = Session::open(SqliteStateRepository::new(&conn_a), false);
    let id = session_a.create_card(&mut rng);
    session_a
        .add_link(&id, "https://example.com/spec", "reading")
        .unwrap();
    session_a.toggle_orbit_mode();
    export_state(session_a.state(), &backup).unwrap();

    // Session B: fresh database, import replaces the welcome state.
    let conn_b = open_db_in_memory().unwrap();
    let mut session_b = Session::open(SqliteStateRepository::new(&conn_b), false);
    assert_ne!(session_b.state(), session_a.state());

    let imported = import_state(&backup).unwrap();
    session_b.replace_state(imported);

    assert_eq!(session_b.state(), session_a.state());
    assert!(session_b.state().orbit_mode);
    assert!(session_b.orbit_animating());
}

#[test]
fn imported_state_lands_in_the_durable_slot() {
    let dir = tempfile::tempdir().unwrap();
    let backup = default_backup_path(dir.path());
    let db_path = dir.path().join("universe.db");
    let mut rng = StdRng::seed_from_u64(5);

    {
        let conn = open_db_in_memory().unwrap();
        let mut session = Session::open(SqliteStateRepository::new(&conn), false);
        session.create_card(&mut rng);
        session.create_card(&mut rng);
        export_state(session.state(), &backup).unwrap();
    }

    {
        let conn = open_db(&db_path).unwrap();
        let mut session = Session::open(SqliteStateRepository::new(&conn), false);
        session.replace_state(import_state(&backup).unwrap());
        assert_eq!(session.state().cards.len(), 3);
    }

    // Reconnect: the import must have been committed, not just installed.
    let conn = open_db(&db_path).unwrap();
    let session = Session::open(SqliteStateRepository::new(&conn), false);
    assert_eq!(session.state().cards.len(), 3);
}

#[test]
fn rejected_import_leaves_the_session_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("broken.json");
    std::fs::write(&backup, r#"{ "cards": [] }"#).unwrap();

    let conn = open_db_in_memory().unwrap();
    let session = Session::open(SqliteStateRepository::new(&conn), false);
    let before = session.state().clone();

    let err = import_state(&backup).unwrap_err();
    assert!(matches!(err, BackupError::MissingCamera));
    assert_eq!(session.state(), &before);
}
