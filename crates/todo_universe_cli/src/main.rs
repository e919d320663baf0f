//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todo_universe_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let state = todo_universe_core::welcome_state();
    println!("todo_universe_core version={}", todo_universe_core::core_version());
    println!(
        "welcome_state cards={} zoom={} theme={:?}",
        state.cards.len(),
        state.camera.zoom,
        state.theme
    );
}
