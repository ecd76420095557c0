//! Shared helpers for integration tests.

#![allow(dead_code)]

use farkle_engine::core::{FarkleConfig, Player, PlayerRegistry, Points};
use farkle_engine::session::SessionController;
use farkle_engine::store::WinStore;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Players already on board with the given scores.
pub fn table(scores: &[(&str, Points)]) -> PlayerRegistry {
    PlayerRegistry::from(
        scores
            .iter()
            .map(|&(name, score)| Player {
                name: name.to_string(),
                score,
                on_board: score > 0,
                wins: 0,
            })
            .collect::<Vec<_>>(),
    )
}

/// Session with the named players seated (not started).
pub fn seated<S: WinStore>(config: FarkleConfig, store: S, names: &[&str]) -> SessionController<S> {
    init_logging();
    let mut session = SessionController::with_config(config, store);
    for name in names {
        session.add_player(name);
    }
    session
}
