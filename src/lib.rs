//! # farkle-engine
//!
//! Turn and scoring engine for multiplayer Farkle.
//!
//! ## Design Principles
//!
//! 1. **Synchronous state machine**: every operation runs to completion and
//!    reports what it did. No event loop, no interior mutability.
//!
//! 2. **Silent rejection**: invalid requests (blank names, starting with too
//!    few players, banking short of the entry threshold, scoring after the
//!    game ended) change nothing and say so through the return value.
//!
//! 3. **Derived standings**: winner, loser, and ties are computed from the
//!    scores on demand, never cached.
//!
//! ## Modules
//!
//! - `core`: players, configuration, turn accumulator, per-game state, RNG
//! - `scoring`: dice-combination point values
//! - `rules`: the game state machine and standings helpers
//! - `session`: multi-game lifecycle and win tracking
//! - `store`: persisted win counters

pub mod core;
pub mod scoring;
pub mod rules;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    FarkleConfig, GamePhase, GameRng, GameRngState, GameSession, Player, PlayerId,
    PlayerRegistry, Points, TiedPlayers, TurnAccumulator, TurnRecord,
};

pub use crate::scoring::{score_for_combination, Combination};

pub use crate::rules::{
    find_loser_index, find_tied_players, highest_score, roll_off, GameEngine, GameResult,
    TurnOutcome,
};

pub use crate::session::{BankOutcome, BankRejection, SessionController};

pub use crate::store::{JsonFileWinStore, MemoryWinStore, StoreError, WinStore, WinTable};
