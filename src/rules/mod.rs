//! Game rules: turn rotation, banking, end-of-game and tie detection.
//!
//! - `engine`: the per-game state machine
//! - `tie`: standings helpers (top scorers, loser, dice roll-off)

pub mod engine;
pub mod tie;

pub use engine::{GameEngine, GameResult, TurnOutcome};
pub use tie::{find_loser_index, find_tied_players, highest_score, roll_off};
