//! Core types: players, configuration, turn accumulation, per-game state, RNG.
//!
//! Nothing in here knows how turns are sequenced or how a game ends; that
//! lives in `rules`. These are the records the rules operate on.

pub mod player;
pub mod config;
pub mod turn;
pub mod state;
pub mod rng;

pub use player::{Player, PlayerId, PlayerRegistry};
pub use config::FarkleConfig;
pub use turn::{Points, TurnAccumulator};
pub use state::{GamePhase, GameSession, TiedPlayers, TurnRecord};
pub use rng::{GameRng, GameRngState, DIE_FACES};
