//! Game configuration.
//!
//! The rules constants live here rather than in the engine so embedders can
//! run shorter games (or house rules) without touching the state machine.

use serde::{Deserialize, Serialize};

use super::turn::Points;

/// Farkle rule parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarkleConfig {
    /// Score that starts the last round (default: 10000).
    pub target_score: Points,

    /// Points a single turn must bank before a player is on board
    /// (default: 500).
    pub entry_threshold: Points,

    /// Fewest players a game can start with (default: 2).
    pub min_players: usize,
}

impl Default for FarkleConfig {
    fn default() -> Self {
        Self {
            target_score: 10_000,
            entry_threshold: 500,
            min_players: 2,
        }
    }
}

impl FarkleConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target: Points) -> Self {
        self.target_score = target;
        self
    }

    /// Set the entry threshold.
    #[must_use]
    pub fn with_entry_threshold(mut self, threshold: Points) -> Self {
        self.entry_threshold = threshold;
        self
    }

    /// Set the minimum player count.
    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 player");
        assert!(count <= 255, "At most 255 players supported");
        self.min_players = count;
        self
    }
}
