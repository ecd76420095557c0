//! Pending points for the turn in progress.

use serde::{Deserialize, Serialize};

use crate::scoring::Combination;

/// Point values. Scores and banks are never negative.
pub type Points = u32;

/// Running total of the current player's unbanked points.
///
/// Independent of game state: the caller decides whether the total is
/// banked or thrown away on a farkle.
///
/// ```
/// use farkle_engine::core::TurnAccumulator;
/// use farkle_engine::scoring::Combination;
///
/// let mut turn = TurnAccumulator::new();
/// turn.add_combination(Combination::TripleFives);
/// turn.add(50);
/// assert_eq!(turn.clear(), 550);
/// assert_eq!(turn.total(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAccumulator {
    points: Points,
}

impl TurnAccumulator {
    /// Start an empty turn.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: 0 }
    }

    /// Add scored points to the running total.
    pub fn add(&mut self, points: Points) {
        self.points = self.points.saturating_add(points);
    }

    /// Add the value of a scoring combination.
    pub fn add_combination(&mut self, combination: Combination) {
        self.add(combination.points());
    }

    /// Current unbanked total.
    #[must_use]
    pub const fn total(&self) -> Points {
        self.points
    }

    /// Take the total and reset to zero.
    pub fn clear(&mut self) -> Points {
        std::mem::take(&mut self.points)
    }
}
