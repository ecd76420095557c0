//! Dice-combination point values.
//!
//! The table players score against. The engine never inspects dice: the
//! presentation layer names the combination that was set aside and the
//! resulting points go straight into the `TurnAccumulator`.

mod combination;

pub use combination::{score_for_combination, Combination};
