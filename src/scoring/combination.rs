//! Named scoring combinations and their fixed values.

use serde::{Deserialize, Serialize};

use crate::core::Points;

/// A scoring set the player kept from a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combination {
    SingleOne,
    SingleFive,
    TripleOnes,
    TripleTwos,
    TripleThrees,
    TripleFours,
    TripleFives,
    TripleSixes,
    FourOfAKind,
    FiveOfAKind,
    SixOfAKind,
    /// 1-2-3-4-5-6.
    Straight,
    ThreePairs,
    FourOfAKindPlusPair,
    TwoTriples,
}

impl Combination {
    /// Every combination, in table order.
    pub const ALL: [Combination; 15] = [
        Combination::SingleOne,
        Combination::SingleFive,
        Combination::TripleOnes,
        Combination::TripleTwos,
        Combination::TripleThrees,
        Combination::TripleFours,
        Combination::TripleFives,
        Combination::TripleSixes,
        Combination::FourOfAKind,
        Combination::FiveOfAKind,
        Combination::SixOfAKind,
        Combination::Straight,
        Combination::ThreePairs,
        Combination::FourOfAKindPlusPair,
        Combination::TwoTriples,
    ];

    /// Point value of this combination.
    #[must_use]
    pub const fn points(self) -> Points {
        match self {
            Combination::SingleOne => 100,
            Combination::SingleFive => 50,
            Combination::TripleOnes => 300,
            Combination::TripleTwos => 200,
            Combination::TripleThrees => 300,
            Combination::TripleFours => 400,
            Combination::TripleFives => 500,
            Combination::TripleSixes => 600,
            Combination::FourOfAKind => 1000,
            Combination::FiveOfAKind => 2000,
            Combination::SixOfAKind => 3000,
            Combination::Straight
            | Combination::ThreePairs
            | Combination::FourOfAKindPlusPair => 1500,
            Combination::TwoTriples => 2500,
        }
    }

    /// Three of a kind for a die face (1-6).
    #[must_use]
    pub const fn triple(face: u8) -> Option<Combination> {
        match face {
            1 => Some(Combination::TripleOnes),
            2 => Some(Combination::TripleTwos),
            3 => Some(Combination::TripleThrees),
            4 => Some(Combination::TripleFours),
            5 => Some(Combination::TripleFives),
            6 => Some(Combination::TripleSixes),
            _ => None,
        }
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Combination::SingleOne => "One",
            Combination::SingleFive => "Five",
            Combination::TripleOnes => "111",
            Combination::TripleTwos => "222",
            Combination::TripleThrees => "333",
            Combination::TripleFours => "444",
            Combination::TripleFives => "555",
            Combination::TripleSixes => "666",
            Combination::FourOfAKind => "Four of a Kind",
            Combination::FiveOfAKind => "Five of a Kind",
            Combination::SixOfAKind => "Six of a Kind",
            Combination::Straight => "Straight",
            Combination::ThreePairs => "Three Pairs",
            Combination::FourOfAKindPlusPair => "Four of a Kind + Pair",
            Combination::TwoTriples => "Two Triples",
        };
        f.write_str(label)
    }
}

/// Point value for a combination.
#[must_use]
pub const fn score_for_combination(combination: Combination) -> Points {
    combination.points()
}
