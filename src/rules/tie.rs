//! Final standings: top scorers, ties, and the loser.
//!
//! Pure functions over the player list, evaluated on demand so they can
//! never drift out of sync with the scores they describe.

use tracing::debug;

use crate::core::{GameRng, PlayerId, PlayerRegistry, Points, TiedPlayers};

/// Highest score at the table, or `None` with no players.
#[must_use]
pub fn highest_score(players: &PlayerRegistry) -> Option<Points> {
    players.iter().map(|(_, p)| p.score).max()
}

/// Every seat holding the highest score, in ascending seat order.
///
/// A single entry means an outright leader; two or more means a
/// tie-breaker is needed.
///
/// ```
/// use farkle_engine::core::{Player, PlayerId, PlayerRegistry};
/// use farkle_engine::rules::find_tied_players;
///
/// let players = PlayerRegistry::from(vec![
///     Player { name: "Alice".into(), score: 8000, on_board: true, wins: 0 },
///     Player { name: "Bob".into(), score: 12000, on_board: true, wins: 0 },
///     Player { name: "Charlie".into(), score: 12000, on_board: true, wins: 0 },
/// ]);
/// assert_eq!(find_tied_players(&players).as_slice(), &[PlayerId::new(1), PlayerId::new(2)]);
/// ```
#[must_use]
pub fn find_tied_players(players: &PlayerRegistry) -> TiedPlayers {
    let Some(max) = highest_score(players) else {
        return TiedPlayers::new();
    };
    players
        .iter()
        .filter(|(_, p)| p.score == max)
        .map(|(id, _)| id)
        .collect()
}

/// First seat holding the lowest score.
///
/// The loser starts the next game. With equal scores the first seat is the
/// loser.
#[must_use]
pub fn find_loser_index(players: &PlayerRegistry) -> Option<PlayerId> {
    // min_by_key keeps the first of equal elements
    players.iter().min_by_key(|(_, p)| p.score).map(|(id, _)| id)
}

/// Settle a tie by dice: each contender rolls, the high roll wins, and
/// players sharing the high roll go again.
///
/// # Panics
///
/// Panics if `tied` is empty.
pub fn roll_off(tied: &[PlayerId], rng: &mut GameRng) -> PlayerId {
    assert!(!tied.is_empty(), "Roll-off needs at least one player");

    let mut contenders: TiedPlayers = TiedPlayers::from_slice(tied);
    while contenders.len() > 1 {
        let rolls = std::mem::take(&mut contenders);
        let faces: Vec<u8> = rolls.iter().map(|_| rng.roll_die()).collect();
        let best = faces.iter().copied().max().unwrap_or(0);

        debug!(?rolls, ?faces, best, "tie-breaker roll");

        contenders = rolls
            .into_iter()
            .zip(faces)
            .filter(|&(_, face)| face == best)
            .map(|(id, _)| id)
            .collect();
    }
    contenders[0]
}
