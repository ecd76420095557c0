//! Player identification and the ordered player registry.
//!
//! ## PlayerId
//!
//! Positional player identifier supporting 1-255 players. Identity is the
//! seat index; names may repeat.
//!
//! ## PlayerRegistry
//!
//! Ordered list of `Player` records backed by a `Vec` for O(1) access.
//! Indexable by `PlayerId`. Only the engine and the session controller
//! mutate it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::turn::Points;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use farkle_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// `score` and `on_board` belong to the current game and are reset between
/// games. `wins` survives for the lifetime of the session and is mirrored to
/// the win store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name (trimmed, never empty).
    pub name: String,

    /// Cumulative banked score in the current game.
    pub score: Points,

    /// Has this player banked a qualifying first turn?
    pub on_board: bool,

    /// Games won across sessions.
    pub wins: u32,
}

impl Player {
    /// Create a player with a fresh score.
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            score: 0,
            on_board: false,
            wins,
        }
    }

    /// Clear per-game state, keeping name and wins.
    pub fn reset_for_new_game(&mut self) {
        self.score = 0;
        self.on_board = false;
    }
}

/// Ordered player list.
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{PlayerId, PlayerRegistry};
///
/// let mut players = PlayerRegistry::new();
/// let alice = players.add_player("  Alice ", |_| 3).unwrap();
/// assert!(players.add_player("   ", |_| 0).is_none());
///
/// assert_eq!(alice, PlayerId::new(0));
/// assert_eq!(players[alice].name, "Alice");
/// assert_eq!(players[alice].wins, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player at the end of the list.
    ///
    /// The name is trimmed; an empty or all-whitespace name is silently
    /// refused. `lookup_wins` supplies the persisted win count for the
    /// trimmed name.
    pub fn add_player(
        &mut self,
        name: &str,
        lookup_wins: impl FnOnce(&str) -> u32,
    ) -> Option<PlayerId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        assert!(self.players.len() < 255, "At most 255 players supported");

        let wins = lookup_wins(trimmed);
        self.players.push(Player::new(trimmed, wins));
        Some(PlayerId((self.players.len() - 1) as u8))
    }

    /// Remove the player at `player`'s seat. Later seats shift down by one.
    ///
    /// Returns the removed record, or `None` if the seat is empty.
    pub fn remove_player(&mut self, player: PlayerId) -> Option<Player> {
        if player.index() < self.players.len() {
            Some(self.players.remove(player.index()))
        } else {
            None
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Is `player` a valid seat?
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.players.len()
    }

    /// Get a player record.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Get a mutable player record.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &Player) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate mutably over all records in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// All records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    /// Reset every score and on-board flag. Names and wins are kept.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_for_new_game();
        }
    }

    /// Set every player's win count to zero.
    pub fn reset_wins(&mut self) {
        for player in &mut self.players {
            player.wins = 0;
        }
    }
}

impl Index<PlayerId> for PlayerRegistry {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.players[player.index()]
    }
}

impl IndexMut<PlayerId> for PlayerRegistry {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.players[player.index()]
    }
}

impl From<Vec<Player>> for PlayerRegistry {
    fn from(players: Vec<Player>) -> Self {
        assert!(players.len() <= 255, "At most 255 players supported");
        Self { players }
    }
}
