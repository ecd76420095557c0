//! Per-game state.
//!
//! ## GameSession
//!
//! Everything transient about one game: whose turn it is, how many turns
//! have been taken, the last-round and tie-breaker flags, and a turn
//! history. A new `GameSession` is created for every game; only the starting
//! seat may carry over from the previous one.
//!
//! ## GamePhase
//!
//! Derived from the flags on demand, never stored:
//!
//! ```text
//! Active ──(score ≥ target)──> LastRound ──(round complete)──> Over
//!                                   │
//!                                   └──(round complete, tied)──> TieBreaker ──(select)──> Over
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::turn::Points;

/// Players tied for first place. Four seats inline covers nearly every table.
pub type TiedPlayers = SmallVec<[PlayerId; 4]>;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play; nobody has reached the target.
    Active,
    /// Someone reached the target; the round is being finished.
    LastRound,
    /// The final round ended with two or more players sharing the top score.
    TieBreaker,
    /// The winner is known.
    Over,
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number across all players.
    pub turn: u32,
    /// Who took the turn.
    pub player: PlayerId,
    /// Points banked (0 for a farkle).
    pub banked: Points,
    /// The player's score after the turn.
    pub score_after: Points,
}

/// Transient state for a single game.
///
/// Invariants upheld by the mutators:
/// - `current_player` is always a valid seat.
/// - `winning_player` is assigned at most once.
/// - `game_over` implies `winning_player.is_some()` and a whole number of rounds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    player_count: usize,
    starting_player: PlayerId,
    current_player: PlayerId,
    total_turns: u32,
    winning_player: Option<PlayerId>,
    in_last_round: bool,
    game_over: bool,
    in_tie_breaker: bool,
    tied_players: TiedPlayers,
    selected_winner: Option<PlayerId>,
    history: Vector<TurnRecord>,
}

impl GameSession {
    /// Create a session for `player_count` players.
    ///
    /// `starting_player` is used when it names a valid seat; otherwise the
    /// first seat starts.
    #[must_use]
    pub fn new(player_count: usize, starting_player: Option<PlayerId>) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let starting_player = starting_player
            .filter(|p| p.index() < player_count)
            .unwrap_or(PlayerId::new(0));

        Self {
            player_count,
            starting_player,
            current_player: starting_player,
            total_turns: 0,
            winning_player: None,
            in_last_round: false,
            game_over: false,
            in_tie_breaker: false,
            tied_players: TiedPlayers::new(),
            selected_winner: None,
            history: Vector::new(),
        }
    }

    /// Number of seats this session was created for.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Seat that took the first turn.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turns completed since the game started.
    #[must_use]
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// First player to reach the target, if any.
    #[must_use]
    pub fn winning_player(&self) -> Option<PlayerId> {
        self.winning_player
    }

    /// Has the last round begun?
    #[must_use]
    pub fn in_last_round(&self) -> bool {
        self.in_last_round
    }

    /// Has the final round completed?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Is the game waiting on an out-of-band tie-breaker?
    #[must_use]
    pub fn in_tie_breaker(&self) -> bool {
        self.in_tie_breaker
    }

    /// Seats sharing the top score while a tie-breaker is pending.
    #[must_use]
    pub fn tied_players(&self) -> &[PlayerId] {
        &self.tied_players
    }

    /// Winner picked by the tie-breaker, if one was needed.
    #[must_use]
    pub fn selected_winner(&self) -> Option<PlayerId> {
        self.selected_winner
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.in_tie_breaker {
            GamePhase::TieBreaker
        } else if self.game_over {
            GamePhase::Over
        } else if self.in_last_round {
            GamePhase::LastRound
        } else {
            GamePhase::Active
        }
    }

    /// True when every seat has taken the same number of turns.
    #[must_use]
    pub fn at_round_boundary(&self) -> bool {
        self.total_turns % self.player_count as u32 == 0
    }

    // === Mutators ===

    /// Pass the turn to the next seat and count the turn.
    pub fn advance(&mut self) {
        self.current_player = self.current_player.next(self.player_count);
        self.total_turns += 1;
    }

    /// Record `player` as the first to reach the target.
    ///
    /// Returns false (and changes nothing) if someone already did.
    pub fn mark_target_reached(&mut self, player: PlayerId) -> bool {
        if self.winning_player.is_some() {
            return false;
        }
        self.winning_player = Some(player);
        self.in_last_round = true;
        true
    }

    /// Close the game.
    pub fn finish(&mut self) {
        debug_assert!(self.winning_player.is_some());
        self.game_over = true;
    }

    /// Hold the result until one of `tied` is selected.
    pub fn enter_tie_breaker(&mut self, tied: TiedPlayers) {
        self.in_tie_breaker = true;
        self.tied_players = tied;
    }

    /// Resolve a pending tie-breaker in favour of `player`.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the tied seats.
    pub fn resolve_tie(&mut self, player: PlayerId) {
        assert!(
            self.tied_players.contains(&player),
            "{} is not tied for first place",
            player
        );
        self.in_tie_breaker = false;
        self.tied_players.clear();
        self.selected_winner = Some(player);
    }

    /// Append a completed turn to the history.
    pub fn record_turn(&mut self, player: PlayerId, banked: Points, score_after: Points) {
        let turn = self.history.len() as u32 + 1;
        self.history.push_back(TurnRecord {
            turn,
            player,
            banked,
            score_after,
        });
    }
}
