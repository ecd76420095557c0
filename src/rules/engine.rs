//! The turn-rotation and end-of-game state machine.
//!
//! `GameEngine` owns one game's `GameSession` and applies turn results to the
//! player list it is handed. Every transition is driven by
//! `apply_turn_result`; `select_tie_breaker_winner` is the only way out of a
//! tie.
//!
//! ## Trusting the caller
//!
//! The engine does not enforce the entry threshold. A bank below it for a
//! player who is not yet on board is still added to the score. Callers gate
//! banks with `can_bank` first; `SessionController::bank` does.

use tracing::{debug, info};

use super::tie::{find_loser_index, find_tied_players};
use crate::core::{
    FarkleConfig, GamePhase, GameSession, PlayerId, PlayerRegistry, Points, TiedPlayers,
};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner { winner: PlayerId, loser: PlayerId },
    /// Two or more players share the top score; waiting on a tie-breaker.
    TieBreak { tied: TiedPlayers, loser: PlayerId },
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner { winner, .. } if *winner == player)
    }

    /// Lowest-scoring seat; starts the next game.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        match self {
            GameResult::Winner { loser, .. } | GameResult::TieBreak { loser, .. } => *loser,
        }
    }
}

/// What a single `apply_turn_result` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game was already over; nothing changed.
    Ignored,
    /// The turn passed to `next`.
    Advanced { next: PlayerId },
    /// `leader` reached the target; the rest of the round is owed a turn.
    LastRoundStarted { leader: PlayerId, next: PlayerId },
    /// The final round completed.
    Finished(GameResult),
}

/// Farkle state machine for one game.
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{FarkleConfig, PlayerId, PlayerRegistry};
/// use farkle_engine::rules::{GameEngine, TurnOutcome};
///
/// let mut players = PlayerRegistry::new();
/// players.add_player("Alice", |_| 0);
/// players.add_player("Bob", |_| 0);
///
/// let mut engine = GameEngine::new(FarkleConfig::default(), players.len(), None);
///
/// // Alice banks 500 and gets on board.
/// let outcome = engine.apply_turn_result(&mut players, 500);
/// assert_eq!(outcome, TurnOutcome::Advanced { next: PlayerId::new(1) });
/// assert!(players[PlayerId::new(0)].on_board);
///
/// // Bob farkles.
/// engine.apply_turn_result(&mut players, 0);
/// assert_eq!(engine.current_player(), PlayerId::new(0));
/// assert!(!players[PlayerId::new(1)].on_board);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: FarkleConfig,
    session: GameSession,
}

impl GameEngine {
    /// Start a game for `player_count` seats.
    ///
    /// `starting_player` seeds the first turn when it is a valid seat.
    #[must_use]
    pub fn new(config: FarkleConfig, player_count: usize, starting_player: Option<PlayerId>) -> Self {
        let session = GameSession::new(player_count, starting_player);
        info!(
            player_count,
            starting_player = %session.current_player(),
            target = config.target_score,
            "game started"
        );
        Self { config, session }
    }

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &FarkleConfig {
        &self.config
    }

    /// Per-game state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.session.current_player()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// Has the final round completed?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Would banking `points` be allowed for the current player?
    ///
    /// Players already on board may bank anything. Everyone else needs at
    /// least the entry threshold in a single turn.
    #[must_use]
    pub fn can_bank(&self, players: &PlayerRegistry, points: Points) -> bool {
        let player = &players[self.current_player()];
        player.on_board || points >= self.config.entry_threshold
    }

    /// Apply the end of the current player's turn.
    ///
    /// `banked` is the turn total for a bank, or 0 for a farkle. The value
    /// is trusted: see the module docs. After the game is over every call is
    /// ignored.
    pub fn apply_turn_result(&mut self, players: &mut PlayerRegistry, banked: Points) -> TurnOutcome {
        if self.session.is_game_over() {
            debug!(banked, "turn result after game over ignored");
            return TurnOutcome::Ignored;
        }
        debug_assert_eq!(players.len(), self.session.player_count());

        let current = self.current_player();
        let player = &mut players[current];

        if banked > 0 && !player.on_board && banked >= self.config.entry_threshold {
            player.on_board = true;
            debug!(player = %current, name = %player.name, banked, "player on board");
        }
        player.score = player.score.saturating_add(banked);
        let score = player.score;

        debug!(player = %current, banked, score, "turn applied");
        self.session.record_turn(current, banked, score);

        let mut leader = None;
        if score >= self.config.target_score && self.session.mark_target_reached(current) {
            info!(player = %current, score, "target reached, last round");
            leader = Some(current);
        }

        let next = self.next_player();

        if self.session.in_last_round() && self.session.at_round_boundary() {
            return TurnOutcome::Finished(self.conclude(players));
        }

        match leader {
            Some(leader) => TurnOutcome::LastRoundStarted { leader, next },
            None => TurnOutcome::Advanced { next },
        }
    }

    /// Pass the turn without touching any score.
    ///
    /// Pure rotation: wraps at the player count and counts the turn. Does not
    /// evaluate the end of the game; `apply_turn_result` does that after
    /// rotating.
    pub fn next_player(&mut self) -> PlayerId {
        self.session.advance();
        self.session.current_player()
    }

    /// Settle a tie-breaker in favour of `player`.
    ///
    /// # Panics
    ///
    /// Panics if no tie-breaker is pending or `player` is not one of the
    /// tied seats.
    pub fn select_tie_breaker_winner(&mut self, players: &PlayerRegistry, player: PlayerId) -> GameResult {
        assert!(self.session.in_tie_breaker(), "No tie-breaker pending");
        self.session.resolve_tie(player);
        info!(winner = %player, "tie-breaker resolved");

        GameResult::Winner {
            winner: player,
            loser: self.loser(players).unwrap_or(player),
        }
    }

    /// Winner of a finished game.
    ///
    /// `None` while the game is running or a tie-breaker is pending. Always
    /// decided by final score (or tie-breaker selection), never by who
    /// reached the target first.
    #[must_use]
    pub fn winner(&self, players: &PlayerRegistry) -> Option<PlayerId> {
        if !self.session.is_game_over() || self.session.in_tie_breaker() {
            return None;
        }
        self.session
            .selected_winner()
            .or_else(|| find_tied_players(players).first().copied())
    }

    /// Loser of a finished game (first seat with the lowest score).
    #[must_use]
    pub fn loser(&self, players: &PlayerRegistry) -> Option<PlayerId> {
        if !self.session.is_game_over() {
            return None;
        }
        find_loser_index(players)
    }

    fn conclude(&mut self, players: &PlayerRegistry) -> GameResult {
        self.session.finish();

        let tied = find_tied_players(players);
        // The session has at least one seat, so both are present.
        let loser = find_loser_index(players).unwrap_or(PlayerId::new(0));

        if tied.len() > 1 {
            info!(?tied, "game over, tie for first");
            self.session.enter_tie_breaker(tied.clone());
            GameResult::TieBreak { tied, loser }
        } else {
            let winner = tied.first().copied().unwrap_or(PlayerId::new(0));
            info!(winner = %winner, loser = %loser, "game over");
            GameResult::Winner { winner, loser }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn seated(names: &[&str]) -> PlayerRegistry {
        let mut players = PlayerRegistry::new();
        for name in names {
            players.add_player(name, |_| 0);
        }
        players
    }

    fn engine_for(players: &PlayerRegistry) -> GameEngine {
        GameEngine::new(FarkleConfig::default(), players.len(), None)
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner { winner: PlayerId::new(1), loser: PlayerId::new(0) };
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.loser(), PlayerId::new(0));

        let tie = GameResult::TieBreak {
            tied: TiedPlayers::from_slice(&[PlayerId::new(0), PlayerId::new(1)]),
            loser: PlayerId::new(2),
        };
        assert!(!tie.is_winner(PlayerId::new(0)));
        assert_eq!(tie.loser(), PlayerId::new(2));
    }

    #[test]
    fn test_bank_gets_on_board() {
        let mut players = seated(&["Alice", "Bob"]);
        let mut engine = engine_for(&players);

        let outcome = engine.apply_turn_result(&mut players, 500);

        assert_eq!(outcome, TurnOutcome::Advanced { next: PlayerId::new(1) });
        assert_eq!(players[PlayerId::new(0)].score, 500);
        assert!(players[PlayerId::new(0)].on_board);
    }

    #[test]
    fn test_farkle_keeps_off_board() {
        let mut players = seated(&["Alice", "Bob"]);
        let mut engine = engine_for(&players);

        engine.apply_turn_result(&mut players, 500);
        engine.apply_turn_result(&mut players, 0);

        assert_eq!(players[PlayerId::new(1)].score, 0);
        assert!(!players[PlayerId::new(1)].on_board);
        assert_eq!(engine.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_engine_trusts_sub_threshold_bank() {
        let mut players = seated(&["Alice", "Bob"]);
        let mut engine = engine_for(&players);

        assert!(!engine.can_bank(&players, 250));
        engine.apply_turn_result(&mut players, 250);

        assert_eq!(players[PlayerId::new(0)].score, 250);
        assert!(!players[PlayerId::new(0)].on_board);
    }

    #[test]
    fn test_can_bank_once_on_board() {
        let mut players = seated(&["Alice", "Bob"]);
        players[PlayerId::new(0)].on_board = true;
        let engine = engine_for(&players);

        assert!(engine.can_bank(&players, 50));
        assert!(engine.can_bank(&players, 0));
    }

    #[test]
    fn test_scores_kept_separately() {
        let mut players = seated(&["Alice", "Bob", "Charlie"]);
        let mut engine = engine_for(&players);

        engine.apply_turn_result(&mut players, 600);
        engine.apply_turn_result(&mut players, 700);
        engine.apply_turn_result(&mut players, 800);
        engine.apply_turn_result(&mut players, 50);

        assert_eq!(players[PlayerId::new(0)].score, 650);
        assert_eq!(players[PlayerId::new(1)].score, 700);
        assert_eq!(players[PlayerId::new(2)].score, 800);
        assert_eq!(engine.session().history().len(), 4);
    }

    #[test]
    fn test_next_player_cycles() {
        let players = seated(&["Alice", "Bob", "Charlie"]);
        let mut engine = engine_for(&players);

        for _ in 0..10 {
            engine.next_player();
        }

        assert_eq!(engine.current_player(), PlayerId::new(1));
        assert_eq!(engine.session().total_turns(), 10);
    }

    #[test]
    fn test_last_round_then_game_over() {
        let mut players = PlayerRegistry::from(vec![
            Player { name: "Alice".into(), score: 9500, on_board: true, wins: 0 },
            Player { name: "Bob".into(), score: 2000, on_board: true, wins: 0 },
            Player { name: "Charlie".into(), score: 8000, on_board: true, wins: 0 },
        ]);
        let mut engine = engine_for(&players);

        let outcome = engine.apply_turn_result(&mut players, 1000);
        assert_eq!(
            outcome,
            TurnOutcome::LastRoundStarted { leader: PlayerId::new(0), next: PlayerId::new(1) }
        );
        assert_eq!(engine.phase(), GamePhase::LastRound);
        assert!(engine.winner(&players).is_none());

        engine.apply_turn_result(&mut players, 0);
        let outcome = engine.apply_turn_result(&mut players, 0);

        assert_eq!(
            outcome,
            TurnOutcome::Finished(GameResult::Winner {
                winner: PlayerId::new(0),
                loser: PlayerId::new(1),
            })
        );
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(&players), Some(PlayerId::new(0)));
        assert_eq!(engine.loser(&players), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_last_seat_reaching_target_ends_immediately() {
        let mut players = seated(&["Alice", "Bob"]);
        players[PlayerId::new(1)].score = 9800;
        players[PlayerId::new(1)].on_board = true;
        let mut engine = engine_for(&players);

        engine.apply_turn_result(&mut players, 0);
        let outcome = engine.apply_turn_result(&mut players, 300);

        assert!(matches!(outcome, TurnOutcome::Finished(ref r) if r.is_winner(PlayerId::new(1))));
    }

    #[test]
    fn test_turns_after_game_over_ignored() {
        let mut players = seated(&["Alice", "Bob"]);
        let mut engine = GameEngine::new(FarkleConfig::new().with_target_score(500), 2, None);

        engine.apply_turn_result(&mut players, 600);
        engine.apply_turn_result(&mut players, 0);
        assert!(engine.is_game_over());

        let outcome = engine.apply_turn_result(&mut players, 5000);

        assert_eq!(outcome, TurnOutcome::Ignored);
        assert_eq!(players[PlayerId::new(0)].score, 600);
        assert_eq!(engine.session().total_turns(), 2);
    }

    #[test]
    fn test_tie_enters_tie_breaker() {
        let mut players = seated(&["Alice", "Bob", "Charlie"]);
        let mut engine = GameEngine::new(FarkleConfig::new().with_target_score(1000), 3, None);

        engine.apply_turn_result(&mut players, 1000);
        engine.apply_turn_result(&mut players, 1000);
        let outcome = engine.apply_turn_result(&mut players, 500);

        let TurnOutcome::Finished(GameResult::TieBreak { tied, loser }) = outcome else {
            panic!("expected tie-breaker, got {:?}", outcome);
        };
        assert_eq!(tied.as_slice(), &[PlayerId::new(0), PlayerId::new(1)]);
        assert_eq!(loser, PlayerId::new(2));
        assert_eq!(engine.phase(), GamePhase::TieBreaker);
        assert!(engine.winner(&players).is_none());

        let result = engine.select_tie_breaker_winner(&players, PlayerId::new(1));

        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(engine.phase(), GamePhase::Over);
        assert_eq!(engine.winner(&players), Some(PlayerId::new(1)));
        assert!(engine.session().tied_players().is_empty());
    }

    #[test]
    #[should_panic(expected = "No tie-breaker pending")]
    fn test_select_without_tie_panics() {
        let players = seated(&["Alice", "Bob"]);
        let mut engine = engine_for(&players);
        engine.select_tie_breaker_winner(&players, PlayerId::new(0));
    }
}
