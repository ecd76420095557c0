//! Multi-game lifecycle: seating, starting, banking, ending, and replaying.
//!
//! `SessionController` is the surface a presentation layer drives. It owns
//! the player list, the pending turn, the current `GameEngine`, and the
//! injected `WinStore`. Every refused operation is a silent no-op that
//! reports what happened through its return value.

use tracing::{debug, info, warn};

use crate::core::{
    FarkleConfig, GamePhase, GameRng, Player, PlayerId, PlayerRegistry, Points, TurnAccumulator,
};
use crate::rules::{highest_score, roll_off, GameEngine, GameResult, TurnOutcome};
use crate::scoring::Combination;
use crate::store::{MemoryWinStore, WinStore, WinTable};

/// Why a bank was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankRejection {
    /// No game is running, or it has already ended.
    NoGameInProgress,
    /// The player is not on board and the turn total is short of the entry
    /// threshold. The pending points are kept so the player can roll on.
    BelowEntryThreshold { pending: Points, required: Points },
}

/// Result of a bank request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BankOutcome {
    /// Points banked and the turn ended.
    Banked(TurnOutcome),
    /// Nothing changed.
    Rejected(BankRejection),
}

/// Drives a table of players through any number of games.
///
/// ## Example
///
/// ```
/// use farkle_engine::scoring::Combination;
/// use farkle_engine::session::{BankOutcome, SessionController};
/// use farkle_engine::store::MemoryWinStore;
///
/// let mut session = SessionController::new(MemoryWinStore::new());
/// session.add_player("Alice");
/// session.add_player("Bob");
/// assert!(session.start_game());
///
/// session.score(Combination::TripleFives);
/// assert!(matches!(session.bank(), BankOutcome::Banked(_)));
/// assert_eq!(session.current_player_name(), Some("Bob"));
/// ```
#[derive(Debug)]
pub struct SessionController<S: WinStore = MemoryWinStore> {
    config: FarkleConfig,
    store: S,
    players: PlayerRegistry,
    turn: TurnAccumulator,
    started: bool,
    game: Option<GameEngine>,
    next_game_starting_player: Option<PlayerId>,
    game_key: u32,
    result_recorded: bool,
}

impl<S: WinStore> SessionController<S> {
    /// Controller with standard rules.
    pub fn new(store: S) -> Self {
        Self::with_config(FarkleConfig::default(), store)
    }

    /// Controller with custom rules.
    pub fn with_config(config: FarkleConfig, store: S) -> Self {
        Self {
            config,
            store,
            players: PlayerRegistry::new(),
            turn: TurnAccumulator::new(),
            started: false,
            game: None,
            next_game_starting_player: None,
            game_key: 0,
            result_recorded: false,
        }
    }

    // === Setup ===

    /// Seat a player, loading their win count from the store.
    ///
    /// Refused (returns `None`) for blank names or once a game has started.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        if self.started {
            debug!(name, "add_player refused during a game");
            return None;
        }
        let store = &self.store;
        let id = self.players.add_player(name, |trimmed| store.get(trimmed))?;
        debug!(player = %id, name = %self.players[id].name, wins = self.players[id].wins, "player seated");
        Some(id)
    }

    /// Remove a seated player. Refused once a game has started.
    pub fn remove_player(&mut self, player: PlayerId) -> Option<Player> {
        if self.started {
            debug!(player = %player, "remove_player refused during a game");
            return None;
        }
        self.players.remove_player(player)
    }

    /// Start a game.
    ///
    /// Needs at least `min_players` seated and no game already running.
    /// The first turn goes to the stored next starter when it is a valid
    /// seat, otherwise to the first seat.
    pub fn start_game(&mut self) -> bool {
        if self.started {
            debug!("start_game refused, game already started");
            return false;
        }
        if self.players.len() < self.config.min_players {
            debug!(
                players = self.players.len(),
                required = self.config.min_players,
                "start_game refused, not enough players"
            );
            return false;
        }
        self.started = true;
        self.begin_game();
        true
    }

    /// Leave the game and go back to seating ("change players").
    ///
    /// Scores and on-board flags are reset and the loser carry-over is
    /// dropped. Players and their wins stay.
    pub fn restart_game(&mut self) {
        info!("returning to player setup");
        self.players.reset_scores();
        self.turn.clear();
        self.started = false;
        self.game = None;
        self.next_game_starting_player = None;
        self.result_recorded = false;
    }

    /// Start a fresh game at the same table with `loser` going first.
    ///
    /// All per-game state is discarded. Stays in the started state. Refused
    /// (returns false, nothing changes) with fewer than `min_players` seated.
    pub fn play_again(&mut self, loser: PlayerId) -> bool {
        if self.players.len() < self.config.min_players {
            debug!(
                players = self.players.len(),
                required = self.config.min_players,
                "play_again refused, not enough players"
            );
            return false;
        }
        info!(starting_player = %loser, "play again");
        self.players.reset_scores();
        self.next_game_starting_player = Some(loser);
        self.started = true;
        self.game_key += 1;
        self.begin_game();
        true
    }

    fn begin_game(&mut self) {
        self.turn.clear();
        self.result_recorded = false;
        self.game = Some(GameEngine::new(
            self.config.clone(),
            self.players.len(),
            self.next_game_starting_player,
        ));
    }

    // === Turn actions ===

    /// Add a scoring combination to the pending turn.
    pub fn score(&mut self, combination: Combination) {
        self.add_points(combination.points());
    }

    /// Add raw points to the pending turn. Ignored when no game is running.
    pub fn add_points(&mut self, points: Points) {
        if self.game_in_progress() {
            self.turn.add(points);
        }
    }

    /// Bank the pending turn.
    ///
    /// Refused while the current player is off board and the pending total
    /// is below the entry threshold.
    pub fn bank(&mut self) -> BankOutcome {
        if !self.game_in_progress() {
            return BankOutcome::Rejected(BankRejection::NoGameInProgress);
        }
        let Some(game) = self.game.as_mut() else {
            return BankOutcome::Rejected(BankRejection::NoGameInProgress);
        };

        let pending = self.turn.total();
        if !game.can_bank(&self.players, pending) {
            let required = game.config().entry_threshold;
            debug!(pending, required, "bank refused, not on board");
            return BankOutcome::Rejected(BankRejection::BelowEntryThreshold { pending, required });
        }

        let banked = self.turn.clear();
        let outcome = game.apply_turn_result(&mut self.players, banked);
        self.handle_outcome(&outcome);
        BankOutcome::Banked(outcome)
    }

    /// Farkle: throw away the pending points and end the turn.
    ///
    /// Always accepted while a game is running.
    pub fn farkle(&mut self) -> TurnOutcome {
        if !self.game_in_progress() {
            return TurnOutcome::Ignored;
        }
        let Some(game) = self.game.as_mut() else {
            return TurnOutcome::Ignored;
        };

        let lost = self.turn.clear();
        debug!(player = %game.current_player(), lost, "farkle");
        let outcome = game.apply_turn_result(&mut self.players, 0);
        self.handle_outcome(&outcome);
        outcome
    }

    /// Pass the turn without scoring. Pending points are dropped.
    ///
    /// A pass is a zero-point turn: it is recorded like a farkle, so passing
    /// the last seat of the final round ends the game. Returns the seat now
    /// on turn.
    pub fn next_player(&mut self) -> Option<PlayerId> {
        if !self.game_in_progress() {
            return None;
        }
        let Some(game) = self.game.as_mut() else {
            return None;
        };

        self.turn.clear();
        let outcome = game.apply_turn_result(&mut self.players, 0);
        let current = game.current_player();
        self.handle_outcome(&outcome);
        Some(current)
    }

    fn handle_outcome(&mut self, outcome: &TurnOutcome) {
        if let TurnOutcome::Finished(GameResult::Winner { winner, loser }) = outcome {
            self.record_result(*winner, *loser);
        }
    }

    // === Ending a game ===

    /// Pick the winner of a pending tie-breaker.
    ///
    /// Returns `None` (and changes nothing) when no tie-breaker is pending.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the tied seats.
    pub fn select_tie_breaker_winner(&mut self, player: PlayerId) -> Option<GameResult> {
        let game = self.game.as_mut().filter(|g| g.session().in_tie_breaker())?;
        let result = game.select_tie_breaker_winner(&self.players, player);
        if let GameResult::Winner { winner, loser } = result {
            self.record_result(winner, loser);
        }
        Some(result)
    }

    /// Settle a pending tie-breaker with a dice roll-off.
    pub fn roll_off_tie(&mut self, rng: &mut GameRng) -> Option<PlayerId> {
        if !self.in_tie_breaker() {
            return None;
        }
        let winner = roll_off(self.tied_players(), rng);
        self.select_tie_breaker_winner(winner)?;
        Some(winner)
    }

    fn record_result(&mut self, winner: PlayerId, loser: PlayerId) {
        if self.result_recorded {
            return;
        }
        self.result_recorded = true;
        self.handle_game_end(Some(winner), Some(loser));
    }

    /// Credit a finished game.
    ///
    /// The winner (if any) gains a win and the record is saved. The loser
    /// (if given) starts the next game; without one the stored next starter
    /// is left alone. Unknown seats are ignored.
    pub fn handle_game_end(&mut self, winner: Option<PlayerId>, loser: Option<PlayerId>) {
        if let Some(player) = winner.and_then(|w| self.players.get_mut(w)) {
            player.wins += 1;
            info!(name = %player.name, wins = player.wins, "win recorded");
            self.persist_wins();
        }
        if let Some(loser) = loser.filter(|&l| self.players.contains(l)) {
            self.next_game_starting_player = Some(loser);
        }
    }

    /// Clear every stored win and zero the seated players' counts.
    pub fn reset_win_statistics(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to clear win record");
        }
        self.players.reset_wins();
        info!("win statistics reset");
    }

    /// Write the current win counts to the store.
    pub fn persist_wins(&mut self) {
        let table = WinTable::from_players(&self.players);
        if let Err(err) = self.store.set_all(&table) {
            warn!(%err, "failed to save win record");
        }
    }

    // === Observers ===

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &FarkleConfig {
        &self.config
    }

    /// Backing win store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the controller, handing back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Seated players.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The game in play, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameEngine> {
        self.game.as_ref()
    }

    /// Has a game been started (and not restarted back to setup)?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Bumped every time `play_again` recreates the game.
    #[must_use]
    pub fn game_key(&self) -> u32 {
        self.game_key
    }

    /// Seat that will start the next game, if one has been decided.
    #[must_use]
    pub fn next_game_starting_player(&self) -> Option<PlayerId> {
        self.next_game_starting_player
    }

    /// Unbanked points for the current turn.
    #[must_use]
    pub fn turn_total(&self) -> Points {
        self.turn.total()
    }

    /// Phase of the current game.
    #[must_use]
    pub fn phase(&self) -> Option<GamePhase> {
        self.game.as_ref().map(GameEngine::phase)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.game.as_ref().map(GameEngine::current_player)
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        let id = self.current_player()?;
        self.players.get(id).map(|p| p.name.as_str())
    }

    /// Has the current game's final round completed?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(GameEngine::is_game_over)
    }

    /// Is a tie-breaker pending?
    #[must_use]
    pub fn in_tie_breaker(&self) -> bool {
        self.game.as_ref().is_some_and(|g| g.session().in_tie_breaker())
    }

    /// Seats tied for first while a tie-breaker is pending.
    #[must_use]
    pub fn tied_players(&self) -> &[PlayerId] {
        self.game
            .as_ref()
            .map(|g| g.session().tied_players())
            .unwrap_or(&[])
    }

    /// Winner of the finished game; `None` during play or a pending tie.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.game.as_ref()?.winner(&self.players)
    }

    /// Loser of the finished game.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.game.as_ref()?.loser(&self.players)
    }

    /// Who would start a rematch of the finished game.
    #[must_use]
    pub fn next_starter_after_game(&self) -> Option<PlayerId> {
        self.loser()
    }

    /// Highest score at the table.
    #[must_use]
    pub fn highest_score(&self) -> Option<Points> {
        highest_score(&self.players)
    }

    fn game_in_progress(&self) -> bool {
        self.started && self.game.as_ref().is_some_and(|g| !g.is_game_over())
    }
}
