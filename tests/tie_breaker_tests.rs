//! Ties for first place at the end of the last round.

mod common;

use farkle_engine::core::{FarkleConfig, GamePhase, GameRng, PlayerId};
use farkle_engine::rules::{GameEngine, GameResult, TurnOutcome};
use farkle_engine::scoring::Combination;
use farkle_engine::session::{BankOutcome, SessionController};
use farkle_engine::store::{MemoryWinStore, WinStore};

use common::{seated, table};

/// Alice and Bob both bank 1000 in the first round.
fn tied_session() -> SessionController {
    let mut session = seated(
        FarkleConfig::new().with_target_score(1000),
        MemoryWinStore::new(),
        &["Alice", "Bob"],
    );
    assert!(session.start_game());

    session.score(Combination::FourOfAKind);
    assert!(matches!(session.bank(), BankOutcome::Banked(_)));
    session.score(Combination::FourOfAKind);
    let outcome = session.bank();
    assert!(matches!(
        outcome,
        BankOutcome::Banked(TurnOutcome::Finished(GameResult::TieBreak { .. }))
    ));
    session
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_tie_holds_the_result() {
    let session = tied_session();

    assert!(session.is_game_over());
    assert!(session.in_tie_breaker());
    assert_eq!(session.phase(), Some(GamePhase::TieBreaker));
    assert_eq!(session.tied_players(), &[PlayerId::new(0), PlayerId::new(1)]);
    assert_eq!(session.winner(), None);
    assert!(session.players().iter().all(|(_, p)| p.wins == 0));
    assert!(session.store().load().is_empty());
}

#[test]
fn test_select_tie_breaker_winner() {
    let mut session = tied_session();

    let result = session.select_tie_breaker_winner(PlayerId::new(1));

    assert_eq!(
        result,
        Some(GameResult::Winner {
            winner: PlayerId::new(1),
            loser: PlayerId::new(0),
        })
    );
    assert!(!session.in_tie_breaker());
    assert_eq!(session.phase(), Some(GamePhase::Over));
    assert_eq!(session.winner(), Some(PlayerId::new(1)));
    assert_eq!(session.players()[PlayerId::new(1)].wins, 1);
    assert_eq!(session.players()[PlayerId::new(0)].wins, 0);
    assert_eq!(session.next_game_starting_player(), Some(PlayerId::new(0)));
    assert_eq!(session.store().get("Bob"), 1);
}

#[test]
fn test_select_without_tie_is_ignored() {
    let mut session = seated(FarkleConfig::default(), MemoryWinStore::new(), &["Alice", "Bob"]);
    session.start_game();

    assert_eq!(session.select_tie_breaker_winner(PlayerId::new(0)), None);
    assert!(session.players().iter().all(|(_, p)| p.wins == 0));
}

#[test]
fn test_second_selection_is_ignored() {
    let mut session = tied_session();
    session.select_tie_breaker_winner(PlayerId::new(0));

    assert_eq!(session.select_tie_breaker_winner(PlayerId::new(1)), None);
    assert_eq!(session.winner(), Some(PlayerId::new(0)));
    assert_eq!(session.players()[PlayerId::new(0)].wins, 1);
    assert_eq!(session.players()[PlayerId::new(1)].wins, 0);
}

#[test]
fn test_roll_off_settles_tie() {
    let mut session = tied_session();
    let mut rng = GameRng::new(42);

    let winner = session.roll_off_tie(&mut rng).unwrap();

    assert!(winner == PlayerId::new(0) || winner == PlayerId::new(1));
    assert_eq!(session.winner(), Some(winner));
    assert_eq!(session.players()[winner].wins, 1);
    assert_eq!(session.roll_off_tie(&mut rng), None);
}

#[test]
fn test_roll_off_is_reproducible() {
    let first = tied_session().roll_off_tie(&mut GameRng::new(7));
    let second = tied_session().roll_off_tie(&mut GameRng::new(7));
    assert_eq!(first, second);
}

// =============================================================================
// Engine
// =============================================================================

#[test]
fn test_three_way_tie_with_trailing_loser() {
    let mut players = table(&[("Alice", 9000), ("Bob", 9500), ("Charlie", 200)]);
    let mut engine = GameEngine::new(FarkleConfig::default(), 3, None);

    engine.apply_turn_result(&mut players, 1500);
    engine.apply_turn_result(&mut players, 1000);
    let outcome = engine.apply_turn_result(&mut players, 0);

    match outcome {
        TurnOutcome::Finished(GameResult::TieBreak { tied, loser }) => {
            assert_eq!(tied.as_slice(), &[PlayerId::new(0), PlayerId::new(1)]);
            assert_eq!(loser, PlayerId::new(2));
        }
        other => panic!("expected a tie-break, got {:?}", other),
    }
    assert_eq!(engine.loser(&players), Some(PlayerId::new(2)));
}

#[test]
#[should_panic(expected = "is not tied for first place")]
fn test_selecting_untied_player_panics() {
    let mut players = table(&[("Alice", 9000), ("Bob", 9500), ("Charlie", 200)]);
    let mut engine = GameEngine::new(FarkleConfig::default(), 3, None);

    engine.apply_turn_result(&mut players, 1500);
    engine.apply_turn_result(&mut players, 1000);
    engine.apply_turn_result(&mut players, 0);

    engine.select_tie_breaker_winner(&players, PlayerId::new(2));
}

#[test]
#[should_panic(expected = "No tie-breaker pending")]
fn test_selecting_without_tie_panics_in_engine() {
    let players = table(&[("Alice", 0), ("Bob", 0)]);
    let mut engine = GameEngine::new(FarkleConfig::default(), 2, None);
    engine.select_tie_breaker_winner(&players, PlayerId::new(0));
}
