//! Game session integration tests.
//!
//! These tests drive a `GameSession` the way a UI does and check that
//! deck, board, hint and stats stay consistent.

use proptest::prelude::*;

use set_engine::cards::{Card, UNIVERSE_SIZE};
use set_engine::core::{EngineError, SessionConfig};
use set_engine::rules::{is_match, MatchTriple};
use set_engine::session::GameSession;
use set_engine::zones::Deck;

fn seeded(seed: u64) -> GameSession {
    GameSession::new(SessionConfig::new().with_seed(seed))
}

/// Session dealing from the unshuffled deck: board is atlas 80 down to 69.
fn ordered_session() -> GameSession {
    GameSession::with_deck(SessionConfig::new(), Deck::ordered())
}

/// Replace the board with twelve cards that contain no match.
fn stage_matchless_board(session: &mut GameSession) {
    let cap: Vec<_> = Card::universe()
        .filter(|c| c.attributes().iter().all(|&v| v < 2))
        .take(12)
        .collect();
    for (index, card) in cap.into_iter().enumerate() {
        session.set_card_at(index, card).unwrap();
    }
}

fn assert_consistent(session: &GameSession) {
    let stats = session.stats();
    assert_eq!(session.duplicate_card(), None);
    assert_eq!(
        session.board().len() + session.deck_size(),
        UNIVERSE_SIZE - 3 * stats.sets_found as usize
    );
    assert_eq!(stats.cards_dealt as usize, UNIVERSE_SIZE - session.deck_size());
}

// =============================================================================
// New Game
// =============================================================================

#[test]
fn test_new_session_state() {
    let session = seeded(1);
    let stats = session.stats();

    assert_eq!(session.board().len(), 12);
    assert_eq!(session.deck_size(), 69);
    assert_eq!(stats.cards_dealt, 12);
    assert_eq!(stats.sets_found, 0);
    assert_eq!(stats.hints_used, 0);
    assert_eq!(stats.elapsed_display(), "00:00");
    assert_consistent(&session);
}

#[test]
fn test_entropy_sessions_record_seed() {
    let session = GameSession::default();
    let seed = session.seed().expect("shuffled games have a seed");

    let replay = seeded(seed);
    assert_eq!(session.board(), replay.board());
}

#[test]
fn test_initial_deal_is_configurable() {
    let session = GameSession::new(SessionConfig::new().with_seed(5).with_initial_deal(15));

    assert_eq!(session.board().len(), 15);
    assert_eq!(session.stats().cards_dealt, 15);
}

// =============================================================================
// Hints
// =============================================================================

#[test]
fn test_hint_shows_first_match() {
    let mut session = ordered_session();

    assert!(session.toggle_hint());
    assert_eq!(session.hint().triple(), Some(MatchTriple([0, 1, 2])));
    assert_eq!(session.stats().hints_used, 1);

    let highlighted: Vec<_> = (0..session.board().len())
        .filter(|&i| session.is_hint_card(i))
        .collect();
    assert_eq!(highlighted, vec![0, 1, 2]);

    // Hiding does not count
    assert!(!session.toggle_hint());
    assert_eq!(session.stats().hints_used, 1);
    assert!(!session.is_hint_card(0));

    // Showing again counts again
    session.toggle_hint();
    assert_eq!(session.stats().hints_used, 2);
}

#[test]
fn test_hint_without_matches() {
    let mut session = seeded(9);
    stage_matchless_board(&mut session);
    assert!(session.find_all_matches().is_empty());

    assert!(session.toggle_hint());
    assert_eq!(session.hint().triple(), None);
    assert!(!session.toggle_hint());

    assert_eq!(session.stats().hints_used, 0);
    assert!((0..12).all(|i| !session.is_hint_card(i)));
}

#[test]
fn test_removal_hides_hint() {
    let mut session = ordered_session();
    session.toggle_hint();

    session.remove_match(0, 1, 2).unwrap();

    assert!(!session.hint().is_visible());
    assert!(!session.is_hint_card(0));
    assert_eq!(session.stats().hints_used, 1);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_remove_match_with_full_deck() {
    let mut session = seeded(3);
    let deck_before = session.deck_size();

    let replenished = session.remove_match(2, 7, 9).unwrap();

    assert_eq!(replenished, 3);
    assert_eq!(session.board().len(), 12);
    assert_eq!(session.deck_size(), deck_before - 3);
    assert_eq!(session.stats().sets_found, 1);
    assert!(!session.hint().is_visible());
    assert_consistent(&session);
}

#[test]
fn test_remove_preserves_order() {
    let mut session = ordered_session();
    let before = session.board().to_vec();

    session.remove_match(1, 4, 10).unwrap();

    let survivors: Vec<_> = before
        .iter()
        .enumerate()
        .filter(|(i, _)| ![1, 4, 10].contains(i))
        .map(|(_, &card)| card)
        .collect();
    assert_eq!(&session.board()[..9], survivors.as_slice());
}

#[test]
fn test_remove_with_empty_deck_shrinks_board() {
    let mut session = seeded(11);
    session.deal(UNIVERSE_SIZE);
    assert_eq!(session.deck_size(), 0);
    let board_before = session.board().len();

    assert_eq!(session.remove_match(0, 1, 2), Ok(0));
    assert_eq!(session.board().len(), board_before - 3);
    assert_eq!(session.stats().sets_found, 1);
}

#[test]
fn test_remove_rejects_out_of_bounds() {
    let mut session = seeded(4);

    assert_eq!(
        session.remove_match(0, 1, 99),
        Err(EngineError::IndexOutOfBounds { index: 99, len: 12 })
    );
    assert_eq!(session.remove_match(5, 6, 5), Err(EngineError::DuplicateIndex(5)));
    assert_eq!(session.board().len(), 12);
    assert_consistent(&session);
}

/// Play a whole game by always claiming the first match.
#[test]
fn test_play_to_completion() {
    let mut session = seeded(2024);
    let mut rounds = 0;

    loop {
        let matches = session.find_all_matches();
        match matches.first() {
            Some(triple) => {
                let [i, j, k] = triple.indices();
                assert!(session.claim_match(i, j, k).unwrap());
            }
            None if session.deck_size() > 0 => {
                assert_eq!(session.deal_three(), 3);
            }
            None => break,
        }
        assert_consistent(&session);

        rounds += 1;
        assert!(rounds < 200, "game should terminate");
    }

    assert_eq!(session.deck_size(), 0);
    assert!(session.stats().sets_found >= 20);
    assert!(session.board().len() <= 20);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Command {
    Deal(usize),
    ToggleHint,
    RemoveFirstMatch,
    RemoveAny(usize, usize, usize),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..6).prop_map(Command::Deal),
        Just(Command::ToggleHint),
        Just(Command::RemoveFirstMatch),
        (0usize..24, 0usize..24, 0usize..24).prop_map(|(i, j, k)| Command::RemoveAny(i, j, k)),
    ]
}

proptest! {
    #[test]
    fn prop_commands_keep_zones_consistent(seed in any::<u64>(), commands in prop::collection::vec(command(), 0..60)) {
        let mut session = seeded(seed);

        for command in commands {
            let before = session.stats();
            let cards_before = session.board().len() + session.deck_size();

            match command {
                Command::Deal(count) => {
                    let dealt = session.deal(count);
                    prop_assert!(dealt <= count);
                    prop_assert_eq!(session.stats().cards_dealt, before.cards_dealt + dealt as u32);
                }
                Command::ToggleHint => {
                    let visible = session.toggle_hint();
                    let used = session.stats().hints_used - before.hints_used;
                    prop_assert!(used <= 1);
                    if !visible {
                        prop_assert_eq!(used, 0);
                    }
                }
                Command::RemoveFirstMatch => {
                    if let Some(triple) = session.find_all_matches().first().copied() {
                        let [i, j, k] = triple.indices();
                        let board = session.board();
                        prop_assert!(is_match(&board[i], &board[j], &board[k]));
                        session.remove_match(i, j, k).unwrap();
                        prop_assert_eq!(session.board().len() + session.deck_size(), cards_before - 3);
                    }
                }
                Command::RemoveAny(i, j, k) => {
                    let removed = session.remove_match(i, j, k).is_ok();
                    let expected = if removed { cards_before - 3 } else { cards_before };
                    prop_assert_eq!(session.board().len() + session.deck_size(), expected);
                    if removed {
                        prop_assert!(!session.hint().is_visible());
                    }
                }
            }

            prop_assert_eq!(session.duplicate_card(), None);
            prop_assert!(session.stats().sets_found >= before.sets_found);
            prop_assert!(session.stats().hints_used >= before.hints_used);
        }
    }
}
