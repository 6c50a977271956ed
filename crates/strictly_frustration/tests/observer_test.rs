//! Tests for event delivery to observers.

mod common;

use common::{basic_game, init_logging};
use std::cell::RefCell;
use std::rc::Rc;
use strictly_frustration::{EventLog, FinishSummary, GameEvent, MoveOutcome, Phase, Player};

#[test]
fn test_event_order_over_full_match() {
    init_logging();
    let mut game = basic_game(vec![12, 12, 7, 8]);
    let log = EventLog::new();
    game.subscribe_all(log.clone());

    game.play_to_finish(None).unwrap();
    let events = log.events();

    assert_eq!(events.len(), 7);
    assert_eq!(
        events[0],
        GameEvent::StateChanged {
            from: Phase::NotStarted,
            to: Phase::InProgress
        }
    );
    assert!(
        events[1..5]
            .iter()
            .all(|e| matches!(e, GameEvent::TurnPlayed { .. }))
    );
    assert_eq!(
        events[5],
        GameEvent::StateChanged {
            from: Phase::InProgress,
            to: Phase::Finished
        }
    );
    assert_eq!(
        events[6],
        GameEvent::Finished(FinishSummary::new(Some("Blue".to_string()), 4, 2))
    );
}

#[test]
fn test_turn_event_carries_updated_player() {
    init_logging();
    let mut game = basic_game(vec![6]);
    let log = EventLog::new();
    game.subscribe_turn(log.clone());

    game.play_turn().unwrap();

    match &log.events()[0] {
        GameEvent::TurnPlayed { outcome, player } => {
            assert_eq!(outcome.player(), "Red");
            assert_eq!(player.name(), "Red");
            assert_eq!(player.progress(), 6);
            assert_eq!(player.turns_taken(), 1);
        }
        other => panic!("Expected a turn event, got {:?}", other),
    }
}

#[test]
fn test_sentinel_turns_emit_nothing() {
    init_logging();
    let mut game = basic_game(vec![12, 12, 7, 8]);
    game.play_to_finish(None).unwrap();

    let log = EventLog::new();
    game.subscribe_all(log.clone());
    game.play_turn().unwrap();

    assert!(log.is_empty());
}

#[test]
fn test_closure_observers() {
    init_logging();
    let mut game = basic_game(vec![12, 12, 7, 8]);

    let rolls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&rolls);
    game.on_turn_played(move |outcome: &MoveOutcome, _: &Player| {
        seen.borrow_mut().push(outcome.roll())
    });

    let winner = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&winner);
    game.on_game_finished(move |summary: &FinishSummary| {
        *slot.borrow_mut() = summary.winner.clone()
    });

    let phases = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&phases);
    game.on_state_changed(move |_, to| sink.borrow_mut().push(to));

    game.play_to_finish(None).unwrap();

    assert_eq!(*rolls.borrow(), vec![12, 12, 7, 8]);
    assert_eq!(winner.borrow().as_deref(), Some("Blue"));
    assert_eq!(*phases.borrow(), vec![Phase::InProgress, Phase::Finished]);
}

#[test]
fn test_observers_called_in_registration_order() {
    init_logging();
    let mut game = basic_game(vec![3]);
    let calls = Rc::new(RefCell::new(Vec::new()));

    for id in 0..3 {
        let calls = Rc::clone(&calls);
        game.on_turn_played(move |_: &MoveOutcome, _: &Player| calls.borrow_mut().push(id));
    }
    game.play_turn().unwrap();

    assert_eq!(*calls.borrow(), vec![0, 1, 2]);
}
