//! Event notifications for state changes, turns, and the finish.
//!
//! Observers are registered on a [`Game`](crate::Game) and notified
//! synchronously, in registration order, on the thread that drives the
//! match. Closures work as observers through blanket impls.

use crate::lifecycle::Phase;
use crate::outcome::MoveOutcome;
use crate::player::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

// ─────────────────────────────────────────────────────────────
// Event payloads
// ─────────────────────────────────────────────────────────────

/// Final tallies delivered once, when a player reaches the end square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct FinishSummary {
    /// Name of the winning player, if any.
    pub winner: Option<String>,
    /// Effective turns across all players.
    pub total_turns: u32,
    /// Effective turns taken by the winner.
    pub winner_turns: u32,
}

/// A single notification, as captured by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The lifecycle phase changed.
    StateChanged {
        /// Phase before the change.
        from: Phase,
        /// Phase after the change.
        to: Phase,
    },
    /// A turn was executed, forfeits included.
    TurnPlayed {
        /// What happened.
        outcome: MoveOutcome,
        /// The mover, after the move.
        player: Player,
    },
    /// The match finished.
    Finished(FinishSummary),
}

// ─────────────────────────────────────────────────────────────
// Observer traits
// ─────────────────────────────────────────────────────────────

/// Notified on every lifecycle phase change.
pub trait StateObserver {
    /// Called after the phase moved from `from` to `to`.
    fn on_state_changed(&mut self, from: Phase, to: Phase);
}

/// Notified after every executed turn.
pub trait TurnObserver {
    /// Called with the recorded outcome and the mover's updated state.
    fn on_turn_played(&mut self, outcome: &MoveOutcome, player: &Player);
}

/// Notified once when the match finishes.
pub trait FinishObserver {
    /// Called with the final tallies.
    fn on_game_finished(&mut self, summary: &FinishSummary);
}

impl<F: FnMut(Phase, Phase)> StateObserver for F {
    fn on_state_changed(&mut self, from: Phase, to: Phase) {
        self(from, to)
    }
}

impl<F: FnMut(&MoveOutcome, &Player)> TurnObserver for F {
    fn on_turn_played(&mut self, outcome: &MoveOutcome, player: &Player) {
        self(outcome, player)
    }
}

impl<F: FnMut(&FinishSummary)> FinishObserver for F {
    fn on_game_finished(&mut self, summary: &FinishSummary) {
        self(summary)
    }
}

// ─────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────

/// Registered observers, one list per event kind.
#[derive(Default)]
pub(crate) struct Observers {
    state: Vec<Box<dyn StateObserver>>,
    turn: Vec<Box<dyn TurnObserver>>,
    finish: Vec<Box<dyn FinishObserver>>,
}

impl Observers {
    pub(crate) fn add_state(&mut self, observer: Box<dyn StateObserver>) {
        self.state.push(observer);
    }

    pub(crate) fn add_turn(&mut self, observer: Box<dyn TurnObserver>) {
        self.turn.push(observer);
    }

    pub(crate) fn add_finish(&mut self, observer: Box<dyn FinishObserver>) {
        self.finish.push(observer);
    }

    pub(crate) fn notify_state(&mut self, from: Phase, to: Phase) {
        trace!(%from, %to, observers = self.state.len(), "Notifying state change");
        for observer in &mut self.state {
            observer.on_state_changed(from, to);
        }
    }

    pub(crate) fn notify_turn(&mut self, outcome: &MoveOutcome, player: &Player) {
        trace!(observers = self.turn.len(), "Notifying turn");
        for observer in &mut self.turn {
            observer.on_turn_played(outcome, player);
        }
    }

    pub(crate) fn notify_finish(&mut self, summary: &FinishSummary) {
        trace!(observers = self.finish.len(), "Notifying finish");
        for observer in &mut self.finish {
            observer.on_game_finished(summary);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("state", &self.state.len())
            .field("turn", &self.turn.len())
            .field("finish", &self.finish.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────
// Event log
// ─────────────────────────────────────────────────────────────

/// Observer that records every event it sees.
///
/// Clones share one buffer, so a clone can be handed to the game while the
/// original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured events, oldest first.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of captured events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was captured yet.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl StateObserver for EventLog {
    fn on_state_changed(&mut self, from: Phase, to: Phase) {
        self.push(GameEvent::StateChanged { from, to });
    }
}

impl TurnObserver for EventLog {
    fn on_turn_played(&mut self, outcome: &MoveOutcome, player: &Player) {
        self.push(GameEvent::TurnPlayed {
            outcome: outcome.clone(),
            player: player.clone(),
        });
    }
}

impl FinishObserver for EventLog {
    fn on_game_finished(&mut self, summary: &FinishSummary) {
        self.push(GameEvent::Finished(summary.clone()));
    }
}
