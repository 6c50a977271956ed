//! Match lifecycle: phases and turn execution.
//!
//! A match goes `NotStarted -> InProgress -> Finished`. The first requested
//! turn starts it; the turn that lands a player on the end square finishes
//! it. Once finished, further turns yield the terminal sentinel without
//! touching any state.

use crate::dice::DiceSource;
use crate::error::GameError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::observer::FinishSummary;
use crate::outcome::MoveOutcome;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, error, info, instrument};

/// Lifecycle phase of a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Phase {
    /// No turn has been requested yet.
    #[default]
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// A player reached the end square.
    Finished,
}

impl Phase {
    /// True once no more moves can happen.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl<D: DiceSource> Game<D> {
    /// Plays one turn for the current player.
    ///
    /// Rolls the dice, applies the movement rule, records the outcome,
    /// checks consistency, and notifies observers. Forfeited turns are
    /// recorded and consume the slot but do not count as turns taken.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Contract`] or [`GameError::InvariantViolation`]
    /// on an internal consistency failure. Either aborts the match, and
    /// every later call returns [`GameError::Aborted`].
    #[instrument(skip(self), fields(phase = %self.phase, turn = self.record.len() + 1))]
    pub fn play_turn(&mut self) -> Result<MoveOutcome, GameError> {
        if self.aborted {
            return Err(GameError::Aborted);
        }

        match self.phase {
            Phase::NotStarted => {
                self.transition(Phase::InProgress);
                self.execute_turn()
            }
            Phase::InProgress => self.execute_turn(),
            Phase::Finished => {
                debug!("Match already finished, returning terminal sentinel");
                Ok(MoveOutcome::terminal())
            }
        }
    }

    /// Plays turns until the match finishes or `limit` turns were played.
    ///
    /// Returns the number of turns played by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal error from [`Game::play_turn`].
    #[instrument(skip(self))]
    pub fn play_to_finish(&mut self, limit: Option<usize>) -> Result<usize, GameError> {
        let mut played = 0;
        while !self.is_over() && limit.is_none_or(|max| played < max) {
            self.play_turn()?;
            played += 1;
        }
        info!(played, finished = self.is_over(), "Stopped playing");
        Ok(played)
    }

    fn execute_turn(&mut self) -> Result<MoveOutcome, GameError> {
        let result = self.try_execute_turn();
        if let Err(err) = &result {
            error!(error = %err, "Fatal error, aborting match");
            self.aborted = true;
        }
        result
    }

    fn try_execute_turn(&mut self) -> Result<MoveOutcome, GameError> {
        let roll = self.dice.roll();
        let Some((mover, opponents)) = self.turn_order.split_current() else {
            return Err(GameError::InvariantViolation(
                "Turn index lies outside the roster".to_string(),
            ));
        };
        let outcome = self.rule.apply(&self.board, mover, roll, opponents)?;

        self.record.push(outcome.clone());
        if !outcome.is_forfeited() {
            mover.count_turn();
        }
        debug!(
            player = %outcome.player(),
            roll,
            from = outcome.from_progress(),
            to = outcome.to_progress(),
            note = %outcome.note(),
            "Turn recorded"
        );

        self.check_invariants()?;
        self.observers
            .notify_turn(&outcome, self.turn_order.current());

        if outcome.won() {
            info!(winner = %outcome.player(), "Player reached the end square");
            self.transition(Phase::Finished);
            let summary = self.summary(outcome.player());
            self.observers.notify_finish(&summary);
        } else {
            self.turn_order.advance();
        }

        Ok(outcome)
    }

    fn check_invariants(&self) -> Result<(), GameError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            GameError::InvariantViolation(descriptions.join("; "))
        })
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        self.phase = to;
        info!(%from, %to, "Phase changed");
        self.observers.notify_state(from, to);
    }

    fn summary(&self, winner: &str) -> FinishSummary {
        FinishSummary::new(
            Some(winner.to_string()),
            self.total_turns(),
            self.player(winner).map_or(0, |p| p.turns_taken()),
        )
    }
}
