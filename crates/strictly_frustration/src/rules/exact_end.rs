//! Exact-end variant: the end square must be reached exactly.

use super::MovementRule;
use crate::board::Board;
use crate::error::ContractError;
use crate::hit::Opponents;
use crate::outcome::MoveOutcome;
use crate::player::Player;
use tracing::{debug, instrument};

/// Forfeits any roll that would pass the end square; otherwise delegates.
#[derive(Debug, Clone)]
pub struct ExactEnd<R> {
    inner: R,
}

impl<R: MovementRule> ExactEnd<R> {
    /// Wraps a rule.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: MovementRule> MovementRule for ExactEnd<R> {
    #[instrument(skip(self, board, mover, opponents), fields(player = %mover.name()))]
    fn apply(
        &self,
        board: &Board,
        mover: &mut Player,
        roll: u32,
        opponents: Opponents<'_>,
    ) -> Result<MoveOutcome, ContractError> {
        let from = mover.progress();
        board.validate_progress(from)?;
        if from.saturating_add(roll) > board.end_progress() {
            debug!(from, roll, "Overshoot, turn forfeited");
            return Ok(MoveOutcome::overshoot_forfeit(mover.name(), roll, from));
        }
        self.inner.apply(board, mover, roll, opponents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::BaseRule;

    fn board() -> Board {
        Board::new(18, 3).unwrap()
    }

    #[test]
    fn test_overshoot_forfeits() {
        let mut red = Player::new("Red", 1, "R").unwrap();
        red.set_progress(19);
        let outcome = ExactEnd::new(BaseRule)
            .apply(&board(), &mut red, 5, Opponents::default())
            .unwrap();
        assert_eq!(outcome.to_progress(), outcome.from_progress());
        assert!(outcome.overshoot());
        assert!(!outcome.won());
        assert!(outcome.is_forfeited());
        assert_eq!(red.progress(), 19);
    }

    #[test]
    fn test_exact_roll_wins() {
        let mut red = Player::new("Red", 1, "R").unwrap();
        red.set_progress(19);
        let outcome = ExactEnd::new(BaseRule)
            .apply(&board(), &mut red, 1, Opponents::default())
            .unwrap();
        assert!(outcome.won());
        assert_eq!(red.progress(), 20);
    }

    #[test]
    fn test_transparent_when_not_overshooting() {
        let mut plain = Player::new("Red", 1, "R").unwrap();
        let mut wrapped = plain.clone();
        let expected = BaseRule
            .apply(&board(), &mut plain, 7, Opponents::default())
            .unwrap();
        let actual = ExactEnd::new(BaseRule)
            .apply(&board(), &mut wrapped, 7, Opponents::default())
            .unwrap();
        assert_eq!(actual, expected);
        assert_eq!(plain, wrapped);
    }
}
