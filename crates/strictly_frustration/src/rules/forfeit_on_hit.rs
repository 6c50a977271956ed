//! Forfeit-on-hit variant: a player may not land on an occupied ring square.

use super::{MovementRule, clamped_destination};
use crate::board::Board;
use crate::error::ContractError;
use crate::hit::{self, Opponents};
use crate::outcome::MoveOutcome;
use crate::player::Player;
use tracing::{debug, instrument};

/// Forfeits any roll whose clamped destination is occupied; otherwise delegates.
///
/// The forfeited outcome still names the player who would have been hit.
#[derive(Debug, Clone)]
pub struct ForfeitOnHit<R> {
    inner: R,
}

impl<R: MovementRule> ForfeitOnHit<R> {
    /// Wraps a rule.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: MovementRule> MovementRule for ForfeitOnHit<R> {
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
        let (candidate, _) = clamped_destination(board, from, roll);

        if let Some(victim) = hit::detect(board, mover, candidate, opponents)?.into_victim() {
            debug!(from, candidate, victim = %victim.name(), "Hit, turn forfeited");
            return Ok(MoveOutcome::hit_forfeit(mover.name(), roll, from, victim));
        }
        self.inner.apply(board, mover, roll, opponents)
    }
}
