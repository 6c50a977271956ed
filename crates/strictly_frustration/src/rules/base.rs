//! The rule that actually moves pieces.

use super::{MovementRule, clamped_destination};
use crate::board::Board;
use crate::error::ContractError;
use crate::hit::{self, Opponents};
use crate::outcome::MoveOutcome;
use crate::player::Player;
use tracing::{debug, instrument};

/// Basic movement.
///
/// - An overshoot clamps to the end square and still wins.
/// - Landing on another player is allowed and reported as a hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseRule;

impl MovementRule for BaseRule {
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
        let (to, overshoot) = clamped_destination(board, from, roll);

        let hit = hit::detect(board, mover, to, opponents)?;
        mover.set_progress(to);
        let won = to == board.end_progress();

        debug!(from, to, overshoot, won, hit = hit.occurred(), "Moved");
        Ok(MoveOutcome::moved(
            mover.name(),
            roll,
            from,
            to,
            overshoot,
            won,
            hit.into_victim(),
        ))
    }
}
