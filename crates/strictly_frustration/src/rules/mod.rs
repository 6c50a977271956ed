//! Movement rules.
//!
//! [`BaseRule`] performs the move. Decorators wrap another rule and may
//! forfeit the turn before it runs; when their own condition does not
//! trigger they delegate unchanged. Wrapping order is chosen by the caller.

pub mod base;
pub mod exact_end;
pub mod forfeit_on_hit;

pub use base::BaseRule;
pub use exact_end::ExactEnd;
pub use forfeit_on_hit::ForfeitOnHit;

use crate::board::Board;
use crate::error::ContractError;
use crate::hit::Opponents;
use crate::outcome::MoveOutcome;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Computes the outcome of a roll for the moving player.
///
/// Only the rule layer that performs the move may change `mover`'s
/// progress. Turn counting belongs to the game lifecycle, not to rules.
pub trait MovementRule: std::fmt::Debug {
    /// Applies the roll, returning what happened.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractError`] if a progress value leaves the board.
    fn apply(
        &self,
        board: &Board,
        mover: &mut Player,
        roll: u32,
        opponents: Opponents<'_>,
    ) -> Result<MoveOutcome, ContractError>;
}

impl<R: MovementRule + ?Sized> MovementRule for Box<R> {
    fn apply(
        &self,
        board: &Board,
        mover: &mut Player,
        roll: u32,
        opponents: Opponents<'_>,
    ) -> Result<MoveOutcome, ContractError> {
        (**self).apply(board, mover, roll, opponents)
    }
}

/// Destination after a roll, clamped to the end square.
///
/// Returns `(destination, overshoot)`.
pub(crate) fn clamped_destination(board: &Board, from: u32, roll: u32) -> (u32, bool) {
    let end = board.end_progress();
    let raw = from.saturating_add(roll);
    (raw.min(end), raw > end)
}

/// Which decorator runs first when both are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoratorOrder {
    /// Overshoot is checked before hits.
    #[default]
    ExactEndOutermost,
    /// Hits are checked before overshoot.
    ForfeitOnHitOutermost,
}

/// Rule variant flags, translated into a decorator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Forfeit the turn instead of clamping an overshoot.
    pub exact_end: bool,
    /// Forfeit the turn instead of landing on another player.
    pub forfeit_on_hit: bool,
    /// Wrapping order when both variants are enabled.
    pub order: DecoratorOrder,
}

impl RuleSet {
    /// Basic rules: overshoot clamps to the end, hits are allowed.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Builds the rule chain for these flags.
    #[instrument]
    pub fn build(&self) -> Box<dyn MovementRule> {
        let exact_end = |rule: Box<dyn MovementRule>| -> Box<dyn MovementRule> {
            if self.exact_end {
                Box::new(ExactEnd::new(rule))
            } else {
                rule
            }
        };
        let forfeit_on_hit = |rule: Box<dyn MovementRule>| -> Box<dyn MovementRule> {
            if self.forfeit_on_hit {
                Box::new(ForfeitOnHit::new(rule))
            } else {
                rule
            }
        };

        let base: Box<dyn MovementRule> = Box::new(BaseRule);
        match self.order {
            DecoratorOrder::ExactEndOutermost => exact_end(forfeit_on_hit(base)),
            DecoratorOrder::ForfeitOnHitOutermost => forfeit_on_hit(exact_end(base)),
        }
    }
}
