//! Turn count invariant: counters agree with the record.

use super::Invariant;
use crate::game::Game;

/// Invariant: each player's turn counter equals the number of
/// non-forfeited outcomes recorded for them.
pub struct TurnCountInvariant;

impl<D> Invariant<Game<D>> for TurnCountInvariant {
    fn holds(game: &Game<D>) -> bool {
        game.players()
            .iter()
            .all(|p| p.turns_taken() as usize == game.record().turns_by(p.name()))
    }

    fn description() -> &'static str {
        "Turn counters match effective turns in the record"
    }
}
