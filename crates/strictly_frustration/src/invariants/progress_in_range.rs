//! Progress range invariant: every player stays on the board.

use super::Invariant;
use crate::game::Game;

/// Invariant: every player's progress lies in `[0, end_progress]`.
pub struct ProgressInRangeInvariant;

impl<D> Invariant<Game<D>> for ProgressInRangeInvariant {
    fn holds(game: &Game<D>) -> bool {
        let end = game.board().end_progress();
        game.players().iter().all(|p| p.progress() <= end)
    }

    fn description() -> &'static str {
        "Every player's progress lies between home and the end square"
    }
}
