//! Append-only history of executed turns.

use crate::outcome::MoveOutcome;
use serde::{Deserialize, Serialize};

/// Every outcome produced by the lifecycle, in execution order.
///
/// Forfeited turns are recorded; the finished-game sentinel is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    outcomes: Vec<MoveOutcome>,
}

impl GameRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, outcome: MoveOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes in execution order.
    pub fn outcomes(&self) -> &[MoveOutcome] {
        &self.outcomes
    }

    /// The most recent outcome.
    pub fn last(&self) -> Option<&MoveOutcome> {
        self.outcomes.last()
    }

    /// Number of executed turns, forfeits included.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True before the first turn.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Turns attempted by a player, forfeits included.
    pub fn attempts_by(&self, player: &str) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.player() == player)
            .count()
    }

    /// Effective (non-forfeited) turns taken by a player.
    pub fn turns_by(&self, player: &str) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.player() == player && !o.is_forfeited())
            .count()
    }

    /// Effective turns across all players.
    pub fn total_turns(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_forfeited()).count()
    }

    /// Number of forfeited turns.
    pub fn forfeits(&self) -> usize {
        self.len() - self.total_turns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Victim;

    #[test]
    fn test_turn_counts_exclude_forfeits() {
        let mut record = GameRecord::new();
        record.push(MoveOutcome::moved("Red", 4, 0, 4, false, false, None));
        record.push(MoveOutcome::hit_forfeit("Blue", 3, 0, Victim::new("Red".into(), 4)));
        record.push(MoveOutcome::moved("Red", 2, 4, 6, false, false, None));
        record.push(MoveOutcome::overshoot_forfeit("Blue", 12, 10));

        assert_eq!(record.len(), 4);
        assert_eq!(record.attempts_by("Blue"), 2);
        assert_eq!(record.turns_by("Blue"), 0);
        assert_eq!(record.turns_by("Red"), 2);
        assert_eq!(record.total_turns(), 2);
        assert_eq!(record.forfeits(), 2);
    }
}
