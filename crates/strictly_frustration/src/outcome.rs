//! Move outcomes: the immutable record of what a single turn did.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Note attached to the sentinel returned once the match is finished.
pub const TERMINAL_NOTE: &str = "terminal";

/// A player found standing on the square another player landed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Victim {
    name: String,
    position: u32,
}

impl Victim {
    /// Name of the player that was hit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute ring square where the hit happened.
    pub fn position(&self) -> u32 {
        self.position
    }
}

/// Result of applying a movement rule for one turn.
///
/// A turn is *forfeited* when the player did not move and either an
/// overshoot or a hit was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    player: String,
    roll: u32,
    from: u32,
    to: u32,
    overshoot: bool,
    won: bool,
    note: String,
    victim: Option<Victim>,
}

impl MoveOutcome {
    /// A move that took effect.
    pub fn moved(
        player: impl Into<String>,
        roll: u32,
        from: u32,
        to: u32,
        overshoot: bool,
        won: bool,
        victim: Option<Victim>,
    ) -> Self {
        Self {
            player: player.into(),
            roll,
            from,
            to,
            overshoot,
            won,
            note: String::new(),
            victim,
        }
    }

    /// A turn forfeited because the roll would pass the end square.
    pub fn overshoot_forfeit(player: impl Into<String>, roll: u32, from: u32) -> Self {
        Self {
            player: player.into(),
            roll,
            from,
            to: from,
            overshoot: true,
            won: false,
            note: String::new(),
            victim: None,
        }
    }

    /// A turn forfeited because the move would land on another player.
    pub fn hit_forfeit(player: impl Into<String>, roll: u32, from: u32, victim: Victim) -> Self {
        Self {
            player: player.into(),
            roll,
            from,
            to: from,
            overshoot: false,
            won: false,
            note: String::new(),
            victim: Some(victim),
        }
    }

    /// Sentinel returned for turns requested after the match finished.
    pub fn terminal() -> Self {
        Self {
            player: "N/A".to_string(),
            roll: 0,
            from: 0,
            to: 0,
            overshoot: false,
            won: false,
            note: TERMINAL_NOTE.to_string(),
            victim: None,
        }
    }

    /// Name of the player who took the turn.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The dice roll used.
    pub fn roll(&self) -> u32 {
        self.roll
    }

    /// Progress before the turn.
    pub fn from_progress(&self) -> u32 {
        self.from
    }

    /// Progress after the turn.
    pub fn to_progress(&self) -> u32 {
        self.to
    }

    /// True when the move landed on (or would have landed on) another player.
    pub fn hit(&self) -> bool {
        self.victim.is_some()
    }

    /// True when `from + roll` passed the end square.
    pub fn overshoot(&self) -> bool {
        self.overshoot
    }

    /// True when the move reached the end square.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Free-text note; [`TERMINAL_NOTE`] marks the finished-game sentinel.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// The player who was hit, if any.
    pub fn victim(&self) -> Option<&Victim> {
        self.victim.as_ref()
    }

    /// True when the player stayed put and an overshoot or hit was reported.
    ///
    /// A clamped overshoot from the end square counts as forfeited even
    /// though it still wins.
    pub fn is_forfeited(&self) -> bool {
        self.from == self.to && (self.overshoot || self.hit())
    }

    /// True for the finished-game sentinel.
    pub fn is_terminal(&self) -> bool {
        self.note == TERMINAL_NOTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_predicate() {
        assert!(MoveOutcome::overshoot_forfeit("Red", 6, 17).is_forfeited());
        assert!(MoveOutcome::hit_forfeit("Red", 3, 0, Victim::new("Blue".into(), 4)).is_forfeited());
        // Clamped overshoot that still moved is not a forfeit.
        assert!(!MoveOutcome::moved("Red", 5, 19, 20, true, true, None).is_forfeited());
        // Landing on a player is only a forfeit if the mover stayed put.
        let hit = MoveOutcome::moved("Red", 3, 0, 3, false, false, Some(Victim::new("Blue".into(), 4)));
        assert!(hit.hit());
        assert!(!hit.is_forfeited());
    }

    #[test]
    fn test_overshoot_from_end_square_is_forfeited_and_won() {
        let outcome = MoveOutcome::moved("Red", 3, 20, 20, true, true, None);
        assert!(outcome.won());
        assert!(outcome.is_forfeited());
    }

    #[test]
    fn test_terminal_sentinel_is_zeroed() {
        let sentinel = MoveOutcome::terminal();
        assert!(sentinel.is_terminal());
        assert_eq!(sentinel.note(), "terminal");
        assert_eq!((sentinel.roll(), sentinel.from_progress(), sentinel.to_progress()), (0, 0, 0));
        assert!(!sentinel.won());
        assert!(!sentinel.is_forfeited());
    }
}
