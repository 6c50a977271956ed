//! Hit detection on the shared ring.
//!
//! Tails are private, so only ring squares can be shared. Several players
//! may stand on the same ring square; detection reports the first one in
//! roster order.

use crate::board::Board;
use crate::error::ContractError;
use crate::outcome::Victim;
use crate::player::Player;
use tracing::{debug, instrument};

/// Read-only view of every player except the one moving, in roster order.
///
/// The roster is split around the mover so the mover can be mutated while
/// the rest stay shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Opponents<'a> {
    before: &'a [Player],
    after: &'a [Player],
}

impl<'a> Opponents<'a> {
    /// A view over an explicit list of opponents.
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            before: players,
            after: &[],
        }
    }

    /// A view over the players on either side of the mover.
    pub fn around(before: &'a [Player], after: &'a [Player]) -> Self {
        Self { before, after }
    }

    /// Iterates opponents in roster order.
    pub fn iter(self) -> impl Iterator<Item = &'a Player> {
        self.before.iter().chain(self.after.iter())
    }

    /// Number of opponents.
    pub fn len(self) -> usize {
        self.before.len() + self.after.len()
    }

    /// True for a single-player game.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Result of a hit check. Built fresh per check and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitInfo {
    victim: Option<Victim>,
}

impl HitInfo {
    /// No player was found on the target square.
    pub fn miss() -> Self {
        Self { victim: None }
    }

    /// A player was found on the target square.
    pub fn hit(victim: Victim) -> Self {
        Self {
            victim: Some(victim),
        }
    }

    /// True when a hit occurred.
    pub fn occurred(&self) -> bool {
        self.victim.is_some()
    }

    /// The player that was hit.
    pub fn victim(&self) -> Option<&Victim> {
        self.victim.as_ref()
    }

    /// Consumes the info, returning the victim.
    pub fn into_victim(self) -> Option<Victim> {
        self.victim
    }
}

/// Checks whether moving `mover` to `candidate` would land on an opponent.
///
/// # Errors
///
/// Returns a [`ContractError`] when `candidate` lies outside the board.
#[instrument(skip(board, mover, opponents), fields(mover = %mover.name()))]
pub fn detect(
    board: &Board,
    mover: &Player,
    candidate: u32,
    opponents: Opponents<'_>,
) -> Result<HitInfo, ContractError> {
    board.validate_progress(candidate)?;
    if !board.is_on_ring(candidate) {
        return Ok(HitInfo::miss());
    }

    let target = board.ring_position(mover, candidate)?;
    for other in opponents.iter() {
        if !board.is_on_ring(other.progress()) {
            continue;
        }
        let position = board.ring_position(other, other.progress())?;
        if position == target {
            debug!(victim = %other.name(), position, "Hit detected");
            return Ok(HitInfo::hit(Victim::new(other.name().to_string(), position)));
        }
    }
    Ok(HitInfo::miss())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, home: u32, progress: u32) -> Player {
        let mut player = Player::new(name, home, &name[..1]).unwrap();
        player.set_progress(progress);
        player
    }

    #[test]
    fn test_hit_on_shared_square() {
        let board = Board::new(18, 3).unwrap();
        let mover = at("Red", 1, 0);
        let victim = at("Blue", 1, 3);
        let others = [victim];

        let info = detect(&board, &mover, 3, Opponents::new(&others)).unwrap();
        assert!(info.occurred());
        let victim = info.victim().unwrap();
        assert_eq!(victim.name(), "Blue");
        assert_eq!(victim.position(), 4);
    }

    #[test]
    fn test_hit_across_different_homes() {
        let board = Board::new(18, 3).unwrap();
        // Blue at progress 12 from home 10 sits on square 4.
        let mover = at("Red", 1, 0);
        let others = [at("Blue", 10, 12)];
        let info = detect(&board, &mover, 3, Opponents::new(&others)).unwrap();
        assert_eq!(info.victim().map(Victim::position), Some(4));
    }

    #[test]
    fn test_no_hit_in_tail() {
        let board = Board::new(18, 3).unwrap();
        let mover = at("Red", 1, 15);
        // Same home and same tail progress: tails are private.
        let others = [at("Blue", 1, 19)];
        for candidate in 18..=20 {
            let info = detect(&board, &mover, candidate, Opponents::new(&others)).unwrap();
            assert!(!info.occurred());
        }
    }

    #[test]
    fn test_opponents_in_tail_are_ignored() {
        let board = Board::new(18, 3).unwrap();
        let mover = at("Red", 1, 0);
        let others = [at("Blue", 1, 19)];
        let info = detect(&board, &mover, 1, Opponents::new(&others)).unwrap();
        assert_eq!(info, HitInfo::miss());
    }

    #[test]
    fn test_first_occupant_in_roster_order_wins() {
        let board = Board::new(18, 3).unwrap();
        let mover = at("Red", 1, 0);
        let before = [at("Green", 1, 5)];
        let after = [at("Blue", 1, 5)];
        let info = detect(&board, &mover, 5, Opponents::around(&before, &after)).unwrap();
        assert_eq!(info.victim().map(Victim::name), Some("Green"));
    }

    #[test]
    fn test_candidate_out_of_range_is_contract_error() {
        let board = Board::new(18, 3).unwrap();
        let mover = at("Red", 1, 0);
        assert!(detect(&board, &mover, 21, Opponents::default()).is_err());
    }
}
