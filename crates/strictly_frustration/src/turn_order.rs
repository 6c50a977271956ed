//! Cyclic turn order over a fixed roster.

use crate::error::SetupError;
use crate::hit::Opponents;
use crate::player::Player;
use tracing::{instrument, trace};

/// Strict round-robin over the roster. Nobody is ever skipped; a forfeit
/// withholds movement, not the turn slot.
#[derive(Debug, Clone)]
pub struct TurnOrder {
    players: Vec<Player>,
    index: usize,
}

impl TurnOrder {
    /// Creates a turn order starting with the first player.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoPlayers`] for an empty roster.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<Player>) -> Result<Self, SetupError> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        Ok(Self { players, index: 0 })
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.index]
    }

    /// Roster index of the current player.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Moves to the next player and returns them.
    pub fn advance(&mut self) -> &Player {
        self.index = (self.index + 1) % self.players.len();
        trace!(index = self.index, "Turn advanced");
        &self.players[self.index]
    }

    /// All players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The current player, mutable, alongside a read-only view of the rest.
    ///
    /// `None` only if the turn index left the roster.
    pub(crate) fn split_current(&mut self) -> Option<(&mut Player, Opponents<'_>)> {
        let (before, rest) = self.players.split_at_mut_checked(self.index)?;
        let (current, after) = rest.split_first_mut()?;
        Some((current, Opponents::around(before, after)))
    }

    #[cfg(test)]
    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
}
