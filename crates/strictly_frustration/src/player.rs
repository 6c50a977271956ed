//! Per-participant state.

use crate::board::Board;
use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant racing around the ring.
///
/// Progress starts at 0 ("home") and is only changed by the movement rule
/// that performs the move. The turn counter is only changed by the game
/// lifecycle, and only for turns that were not forfeited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    home: u32,
    colour: String,
    progress: u32,
    turns_taken: u32,
}

impl Player {
    /// Creates a player waiting at home.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayer`] if the name or colour tag is
    /// blank, or the home square is zero.
    #[instrument(skip(name, colour), fields(name = %name.as_ref(), colour = %colour.as_ref()))]
    pub fn new(
        name: impl AsRef<str>,
        home: u32,
        colour: impl AsRef<str>,
    ) -> Result<Self, SetupError> {
        let name = name.as_ref().trim();
        let colour = colour.as_ref().trim();
        if name.is_empty() {
            return Err(SetupError::InvalidPlayer("name is required".to_string()));
        }
        if home == 0 {
            return Err(SetupError::InvalidPlayer(format!(
                "home square for {} must be positive",
                name
            )));
        }
        if colour.is_empty() {
            return Err(SetupError::InvalidPlayer(format!(
                "colour tag for {} is required",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            home,
            colour: colour.to_string(),
            progress: 0,
            turns_taken: 0,
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the absolute ring square this player starts from (1-based).
    pub fn home(&self) -> u32 {
        self.home
    }

    /// Returns the tag used in tail labels (e.g. "R").
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// Returns the player's progress from home.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Returns the number of effective (non-forfeited) turns.
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// True once the player sits on the last tail square.
    pub fn is_at_end(&self, board: &Board) -> bool {
        self.progress == board.end_progress()
    }

    /// Places the player at a given progress.
    ///
    /// Not range-checked here; the game validates all progress values after
    /// every recorded move.
    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress;
    }

    pub(crate) fn count_turn(&mut self) {
        self.turns_taken += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.colour)
    }
}
