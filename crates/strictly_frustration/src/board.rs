//! Board geometry: maps a player's linear progress onto the shared ring and
//! the player's private tail.
//!
//! Progress layout for a board with ring size `R` and tail size `T`:
//!
//! - `0` is home
//! - `1..R` are ring squares, offset by the player's home square
//! - `R..=R+T-1` are the player's tail squares, the last being the end

use crate::error::{ContractError, SetupError};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Immutable board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    ring_size: u32,
    tail_size: u32,
}

impl Board {
    /// Creates a board with the given ring and tail sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyRing`] or [`SetupError::EmptyTail`] when a
    /// dimension is zero.
    #[instrument]
    pub fn new(ring_size: u32, tail_size: u32) -> Result<Self, SetupError> {
        if ring_size == 0 {
            return Err(SetupError::EmptyRing);
        }
        if tail_size == 0 {
            return Err(SetupError::EmptyTail);
        }
        Ok(Self {
            ring_size,
            tail_size,
        })
    }

    /// Number of shared ring squares.
    pub fn ring_size(&self) -> u32 {
        self.ring_size
    }

    /// Number of private tail squares per player.
    pub fn tail_size(&self) -> u32 {
        self.tail_size
    }

    /// Progress value of the final tail square.
    pub fn end_progress(&self) -> u32 {
        self.ring_size + self.tail_size - 1
    }

    /// True when the progress lies on the shared ring (home included).
    pub fn is_on_ring(&self, progress: u32) -> bool {
        progress < self.ring_size
    }

    /// Checks that a progress value lies in `[0, end_progress]`.
    pub fn validate_progress(&self, progress: u32) -> Result<(), ContractError> {
        let end = self.end_progress();
        if progress > end {
            warn!(progress, end, "Progress out of range");
            return Err(ContractError::ProgressOutOfRange { progress, end });
        }
        Ok(())
    }

    /// Absolute 1-based ring square for a player at the given progress.
    ///
    /// # Errors
    ///
    /// Fails when the progress is out of range or already in the tail.
    #[instrument(skip(self, player), fields(player = %player.name(), home = player.home()))]
    pub fn ring_position(&self, player: &Player, progress: u32) -> Result<u32, ContractError> {
        self.validate_progress(progress)?;
        if !self.is_on_ring(progress) {
            return Err(ContractError::NotOnRing {
                progress,
                ring_size: self.ring_size,
            });
        }
        let offset = u64::from(player.home() - 1) + u64::from(progress);
        // Remainder is below ring_size, so it fits back into u32.
        Ok((offset % u64::from(self.ring_size)) as u32 + 1)
    }

    /// Describes where a player at the given progress stands.
    #[instrument(skip(self, player), fields(player = %player.name()))]
    pub fn label_for(&self, player: &Player, progress: u32) -> Result<SquareLabel, ContractError> {
        self.validate_progress(progress)?;
        if progress == 0 {
            return Ok(SquareLabel::Home {
                home: player.home(),
            });
        }
        if self.is_on_ring(progress) {
            return Ok(SquareLabel::Ring {
                position: self.ring_position(player, progress)?,
            });
        }
        let step = progress - self.ring_size + 1;
        let colour = player.colour().to_string();
        if step == self.tail_size {
            Ok(SquareLabel::End { colour, step })
        } else {
            Ok(SquareLabel::Tail { colour, step })
        }
    }
}

/// Human-facing description of a square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareLabel {
    /// Still at home (progress 0).
    Home {
        /// The player's home square.
        home: u32,
    },
    /// On the shared ring.
    Ring {
        /// Absolute ring square.
        position: u32,
    },
    /// In the private tail, short of the end.
    Tail {
        /// The player's colour tag.
        colour: String,
        /// 1-based tail step.
        step: u32,
    },
    /// On the last tail square.
    End {
        /// The player's colour tag.
        colour: String,
        /// 1-based tail step (equal to the tail size).
        step: u32,
    },
}

impl std::fmt::Display for SquareLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareLabel::Home { home } => write!(f, "Home (Position {})", home),
            SquareLabel::Ring { position } => write!(f, "Position {}", position),
            SquareLabel::Tail { colour, step } => write!(f, "Tail Position {}{}", colour, step),
            SquareLabel::End { colour, step } => write!(f, "{}{} (End)", colour, step),
        }
    }
}
