//! Error types for game construction, geometry contracts, and turn execution.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error raised while assembling a board, roster, dice source, or game.
///
/// Construction errors are reported immediately to the caller and never
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    /// The shared ring must have at least one square.
    #[display("Ring size must be greater than zero")]
    EmptyRing,

    /// Every player needs at least one tail square.
    #[display("Tail size must be greater than zero")]
    EmptyTail,

    /// A game needs at least one player.
    #[display("At least one player is required")]
    NoPlayers,

    /// A fixed roll sequence cannot be empty.
    #[display("At least one roll is required")]
    NoRolls,

    /// A player field failed validation.
    #[display("Invalid player: {}", _0)]
    InvalidPlayer(String),

    /// Player names identify players in outcomes, so they must be unique.
    #[display("Duplicate player name: {}", _0)]
    DuplicatePlayer(String),

    /// Roster presets exist only for a limited number of players.
    #[display("Unsupported player count: {} (expected 1..={})", count, max)]
    UnsupportedPlayerCount {
        /// Requested number of players.
        count: usize,
        /// Largest supported roster.
        max: usize,
    },

    /// The game builder was finalized without a required part.
    #[display("Missing collaborator: {}", _0)]
    MissingCollaborator(&'static str),
}

impl std::error::Error for SetupError {}

/// Caller bug: a progress value broke the board's geometry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContractError {
    /// Progress lies outside `[0, end]`.
    #[display("Progress {} out of range (expected 0..={})", progress, end)]
    ProgressOutOfRange {
        /// Offending progress value.
        progress: u32,
        /// The board's end progress.
        end: u32,
    },

    /// Ring positions only exist for progress below the ring size.
    #[display("Progress {} is not on the ring (ring size {})", progress, ring_size)]
    NotOnRing {
        /// Offending progress value.
        progress: u32,
        /// The board's ring size.
        ring_size: u32,
    },
}

impl std::error::Error for ContractError {}

/// Fatal failure while executing a turn.
///
/// Forfeits and turns requested after the match finished are not errors;
/// they are reported through [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// A rule layer broke a geometry contract.
    #[display("Contract violation: {}", _0)]
    #[from]
    Contract(ContractError),

    /// Game state failed its consistency checks after a recorded move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// An earlier fatal error stopped this match.
    #[display("Match was aborted after a fatal error")]
    Aborted,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Contract(err) => Some(err),
            GameError::InvariantViolation(_) | GameError::Aborted => None,
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_converts_into_game_error() {
        let contract = ContractError::NotOnRing {
            progress: 19,
            ring_size: 18,
        };
        let err: GameError = contract.into();
        assert_eq!(err, GameError::Contract(contract));
        assert!(std::error::Error::source(&err).is_some());
    }
}
