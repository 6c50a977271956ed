//! Strictly Frustration - rules engine for the Pure Frustration race game
//!
//! Players race once around a shared ring from their own home square, then
//! up a private tail to the end square. The first player to land exactly on
//! the end square wins.
//!
//! # Architecture
//!
//! - **Board**: pure geometry mapping progress to ring squares and labels
//! - **Rules**: a base movement rule wrapped by optional variant decorators
//!   (exact end, forfeit on hit)
//! - **Dice**: random, fixed, and recording roll sources
//! - **Game**: turn order, lifecycle phases, record, invariants, observers
//! - **Config/Save**: TOML presets and replayable snapshots
//!
//! # Example
//!
//! ```
//! use strictly_frustration::{GameConfig, GameSave, Phase, new_game, replay};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::small().with_seed(Some(7));
//! let mut game = new_game(&config)?;
//! game.play_to_finish(Some(500))?;
//! assert_eq!(game.phase(), Phase::Finished);
//!
//! let save = GameSave::capture(&config, &game);
//! let mut again = replay(&save)?;
//! again.play_to_finish(Some(500))?;
//! assert_eq!(again.record(), game.record());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod dice;
mod error;
mod factory;
mod game;
mod hit;
mod invariants;
mod lifecycle;
mod observer;
mod outcome;
mod player;
mod record;
mod rules;
mod save;
mod turn_order;

#[cfg(test)]
mod test_support;

// Crate-level exports - Geometry
pub use board::{Board, SquareLabel};
pub use hit::{HitInfo, Opponents, detect};

// Crate-level exports - Players and turns
pub use player::Player;
pub use turn_order::TurnOrder;

// Crate-level exports - Movement rules
pub use outcome::{MoveOutcome, TERMINAL_NOTE, Victim};
pub use rules::{BaseRule, DecoratorOrder, ExactEnd, ForfeitOnHit, MovementRule, RuleSet};

// Crate-level exports - Dice
pub use dice::{DiceSource, DieKind, DoubleDie, FixedSequence, Recording, SingleDie};

// Crate-level exports - Game
pub use game::{Game, GameBuilder};
pub use lifecycle::Phase;
pub use record::GameRecord;

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, ProgressInRangeInvariant,
    TurnCountInvariant,
};

// Crate-level exports - Observers
pub use observer::{
    EventLog, FinishObserver, FinishSummary, GameEvent, StateObserver, TurnObserver,
};

// Crate-level exports - Configuration and persistence
pub use config::GameConfig;
pub use factory::{Colour, build_roster, game_with_dice, new_game, replay};
pub use save::GameSave;

// Crate-level exports - Errors
pub use error::{ConfigError, ContractError, GameError, SetupError};
