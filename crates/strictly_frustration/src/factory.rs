//! Assembly of ready-to-play games from configuration.

use crate::board::Board;
use crate::config::GameConfig;
use crate::dice::{DiceSource, FixedSequence, Recording};
use crate::error::SetupError;
use crate::game::Game;
use crate::player::Player;
use crate::save::GameSave;
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::{info, instrument};

/// Seat colours, in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, EnumCount)]
pub enum Colour {
    /// First seat.
    Red,
    /// Second seat.
    Blue,
    /// Third seat.
    Green,
    /// Fourth seat.
    Yellow,
}

impl Colour {
    /// One-letter tag used in tail labels.
    pub fn tag(self) -> &'static str {
        match self {
            Colour::Red => "R",
            Colour::Blue => "B",
            Colour::Green => "G",
            Colour::Yellow => "Y",
        }
    }
}

/// Seats `count` players with evenly spaced homes around the ring.
///
/// Player `i` starts on square `1 + i * ring_size / count`.
///
/// # Errors
///
/// Returns [`SetupError::UnsupportedPlayerCount`] outside `1..=4` and
/// [`SetupError::EmptyRing`] for a zero ring.
#[instrument]
pub fn build_roster(count: usize, ring_size: u32) -> Result<Vec<Player>, SetupError> {
    if count == 0 || count > Colour::COUNT {
        return Err(SetupError::UnsupportedPlayerCount {
            count,
            max: Colour::COUNT,
        });
    }
    if ring_size == 0 {
        return Err(SetupError::EmptyRing);
    }

    let spacing = u64::from(ring_size);
    Colour::iter()
        .take(count)
        .enumerate()
        .map(|(i, colour)| {
            // i < 4 and the quotient is below ring_size, so this fits in u32.
            let offset = (i as u64 * spacing / count as u64) as u32;
            Player::new(colour.to_string(), 1 + offset, colour.tag())
        })
        .collect()
}

/// Builds a game from configuration with explicit dice.
///
/// # Errors
///
/// Returns a [`SetupError`] for invalid board dimensions or roster size.
#[instrument(skip(config, dice))]
pub fn game_with_dice<D: DiceSource>(config: &GameConfig, dice: D) -> Result<Game<D>, SetupError> {
    let board = Board::new(*config.ring_size(), *config.tail_size())?;
    let players = build_roster(*config.players(), *config.ring_size())?;
    Game::new(board, players, config.rules().build(), dice)
}

/// Builds a game with random dice whose rolls are recorded for replay.
///
/// # Errors
///
/// Returns a [`SetupError`] for invalid board dimensions or roster size.
#[instrument(skip(config), fields(players = config.players(), die = ?config.die()))]
pub fn new_game(config: &GameConfig) -> Result<Game<Recording<Box<dyn DiceSource>>>, SetupError> {
    let dice = Recording::new(config.die().source(*config.seed()));
    let game = game_with_dice(config, dice)?;
    info!("New game ready");
    Ok(game)
}

/// Rebuilds a saved match with its recorded rolls.
///
/// The returned game has not played any turn; driving it reproduces the
/// saved outcomes exactly.
///
/// # Errors
///
/// Returns [`SetupError::NoRolls`] if the save holds no rolls, or any error
/// from building the board and roster.
#[instrument(skip(save), fields(rolls = save.rolls().len()))]
pub fn replay(save: &GameSave) -> Result<Game<FixedSequence>, SetupError> {
    let dice = FixedSequence::new(save.rolls().clone())?;
    game_with_dice(&save.config(), dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Phase;

    fn homes(players: &[Player]) -> Vec<u32> {
        players.iter().map(Player::home).collect()
    }

    #[test]
    fn test_roster_spacing() {
        assert_eq!(homes(&build_roster(2, 18).unwrap()), vec![1, 10]);
        assert_eq!(homes(&build_roster(4, 36).unwrap()), vec![1, 10, 19, 28]);
        assert_eq!(homes(&build_roster(3, 18).unwrap()), vec![1, 7, 13]);
    }

    #[test]
    fn test_roster_colours() {
        let roster = build_roster(4, 36).unwrap();
        let names: Vec<_> = roster.iter().map(Player::name).collect();
        let tags: Vec<_> = roster.iter().map(Player::colour).collect();
        assert_eq!(names, vec!["Red", "Blue", "Green", "Yellow"]);
        assert_eq!(tags, vec!["R", "B", "G", "Y"]);
    }

    #[test]
    fn test_roster_size_limits() {
        assert!(matches!(
            build_roster(0, 18),
            Err(SetupError::UnsupportedPlayerCount { count: 0, max: 4 })
        ));
        assert!(build_roster(5, 18).is_err());
    }

    #[test]
    fn test_new_game_from_large_preset() {
        let game = new_game(&GameConfig::large().with_seed(Some(1))).unwrap();
        assert_eq!(game.players().len(), 4);
        assert_eq!(game.board().end_progress(), 41);
        assert_eq!(game.phase(), Phase::NotStarted);
        assert!(game.rolls().is_empty());
    }

    #[test]
    fn test_invalid_board_rejected() {
        let config = GameConfig::small().with_tail_size(0);
        assert!(matches!(new_game(&config), Err(SetupError::EmptyTail)));
    }
}
