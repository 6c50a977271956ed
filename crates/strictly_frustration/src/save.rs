//! Serializable snapshot of a match, sufficient for exact replay.

use crate::config::GameConfig;
use crate::dice::{DiceSource, DieKind, Recording};
use crate::game::Game;
use crate::rules::RuleSet;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board dimensions, roster size, rule variants and the rolls drawn so far.
///
/// Only the setup and the dice are saved: everything else is reproduced by
/// replaying the rolls through the same rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSave {
    ring_size: u32,
    tail_size: u32,
    players: usize,
    die: DieKind,
    rules: RuleSet,
    rolls: Vec<u32>,
}

impl GameSave {
    /// Captures a recorded game together with the configuration it was
    /// built from.
    #[instrument(skip(config, game), fields(rolls = game.rolls().len()))]
    pub fn capture<D: DiceSource>(config: &GameConfig, game: &Game<Recording<D>>) -> Self {
        Self {
            ring_size: game.board().ring_size(),
            tail_size: game.board().tail_size(),
            players: game.players().len(),
            die: *config.die(),
            rules: *config.rules(),
            rolls: game.rolls().to_vec(),
        }
    }

    /// The configuration needed to rebuild the board, roster and rules.
    pub fn config(&self) -> GameConfig {
        GameConfig::small()
            .with_ring_size(self.ring_size)
            .with_tail_size(self.tail_size)
            .with_players(self.players)
            .with_die(self.die)
            .with_rules(self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::new_game;

    #[test]
    fn test_capture_keeps_setup_and_rolls() {
        let config = GameConfig::large().with_seed(Some(11));
        let mut game = new_game(&config).unwrap();
        for _ in 0..6 {
            game.play_turn().unwrap();
        }

        let save = GameSave::capture(&config, &game);
        assert_eq!(save.rolls().len(), 6);
        assert_eq!(*save.players(), 4);
        assert_eq!(save.config(), config.clone().with_seed(None));
    }
}
