//! Game configuration: board presets, roster size, dice, and rule variants.

use crate::dice::DieKind;
use crate::error::ConfigError;
use crate::rules::RuleSet;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Everything needed to set up a match.
///
/// Every field has a default, so a TOML file only needs to name what it
/// changes:
///
/// ```toml
/// ring_size = 36
/// tail_size = 6
/// players = 4
/// die = "single"
///
/// [rules]
/// exact_end = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Number of squares on the shared ring.
    ring_size: u32,
    /// Number of private tail squares per player.
    tail_size: u32,
    /// Number of players, seated from the colour palette.
    players: usize,
    /// Which random dice to roll.
    die: DieKind,
    /// Seed for reproducible random dice.
    seed: Option<u64>,
    /// Rule variants.
    rules: RuleSet,
}

impl GameConfig {
    /// Small board (18 ring squares, 3 tail squares) with two players.
    #[instrument]
    pub fn small() -> Self {
        Self {
            ring_size: 18,
            tail_size: 3,
            players: 2,
            die: DieKind::default(),
            seed: None,
            rules: RuleSet::basic(),
        }
    }

    /// Large board (36 ring squares, 6 tail squares) with four players.
    #[instrument]
    pub fn large() -> Self {
        Self {
            ring_size: 36,
            tail_size: 6,
            players: 4,
            ..Self::small()
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content), fields(len = content.len()))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            ring_size = config.ring_size,
            tail_size = config.tail_size,
            players = config.players,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::small()
    }
}
