//! Game configuration.
//!
//! The grid dimension is fixed at compile time (`GRID_SIZE`). What a game
//! can still tune is the spawn distribution, how many tiles it starts with,
//! and the seed that drives spawning.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::CELL_COUNT;

/// Default chance that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Default number of tiles placed on a fresh grid.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Configuration for a game session.
///
/// ```
/// use rust_2048::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7).with_four_probability(0.25);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// Tiles placed by `reset()`.
    pub initial_tiles: usize,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: DEFAULT_INITIAL_TILES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of tiles on a fresh grid.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::FourProbability(self.four_probability));
        }
        if self.initial_tiles == 0 || self.initial_tiles > CELL_COUNT {
            return Err(ConfigError::InitialTiles(self.initial_tiles));
        }
        Ok(())
    }
}
