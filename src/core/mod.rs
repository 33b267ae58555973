//! Core engine types: grid, directions, spawn randomness, configuration.
//!
//! These are plain data types with no game rules attached. The rules that
//! move tiles around live in `engine`.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::GameConfig;
pub use direction::Direction;
pub use error::{ConfigError, GridError};
pub use grid::{is_valid_tile, Grid, Line, Tile, CELL_COUNT, GRID_SIZE, MAX_TILE};
pub use rng::{GameRng, ScriptedSpawner, SpawnOutcome, TileSpawner};
