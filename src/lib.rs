//! # rust-2048
//!
//! A single-player sliding-tile 2048 engine.
//!
//! ## Design Principles
//!
//! 1. **One merge routine**: every direction is the same line compaction
//!    applied to rows or columns, reversed as needed.
//!
//! 2. **No silent spawns**: a tile spawns if and only if the move changed
//!    the grid.
//!
//! 3. **Injected randomness**: spawning goes through `TileSpawner`, so a
//!    seeded `GameRng` or a `ScriptedSpawner` make games reproducible.
//!
//! 4. **Polled state, no callbacks**: the engine reports Playing → GameOver
//!    in `MoveOutcome`; callers decide what to do about it.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, spawn randomness, configuration
//! - `engine`: Line compaction, orientation adapters, the `Game` engine
//! - `highscore`: Best-score persistence
//! - `session`: A game wired to a high score store
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(42)).unwrap();
//! let before = game.score();
//! game.move_tiles(Direction::Left);
//! assert!(game.score() >= before);
//! println!("{}", game.grid());
//! ```

pub mod core;
pub mod engine;
pub mod highscore;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, Grid, Line, ScriptedSpawner, SpawnOutcome, Tile,
    TileSpawner, GRID_SIZE,
};

pub use crate::engine::{compact_line, shift, Compaction, Game, GameStatus, MoveOutcome, Shift};

pub use crate::highscore::{HighScoreError, HighScoreStore, JsonFileHighScores, MemoryHighScores};

pub use crate::session::{Session, SessionMove};
