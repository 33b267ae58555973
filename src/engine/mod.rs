//! Game rules: line compaction, orientation adapters, and the grid engine.
//!
//! - `compact_line` is the single merge routine. It is pure and knows
//!   nothing about grids or directions.
//! - `orientation` maps a grid to lines for a direction and back, so
//!   Left/Right/Up/Down all reuse `compact_line`.
//! - `Game` owns grid, score, and status, and decides when to spawn.

pub mod game;
pub mod line;
pub mod orientation;

pub use game::{Game, GameStatus, MoveOutcome, SpawnedTile};
pub use line::{compact_line, Compaction};
pub use orientation::{legal_directions, lines_for, shift, Shift};
