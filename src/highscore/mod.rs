//! High score persistence.
//!
//! Only a finished game's score crosses this boundary; in-progress games
//! are never saved.

mod error;
mod store;

pub use error::HighScoreError;
pub use store::{HighScoreStore, JsonFileHighScores, MemoryHighScores};
