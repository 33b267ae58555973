//! High score stores.
//!
//! The engine only hands over a final score. Whether it beats the stored
//! one is decided here: a score replaces the stored value only if it is
//! strictly greater.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::HighScoreError;

const APP_DIR: &str = "rust-2048";
const FILE_NAME: &str = "highscore.json";

/// Persistent best-score storage.
pub trait HighScoreStore {
    /// Current high score, 0 if nothing has been stored.
    fn high_score(&self) -> Result<u64, HighScoreError>;

    /// Overwrite the stored value with `score`.
    fn store(&mut self, score: u64) -> Result<(), HighScoreError>;

    /// Record a finished game's score.
    ///
    /// Returns true if `score` became the new high score.
    fn record(&mut self, score: u64) -> Result<bool, HighScoreError> {
        let current = self.high_score()?;
        if score > current {
            self.store(score)?;
            info!("new high score {} (previous {})", score, current);
            Ok(true)
        } else {
            debug!("score {} does not beat high score {}", score, current);
            Ok(false)
        }
    }
}

/// In-process store. Forgets everything on drop.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScores {
    best: Option<u64>,
}

impl MemoryHighScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryHighScores {
    fn high_score(&self) -> Result<u64, HighScoreError> {
        Ok(self.best.unwrap_or(0))
    }

    fn store(&mut self, score: u64) -> Result<(), HighScoreError> {
        self.best = Some(score);
        Ok(())
    }
}

/// On-disk record format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u64,
}

/// Store backed by a small JSON file.
///
/// A missing file reads as 0. The parent directory is created on first
/// write.
#[derive(Clone, Debug)]
pub struct JsonFileHighScores {
    path: PathBuf,
}

impl JsonFileHighScores {
    /// Use the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Use the default file under the platform data directory.
    pub fn in_data_dir() -> Result<Self, HighScoreError> {
        let dir = dirs::data_dir().ok_or(HighScoreError::NoDataDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileHighScores {
    fn high_score(&self) -> Result<u64, HighScoreError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let json = fs::read_to_string(&self.path)?;
        let record: HighScoreFile = serde_json::from_str(&json)?;
        Ok(record.high_score)
    }

    fn store(&mut self, score: u64) -> Result<(), HighScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        debug!("wrote high score {} to {}", score, self.path.display());
        Ok(())
    }
}
