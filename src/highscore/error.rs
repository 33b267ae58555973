use std::fmt;

/// Errors from reading or writing stored high scores.
#[derive(Debug)]
pub enum HighScoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    /// No platform data directory to fall back on.
    NoDataDir,
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::IoError(e) => write!(f, "IO error: {}", e),
            HighScoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            HighScoreError::NoDataDir => write!(f, "No data directory available for high scores"),
        }
    }
}

impl std::error::Error for HighScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighScoreError::IoError(e) => Some(e),
            HighScoreError::SerializationError(e) => Some(e),
            HighScoreError::NoDataDir => None,
        }
    }
}

impl From<std::io::Error> for HighScoreError {
    fn from(err: std::io::Error) -> Self {
        HighScoreError::IoError(err)
    }
}

impl From<serde_json::Error> for HighScoreError {
    fn from(err: serde_json::Error) -> Self {
        HighScoreError::SerializationError(err)
    }
}
