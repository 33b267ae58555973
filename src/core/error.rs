use std::fmt;

/// Errors from building a grid out of raw cell values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A cell holds a value that is neither empty nor a power of two >= 2.
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidTile { row, col, value } => {
                write!(f, "Invalid tile {} at ({}, {}): must be 0 or a power of two", value, row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors from validating a `GameConfig`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Probability of spawning a 4 is outside [0, 1].
    FourProbability(f64),
    /// Initial tile count is zero or exceeds the number of cells.
    InitialTiles(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FourProbability(p) => {
                write!(f, "Four-tile probability must be within [0, 1], got {}", p)
            }
            ConfigError::InitialTiles(n) => {
                write!(f, "Initial tile count out of range: {}", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
