//! Line compaction: the merge rule for a single row or column.
//!
//! Tiles slide toward index 0. Zeros are dropped first, then equal
//! neighbours merge pairwise left to right. A tile produced by a merge
//! cannot merge again in the same pass, so `[2, 2, 2, 2]` becomes
//! `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.

use crate::core::grid::{Line, GRID_SIZE};

/// Result of compacting one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compaction {
    /// The compacted line, right-padded with zeros.
    pub line: Line,
    /// Sum of the values produced by merges.
    pub score_delta: u64,
    /// Number of merges performed.
    pub merges: u32,
}

impl Compaction {
    /// True if compaction changed the line.
    #[must_use]
    pub fn changed_from(&self, original: &Line) -> bool {
        self.line != *original
    }
}

/// Slide and merge a line toward its start.
///
/// ```
/// use rust_2048::engine::compact_line;
///
/// let c = compact_line(&[2, 0, 2, 2]);
/// assert_eq!(c.line, [4, 2, 0, 0]);
/// assert_eq!(c.score_delta, 4);
/// ```
#[must_use]
pub fn compact_line(line: &Line) -> Compaction {
    let mut out: Line = [0; GRID_SIZE];
    let mut len = 0;
    let mut just_merged = false;
    let mut score_delta = 0;
    let mut merges = 0;

    for &tile in line.iter().filter(|&&t| t != 0) {
        if len > 0 && !just_merged && out[len - 1] == tile {
            out[len - 1] = tile * 2;
            score_delta += u64::from(tile) * 2;
            merges += 1;
            just_merged = true;
        } else {
            out[len] = tile;
            len += 1;
            just_merged = false;
        }
    }

    Compaction {
        line: out,
        score_delta,
        merges,
    }
}
