//! Orientation adapters: map the grid to and from lines so one compaction
//! routine serves all four directions.
//!
//! | Direction | Lines read          |
//! |-----------|---------------------|
//! | Left      | rows                |
//! | Right     | rows, reversed      |
//! | Up        | columns             |
//! | Down      | columns, reversed   |
//!
//! Every line handed out by `lines_for` is ordered so that index 0 is the
//! side tiles slide toward.

use crate::core::direction::Direction;
use crate::core::grid::{Grid, Line, GRID_SIZE};

use super::line::compact_line;

/// Extract the lines of `grid` oriented for `direction`.
#[must_use]
pub fn lines_for(grid: &Grid, direction: Direction) -> [Line; GRID_SIZE] {
    std::array::from_fn(|i| {
        let mut line = if direction.is_horizontal() {
            grid.row(i)
        } else {
            grid.column(i)
        };
        if direction.is_reversed() {
            line.reverse();
        }
        line
    })
}

/// Write lines produced for `direction` back into `grid`.
///
/// Inverse of `lines_for`. Crate-private so only compacted lines of valid
/// tiles are ever written.
pub(crate) fn write_lines(grid: &mut Grid, direction: Direction, lines: &[Line; GRID_SIZE]) {
    for (i, line) in lines.iter().enumerate() {
        let mut line = *line;
        if direction.is_reversed() {
            line.reverse();
        }
        if direction.is_horizontal() {
            grid.set_row(i, line);
        } else {
            grid.set_column(i, line);
        }
    }
}

/// Outcome of sliding a grid without spawning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shift {
    /// The grid after compaction.
    pub grid: Grid,
    /// Total merge score across all lines.
    pub score_delta: u64,
    /// True if at least one line changed.
    pub changed: bool,
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// Pure: the input is untouched and no tile is spawned.
///
/// ```
/// use rust_2048::core::{Direction, Grid};
/// use rust_2048::engine::shift;
///
/// let grid = Grid::from_rows([[0, 0, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let s = shift(&grid, Direction::Right);
/// assert_eq!(s.grid.row(0), [0, 0, 0, 4]);
/// assert_eq!(s.score_delta, 4);
/// assert!(s.changed);
/// ```
#[must_use]
pub fn shift(grid: &Grid, direction: Direction) -> Shift {
    let before = lines_for(grid, direction);
    let mut after = before;
    let mut score_delta = 0;
    let mut changed = false;

    for (line, original) in after.iter_mut().zip(before.iter()) {
        let compaction = compact_line(original);
        changed |= compaction.changed_from(original);
        score_delta += compaction.score_delta;
        *line = compaction.line;
    }

    let mut result = *grid;
    if changed {
        write_lines(&mut result, direction, &after);
    }

    Shift {
        grid: result,
        score_delta,
        changed,
    }
}

/// Directions in which a shift would change `grid`.
#[must_use]
pub fn legal_directions(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| shift(grid, dir).changed)
        .collect()
}
