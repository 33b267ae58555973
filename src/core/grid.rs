//! The tile matrix.
//!
//! A `Grid` is a `GRID_SIZE`×`GRID_SIZE` matrix of tile values stored
//! row-major. `0` is an empty cell; every other cell holds a power of two.
//! The grid is `Copy` so move lookahead never needs to allocate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GridError;

/// Side length of the grid.
pub const GRID_SIZE: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A tile value: 0 for empty, otherwise 2, 4, 8, ...
pub type Tile = u32;

/// One row or column, ordered from its start index.
pub type Line = [Tile; GRID_SIZE];

/// Largest tile a game on this grid can reach: every cell holding a
/// distinct power of two, with a 4 spawned into the last free cell.
///
/// Two of these merge to `2 * MAX_TILE`, which still fits in a `Tile`.
pub const MAX_TILE: Tile = 1 << (CELL_COUNT + 1);

/// Check that a value is allowed in a cell.
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Square matrix of tiles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[Line; GRID_SIZE]", into = "[Line; GRID_SIZE]")]
pub struct Grid {
    cells: [Line; GRID_SIZE],
}

impl Grid {
    /// A grid with every cell empty.
    pub const EMPTY: Grid = Grid {
        cells: [[0; GRID_SIZE]; GRID_SIZE],
    };

    /// Create an empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Build a grid from rows, checking every cell.
    ///
    /// ```
    /// use rust_2048::core::Grid;
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 2, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 8],
    /// ]).unwrap();
    /// assert_eq!(grid.count_tiles(), 4);
    ///
    /// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Get the tile at a cell.
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Set the tile at a cell.
    pub(crate) fn set(&mut self, row: usize, col: usize, tile: Tile) {
        debug_assert!(is_valid_tile(tile), "invalid tile value {tile}");
        self.cells[row][col] = tile;
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    #[must_use]
    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][col])
    }

    pub(crate) fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    pub(crate) fn set_column(&mut self, col: usize, line: Line) {
        for (row, tile) in line.into_iter().enumerate() {
            self.cells[row][col] = tile;
        }
    }

    /// Iterate over every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flat_map(|line| line.iter().copied())
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(CELL_COUNT);
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                if tile == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.tiles().filter(|&t| t == 0).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Highest tile on the grid, 0 if empty.
    #[must_use]
    pub fn highest_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            cells: std::array::from_fn(|row| self.column(row)),
        }
    }

    /// True if any two horizontally or vertically adjacent cells hold the
    /// same non-zero value.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let tile = self.cells[row][col];
                if tile == 0 {
                    continue;
                }
                if col + 1 < GRID_SIZE && self.cells[row][col + 1] == tile {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[row + 1][col] == tile {
                    return true;
                }
            }
        }
        false
    }
}

impl TryFrom<[Line; GRID_SIZE]> for Grid {
    type Error = GridError;

    fn try_from(rows: [Line; GRID_SIZE]) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for [Line; GRID_SIZE] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.cells)
    }
}

const CELL_WIDTH: usize = 6;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat((CELL_WIDTH + 1) * GRID_SIZE - 1);
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", rule)?;
            }
            let cells: Vec<String> = line
                .iter()
                .map(|&tile| match tile {
                    0 => " ".repeat(CELL_WIDTH),
                    t => format!("{:^width$}", t, width = CELL_WIDTH),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
