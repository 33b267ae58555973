//! The grid engine: owns the grid and score, applies moves, spawns tiles,
//! and tracks the Playing → GameOver transition.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::direction::Direction;
use crate::core::error::ConfigError;
use crate::core::grid::{Grid, Tile};
use crate::core::rng::{GameRng, TileSpawner};

use super::orientation::{legal_directions, shift};

/// Session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Playing,
    /// No move can change the grid. Only `reset()` leaves this state.
    GameOver,
}

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True if any line changed. A tile is spawned if and only if this is set.
    pub changed: bool,
    /// Score gained from merges in this move.
    pub score_delta: u64,
    /// The tile spawned after the move, if any cell was free.
    pub spawned: Option<SpawnedTile>,
    /// True only for the move that ended the game.
    pub game_over: bool,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            changed: false,
            score_delta: 0,
            spawned: None,
            game_over: false,
            status,
        }
    }
}

/// A single-player 2048 game.
///
/// Generic over the spawn source so tests can script exactly where tiles
/// appear.
///
/// ```
/// use rust_2048::core::{Direction, GameConfig};
/// use rust_2048::engine::{Game, GameStatus};
///
/// let mut game = Game::new(GameConfig::default().with_seed(42)).unwrap();
/// assert_eq!(game.grid().count_tiles(), 2);
/// assert_eq!(game.status(), GameStatus::Playing);
///
/// let moved = Direction::ALL.into_iter().filter(|&dir| game.move_tiles(dir)).count();
/// assert!(moved > 0);
/// assert_eq!(game.moves() as usize, moved);
/// ```
#[derive(Clone, Debug)]
pub struct Game<S: TileSpawner = GameRng> {
    grid: Grid,
    score: u64,
    moves: u32,
    status: GameStatus,
    config: GameConfig,
    spawner: S,
}

impl Game<GameRng> {
    /// Start a game seeded from `config.seed`, or from entropy if unset.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_spawner(config, rng)
    }
}

impl<S: TileSpawner> Game<S> {
    /// Start a game that draws spawns from `spawner`.
    pub fn with_spawner(config: GameConfig, spawner: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            grid: Grid::empty(),
            score: 0,
            moves: 0,
            status: GameStatus::Playing,
            config,
            spawner,
        };
        game.reset();
        Ok(game)
    }

    /// Resume from an existing grid and score, without spawning.
    ///
    /// The status is derived from the grid.
    pub fn from_grid(grid: Grid, score: u64, spawner: S) -> Self {
        let mut game = Self {
            grid,
            score,
            moves: 0,
            status: GameStatus::Playing,
            config: GameConfig::default(),
            spawner,
        };
        if game.is_terminal() {
            game.status = GameStatus::GameOver;
        }
        game
    }

    /// Clear the grid and score, then place the initial tiles.
    pub fn reset(&mut self) {
        self.grid = Grid::empty();
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Playing;
        for _ in 0..self.config.initial_tiles {
            self.spawn_random_tile();
        }
        debug!("new game: {} tiles placed", self.grid.count_tiles());
    }

    /// Slide tiles toward `direction`. Returns true if the grid changed.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        self.play(direction).changed
    }

    /// Slide tiles toward `direction` and report everything that happened.
    ///
    /// If no line changes, grid and score are untouched and nothing spawns.
    /// Otherwise the new grid is committed, the merge score added, one tile
    /// spawned, and the terminal check run.
    pub fn play(&mut self, direction: Direction) -> MoveOutcome {
        if self.status == GameStatus::GameOver {
            return MoveOutcome::unchanged(self.status);
        }

        let shifted = shift(&self.grid, direction);
        if !shifted.changed {
            debug!("move {}: no change", direction);
            return MoveOutcome::unchanged(self.status);
        }

        self.grid = shifted.grid;
        self.score += shifted.score_delta;
        self.moves += 1;
        let spawned = self.spawn_random_tile();
        debug!(
            "move {}: +{} (score {}), spawned {:?}",
            direction, shifted.score_delta, self.score, spawned
        );

        let game_over = self.is_terminal();
        if game_over {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} moves: score {}, highest tile {}",
                self.moves,
                self.score,
                self.grid.highest_tile()
            );
        }

        MoveOutcome {
            changed: true,
            score_delta: shifted.score_delta,
            spawned,
            game_over,
            status: self.status,
        }
    }

    /// Place a 2 or 4 in a uniformly chosen empty cell.
    ///
    /// Returns `None` (and does nothing) if the grid is full. A spawner
    /// value other than 2 or 4 is replaced by 2.
    pub fn spawn_random_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.spawner.pick_cell(empty.len()) % empty.len()];
        let value = match self.spawner.pick_value(self.config.four_probability) {
            value @ (2 | 4) => value,
            other => {
                warn!("spawner produced {}, placing 2 instead", other);
                2
            }
        };
        self.grid.set(row, col, value);
        Some(SpawnedTile { row, col, value })
    }

    /// True iff the grid is full and no two adjacent cells are equal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.grid.count_empty() == 0 && !self.grid.has_adjacent_equal()
    }

    /// Directions that would currently change the grid.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        if self.status == GameStatus::GameOver {
            return Vec::new();
        }
        legal_directions(&self.grid)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Number of moves that changed the grid since the last reset.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn highest_tile(&self) -> Tile {
        self.grid.highest_tile()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mutable access to the spawn source.
    pub fn spawner_mut(&mut self) -> &mut S {
        &mut self.spawner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Line;
    use crate::core::rng::{ScriptedSpawner, SpawnOutcome};

    fn grid(rows: [Line; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn scripted(outcomes: &[(usize, Tile)]) -> ScriptedSpawner {
        ScriptedSpawner::new(outcomes.iter().map(|&(c, v)| SpawnOutcome::new(c, v)))
    }

    #[test]
    fn test_new_game_has_initial_tiles() {
        let game = Game::new(GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(game.grid().count_tiles(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert!(game.grid().tiles().all(|t| t == 0 || t == 2 || t == 4));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(GameConfig::default().with_seed(9)).unwrap();
        let mut b = Game::new(GameConfig::default().with_seed(9)).unwrap();
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.play(dir), b.play(dir));
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Game::new(GameConfig::default().with_initial_tiles(0));
        assert_eq!(result.err(), Some(ConfigError::InitialTiles(0)));
    }

    #[test]
    fn test_scripted_initial_placement() {
        let game = Game::with_spawner(GameConfig::default(), scripted(&[(0, 2), (14, 4)])).unwrap();
        assert_eq!(game.grid().get(0, 0), 2);
        // 15 cells remain empty after the first spawn; index 14 is the last one
        assert_eq!(game.grid().get(3, 3), 4);
    }

    #[test]
    fn test_move_merges_and_spawns() {
        let start = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut game = Game::from_grid(start, 0, scripted(&[(0, 2)]));

        let outcome = game.play(Direction::Left);

        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(game.score(), 4);
        assert_eq!(game.grid().row(0)[0], 4);
        // First empty cell after the merge is (0, 1)
        assert_eq!(outcome.spawned, Some(SpawnedTile { row: 0, col: 1, value: 2 }));
        assert_eq!(game.grid().count_tiles(), 2);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_no_op_move_leaves_state() {
        let start = grid([[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut game = Game::from_grid(start, 12, scripted(&[(0, 2)]));

        assert!(!game.move_tiles(Direction::Left));
        assert!(!game.move_tiles(Direction::Up));
        assert_eq!(*game.grid(), start);
        assert_eq!(game.score(), 12);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.spawner_mut().remaining(), 1);
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let full = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut game = Game::from_grid(full, 0, scripted(&[]));
        assert_eq!(game.spawn_random_tile(), None);
        assert_eq!(*game.grid(), full);
    }

    #[test]
    fn test_spawn_only_places_two_or_four() {
        let mut game = Game::from_grid(Grid::empty(), 0, scripted(&[(0, 0), (0, 8), (0, 4)]));

        assert_eq!(game.spawn_random_tile(), Some(SpawnedTile { row: 0, col: 0, value: 2 }));
        assert_eq!(game.grid().count_tiles(), 1);
        assert_eq!(game.spawn_random_tile(), Some(SpawnedTile { row: 0, col: 1, value: 2 }));
        assert_eq!(game.spawn_random_tile(), Some(SpawnedTile { row: 0, col: 2, value: 4 }));
        assert_eq!(game.grid().count_tiles(), 3);
    }

    #[test]
    fn test_from_grid_uses_default_config() {
        let game = Game::from_grid(Grid::empty(), 0, scripted(&[]));
        assert_eq!(*game.config(), GameConfig::default());

        let config = GameConfig::default().with_four_probability(0.5).with_initial_tiles(3);
        let game = Game::with_spawner(config.clone(), scripted(&[])).unwrap();
        assert_eq!(*game.config(), config);
        assert_eq!(game.grid().count_tiles(), 3);
    }

    #[test]
    fn test_terminal_grid() {
        let full = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut game = Game::from_grid(full, 100, scripted(&[]));

        assert!(game.is_terminal());
        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(game.legal_directions().is_empty());
        for dir in Direction::ALL {
            assert!(!game.move_tiles(dir));
        }
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn test_full_grid_with_pair_not_terminal() {
        let full = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 4],
        ]);
        let game = Game::from_grid(full, 0, scripted(&[]));
        assert!(!game.is_terminal());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_move_into_game_over() {
        // Merging the 8s leaves a single hole at (3, 3); a 2 there leaves
        // no equal neighbours anywhere.
        let start = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [8, 8, 2, 4],
        ]);
        let mut game = Game::from_grid(start, 0, scripted(&[(0, 2)]));
        assert_eq!(game.status(), GameStatus::Playing);

        let outcome = game.play(Direction::Left);

        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 16);
        assert_eq!(outcome.spawned, Some(SpawnedTile { row: 3, col: 3, value: 2 }));
        assert_eq!(game.grid().row(3), [16, 2, 4, 2]);
        assert!(outcome.game_over);
        assert_eq!(outcome.status, GameStatus::GameOver);
        assert!(game.is_over());

        // Further moves are refused and never report the transition again
        let again = game.play(Direction::Left);
        assert!(!again.changed);
        assert!(!again.game_over);
    }

    #[test]
    fn test_reset() {
        let start = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut game = Game::from_grid(start, 40, GameRng::new(3));
        game.move_tiles(Direction::Left);

        game.reset();

        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.grid().count_tiles(), 2);
    }

    #[test]
    fn test_reset_leaves_game_over() {
        let full = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut game = Game::from_grid(full, 0, GameRng::new(11));
        assert!(game.is_over());

        game.reset();
        assert!(!game.is_over());
        assert!(!game.legal_directions().is_empty());
    }
}
