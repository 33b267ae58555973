//! A game wired to a high score store.
//!
//! The engine reports the Playing → GameOver transition through
//! `MoveOutcome::game_over`; `Session` is the caller that reacts to it by
//! handing the final score to the store, exactly once per game.

use log::warn;

use crate::core::direction::Direction;
use crate::core::rng::{GameRng, TileSpawner};
use crate::engine::{Game, MoveOutcome};
use crate::highscore::{HighScoreError, HighScoreStore};

/// Result of a move made through a session.
#[derive(Debug)]
pub struct SessionMove {
    pub outcome: MoveOutcome,
    /// Set when this move ended the game and beat the stored high score.
    pub new_high_score: bool,
    /// Set when this move ended the game but the score could not be recorded.
    pub record_error: Option<HighScoreError>,
}

/// One game plus the store its final score goes to.
#[derive(Debug)]
pub struct Session<H: HighScoreStore, S: TileSpawner = GameRng> {
    game: Game<S>,
    scores: H,
}

impl<H: HighScoreStore, S: TileSpawner> Session<H, S> {
    pub fn new(game: Game<S>, scores: H) -> Self {
        Self { game, scores }
    }

    /// Apply a move; on the move that ends the game, record the score.
    ///
    /// The move always takes effect and its outcome is always returned. A
    /// failed store is reported in `record_error`.
    pub fn play(&mut self, direction: Direction) -> SessionMove {
        let outcome = self.game.play(direction);
        let mut result = SessionMove {
            outcome,
            new_high_score: false,
            record_error: None,
        };
        if outcome.game_over {
            match self.scores.record(self.game.score()) {
                Ok(new_high) => result.new_high_score = new_high,
                Err(e) => {
                    warn!("failed to record score {}: {}", self.game.score(), e);
                    result.record_error = Some(e);
                }
            }
        }
        result
    }

    /// Abandon the current game and start a fresh one.
    pub fn new_game(&mut self) {
        self.game.reset();
    }

    /// Best score stored so far.
    pub fn high_score(&self) -> Result<u64, HighScoreError> {
        self.scores.high_score()
    }

    #[must_use]
    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    #[must_use]
    pub fn scores(&self) -> &H {
        &self.scores
    }
}
