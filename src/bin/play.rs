use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rust_2048::{Direction, Game, GameConfig, GameRng, JsonFileHighScores, Session};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Seed for tile spawning (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// High score file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    scores: Option<PathBuf>,

    /// Probability that a spawned tile is a 4
    #[arg(long, value_name = "P", default_value_t = 0.1)]
    four_probability: f64,
}

const HELP: &str = "w/a/s/d or k/h/j/l to move, n for a new game, q to quit";

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("spawn seed {}", rng.seed());
    let config = GameConfig::new()
        .with_four_probability(cli.four_probability)
        .with_seed(rng.seed());
    let game = Game::with_spawner(config, rng).context("invalid game configuration")?;

    let scores = match cli.scores {
        Some(path) => JsonFileHighScores::new(path),
        None => JsonFileHighScores::in_data_dir()?,
    };
    info!("high scores at {}", scores.path().display());

    let mut session = Session::new(game, scores);
    println!("{}", HELP);
    render(&session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(key) = line.trim().chars().next() else {
            continue;
        };

        match key {
            'q' | 'Q' => break,
            'n' | 'N' => session.new_game(),
            _ => match Direction::from_key(key) {
                Some(direction) => {
                    let result = session.play(direction);
                    if let Some(e) = &result.record_error {
                        println!("High score could not be saved: {}", e);
                    }
                    if result.outcome.game_over {
                        render(&session)?;
                        println!("Game over! Final score: {}", session.game().score());
                        if result.new_high_score {
                            println!("New high score!");
                        }
                        println!("Press n for a new game or q to quit.");
                        continue;
                    }
                }
                None => println!("{}", HELP),
            },
        }
        render(&session)?;
    }

    Ok(())
}

fn render(session: &Session<JsonFileHighScores>) -> Result<()> {
    let game = session.game();
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write!(out, "{}", game.grid())?;
    writeln!(
        out,
        "Score: {}   Best: {}",
        game.score(),
        session.high_score().unwrap_or(0)
    )?;
    out.flush()?;
    Ok(())
}
