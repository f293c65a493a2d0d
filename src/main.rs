mod board;
mod clock;
mod config;
mod display;
mod error;
mod font;
mod game_loop;
mod input;
mod judge;
mod pipes;
mod player;
mod score;
mod screens;
mod session;
#[cfg(test)]
mod testing;

use std::env;
use std::fs::File;
use std::io::{Stdout, stdout};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use board::{Board, Position};
use clock::SystemClock;
use config::GameConfig;
use display::TerminalDisplay;
use error::GameError;
use game_loop::{GameLoop, Outcome};
use input::TerminalInput;
use session::GameSession;

// ── Logging ─────────────────────────────────────────────────────────────────

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// The terminal is the game screen, so logs go to a file.
fn init_logging(path: &Path) -> Result<(), GameError> {
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Main ────────────────────────────────────────────────────────────────────

fn play(config: &GameConfig, display: &mut TerminalDisplay<Stdout, SystemClock>) -> Result<Outcome, GameError> {
    let mut clock = SystemClock::new();
    let mut input = TerminalInput::new();

    if config.show_intro {
        screens::start_screen(display, &mut clock, config.text_scroll)?;
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = GameSession::new(Board::new(), Position::new(0, 0)).into_handle();
    let outcome = GameLoop::new(session, display, &mut input, &mut clock, rng).run()?;

    if let Outcome::Finished(total) = outcome {
        screens::game_over_screen(display, total, config.text_scroll)?;
    }
    Ok(outcome)
}

fn main() -> anyhow::Result<()> {
    init_logging(&config::log_file_from_env()).context("failed to start logging")?;
    let config = GameConfig::from_env();
    info!(?config, "starting flappy astronaut");

    let mut display = TerminalDisplay::enter(stdout(), SystemClock::new()).context("failed to set up the terminal")?;
    let outcome = play(&config, &mut display);
    display.leave().context("failed to restore the terminal")?;

    match outcome.context("game aborted")? {
        Outcome::Finished(total) => println!("Game Over! Score: {total}"),
        Outcome::Quit => println!("Bye!"),
    }
    Ok(())
}
