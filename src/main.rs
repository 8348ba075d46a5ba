//! Unscramble - a terminal word game
//!
//! Guess the word behind the scrambled letters. Ten words a game.

mod app;
mod cli;
mod game;
mod tui;

use app::{AppCoordinator, GameSession};
use clap::Parser;
use cli::Args;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use game::GameError;
use std::io;
use thiserror::Error;
use tracing::info;
use tui::{Palette, Tui};

/// Errors that end the program
#[derive(Debug, Error)]
pub enum AppError {
    /// Game was configured with a word bank that cannot support it
    #[error(transparent)]
    Game(#[from] GameError),
    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// No platform data directory for the default log file
    #[error("could not determine data directory")]
    NoDataDirectory,
    /// A global tracing subscriber was already installed
    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let log_path = cli::init_logging(&args)?;
    info!(log = %log_path.display(), "unscramble starting");

    let config = args.game_config();
    let session = match args.seed {
        Some(seed) => GameSession::seeded(config, seed)?,
        None => GameSession::new(config)?,
    };
    let mut app = AppCoordinator::new(session);
    let palette = args.theme.palette();

    let mut terminal = Tui::new()?;
    terminal.enter()?;
    let result = run(&mut terminal, &mut app, &palette);
    let restored = terminal.exit();

    info!(score = app.snapshot().score, "unscramble exiting");
    result?;
    restored?;
    Ok(())
}

/// Main event loop
fn run(terminal: &mut Tui, app: &mut AppCoordinator, palette: &Palette) -> Result<(), AppError> {
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, app, palette))?;

        // Nothing changes without input, so block until the next event
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.quit();
            } else {
                app.handle_key(key.code)?;
            }
        }
    }
    Ok(())
}
