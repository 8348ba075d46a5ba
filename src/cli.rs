//! Command-line configuration and logging setup

use crate::app::GameConfig;
use crate::game::{MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::tui::ThemeMode;
use crate::AppError;
use clap::Parser;
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "unscramble.log";

/// Unscramble terminal word game
#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "Unscramble the word using all the letters")]
#[command(version)]
pub struct Args {
    /// Number of words per game
    #[arg(short, long, default_value_t = MAX_NO_OF_WORDS, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Seed for the word picker, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,

    /// Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file. Defaults to unscramble.log in the platform data directory.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            round_limit: self.rounds,
            score_increase: SCORE_INCREASE,
        }
    }

    /// Where logs go: `--log-file`, else the default location
    pub fn log_path(&self) -> Result<PathBuf, AppError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }
}

/// `unscramble.log` under the OS-standard local data directory
pub fn default_log_path() -> Result<PathBuf, AppError> {
    ProjectDirs::from("", "", "unscramble")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        .ok_or(AppError::NoDataDirectory)
}

/// Send tracing output to the log file. The terminal belongs to the UI, so
/// nothing is ever logged to stdout or stderr.
pub fn init_logging(args: &Args) -> Result<PathBuf, AppError> {
    let path = args.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(path)
}
