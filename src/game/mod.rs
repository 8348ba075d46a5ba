//! Game logic: word bank, scrambling, guess checking

pub mod dictionary;
pub mod validation;

pub use dictionary::{scramble_letters, WordBank};
pub use validation::{check_guess, GuessOutcome};

use thiserror::Error;

/// Number of words (rounds) in a standard game.
pub const MAX_NO_OF_WORDS: u32 = 10;

/// Points awarded for each correctly unscrambled word.
pub const SCORE_INCREASE: u32 = 20;

/// Configuration-level failures. None of these are recoverable by the running
/// session: they mean the game was set up with a word bank that cannot
/// support it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every word in the bank has already been used this session
    #[error("word bank exhausted: need {needed} distinct words, only {available} available")]
    ExhaustedWordBank { needed: usize, available: usize },
    /// A game must have at least one round
    #[error("round limit must be at least 1")]
    InvalidRoundLimit,
    /// Word has no permutation different from itself
    #[error("word {0:?} cannot be scrambled")]
    UnscramblableWord(String),
}
