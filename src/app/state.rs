//! Game session state management

use crate::game::{
    check_guess, scramble_letters, GameError, GuessOutcome, WordBank, MAX_NO_OF_WORDS,
    SCORE_INCREASE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info};

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rounds (words) per game
    pub round_limit: u32,
    /// Points awarded per correct guess
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    /// Check the config can be played to completion with `bank`.
    pub fn validate(&self, bank: &WordBank) -> Result<(), GameError> {
        if self.round_limit == 0 {
            return Err(GameError::InvalidRoundLimit);
        }
        let needed = self.round_limit as usize;
        if needed > bank.len() {
            return Err(GameError::ExhaustedWordBank {
                needed,
                available: bank.len(),
            });
        }
        Ok(())
    }
}

/// Snapshot of the game as the UI sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Scrambled letters of the current word
    pub current_scrambled_word: String,
    /// Current round, starting at 1
    pub current_word_count: u32,
    /// Points so far
    pub score: u32,
    /// Whether the last submitted guess was wrong
    pub is_guessed_word_wrong: bool,
    /// Whether the last round has been played
    pub is_game_over: bool,
}

impl GameState {
    fn initial(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }
}

/// One game of unscramble.
///
/// Owns the hidden target word, the words already played, and the guess the
/// player is typing. Every operation publishes a fresh [`GameState`] to the
/// subscribers.
pub struct GameSession<R: Rng = StdRng> {
    bank: WordBank,
    config: GameConfig,
    rng: R,
    state: GameState,
    /// Unscrambled form of `state.current_scrambled_word`
    target: String,
    /// Words finished this session (never includes `target`)
    used_words: HashSet<String>,
    pending_guess: String,
    subscribers: Vec<Sender<GameState>>,
}

impl GameSession<StdRng> {
    /// Start a game on the standard bank with an OS-seeded RNG.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(WordBank::standard().clone(), config, StdRng::from_os_rng())
    }

    /// Start a reproducible game on the standard bank.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(
            WordBank::standard().clone(),
            config,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game on a given bank and RNG.
    pub fn with_rng(bank: WordBank, config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate(&bank)?;

        let used_words = HashSet::new();
        let (target, scrambled) = next_word(&bank, &used_words, &mut rng)?;
        info!(
            round_limit = config.round_limit,
            words = bank.len(),
            "starting new game"
        );

        Ok(Self {
            bank,
            config,
            rng,
            state: GameState::initial(scrambled),
            target,
            used_words,
            pending_guess: String::new(),
            subscribers: Vec::new(),
        })
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The guess being typed
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Receive a snapshot after every change. The current snapshot is sent
    /// immediately.
    pub fn subscribe(&mut self) -> Receiver<GameState> {
        let (tx, rx) = mpsc::channel();
        // Receiver is still alive here, send cannot fail
        let _ = tx.send(self.state.clone());
        self.subscribers.push(tx);
        rx
    }

    /// Replace the pending guess. Clears the wrong-guess flag.
    /// Ignored once the game is over.
    pub fn update_guess(&mut self, input: impl Into<String>) {
        if self.state.is_game_over {
            return;
        }
        self.pending_guess = input.into();
        self.state.is_guessed_word_wrong = false;
        self.publish();
    }

    /// Check the pending guess against the current word.
    ///
    /// A correct guess scores and moves to the next round. A wrong one only
    /// raises the wrong-guess flag, the player may edit and retry or skip.
    pub fn submit_guess(&mut self) -> Result<(), GameError> {
        if self.state.is_game_over {
            return Ok(());
        }

        match check_guess(&self.pending_guess, &self.target) {
            GuessOutcome::Correct => {
                self.state.is_guessed_word_wrong = false;
                self.state.score += self.config.score_increase;
                self.pending_guess.clear();
                self.advance_round()?;
            }
            GuessOutcome::Wrong => {
                debug!(
                    guess = %self.pending_guess,
                    round = self.state.current_word_count,
                    "wrong guess"
                );
                self.state.is_guessed_word_wrong = true;
            }
        }

        self.publish();
        Ok(())
    }

    /// Give up on the current word. Score is unchanged.
    pub fn skip(&mut self) -> Result<(), GameError> {
        if self.state.is_game_over {
            return Ok(());
        }

        debug!(round = self.state.current_word_count, "word skipped");
        self.state.is_guessed_word_wrong = false;
        self.pending_guess.clear();
        self.advance_round()?;

        self.publish();
        Ok(())
    }

    /// Throw the game away and start over at round 1.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.used_words.clear();
        let (target, scrambled) = next_word(&self.bank, &self.used_words, &mut self.rng)?;

        self.target = target;
        self.state = GameState::initial(scrambled);
        self.pending_guess.clear();
        info!("game reset");

        self.publish();
        Ok(())
    }

    /// Move to the next word, or end the game after the last one.
    fn advance_round(&mut self) -> Result<(), GameError> {
        if self.state.current_word_count >= self.config.round_limit {
            self.state.is_game_over = true;
            info!(
                score = self.state.score,
                rounds = self.state.current_word_count,
                "game over"
            );
            return Ok(());
        }

        self.used_words.insert(self.target.clone());
        let (target, scrambled) = next_word(&self.bank, &self.used_words, &mut self.rng)?;

        self.target = target;
        self.state.current_scrambled_word = scrambled;
        self.state.current_word_count += 1;
        debug!(
            round = self.state.current_word_count,
            score = self.state.score,
            "next round"
        );
        Ok(())
    }

    /// Push the current snapshot, dropping subscribers that hung up.
    fn publish(&mut self) {
        let snapshot = &self.state;
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn target_word(&self) -> &str {
        &self.target
    }
}

/// Pick an unused word and scramble it
fn next_word<R: Rng + ?Sized>(
    bank: &WordBank,
    used: &HashSet<String>,
    rng: &mut R,
) -> Result<(String, String), GameError> {
    let word = bank.pick_next_word(used, rng)?.to_string();
    let scrambled = scramble_letters(&word, rng)?;
    Ok((word, scrambled))
}
