//! Application screen state management
//!
//! Translates key presses into session operations and keeps the latest
//! snapshot for rendering. Two screens exist:
//! - Playing: scrambled word, guess input, skip/submit
//! - Final score: modal dialog offering to play again or exit

use crossterm::event::KeyCode;
use std::sync::mpsc::Receiver;

use super::state::{GameSession, GameState};
use crate::game::GameError;

/// Longest guess the input line accepts
pub const MAX_GUESS_LENGTH: usize = 24;

/// The current application screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A round is in progress
    Playing,
    /// Every round has been played
    FinalScore { score: u32 },
}

/// Main application coordinator
pub struct AppCoordinator {
    session: GameSession,
    updates: Receiver<GameState>,
    /// Latest snapshot published by the session
    snapshot: GameState,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppCoordinator {
    /// Wrap a session and subscribe to its snapshots
    pub fn new(mut session: GameSession) -> Self {
        let updates = session.subscribe();
        let snapshot = session.state().clone();
        let mut coordinator = Self {
            session,
            updates,
            snapshot,
            should_quit: false,
        };
        coordinator.sync();
        coordinator
    }

    /// Which screen to show for the latest snapshot
    pub fn screen(&self) -> Screen {
        if self.snapshot.is_game_over {
            Screen::FinalScore {
                score: self.snapshot.score,
            }
        } else {
            Screen::Playing
        }
    }

    pub fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    /// The guess being typed
    pub fn guess(&self) -> &str {
        self.session.pending_guess()
    }

    /// Number of rounds in this game
    pub fn round_limit(&self) -> u32 {
        self.session.config().round_limit
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a key press to the current screen
    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), GameError> {
        match self.screen() {
            Screen::Playing => match code {
                KeyCode::Esc => self.quit(),
                KeyCode::Enter => self.on_submit()?,
                KeyCode::Tab => self.on_skip()?,
                KeyCode::Backspace => self.on_backspace(),
                KeyCode::Char(c) => self.on_char(c),
                _ => {}
            },
            Screen::FinalScore { .. } => match code {
                KeyCode::Esc | KeyCode::Char('q') => self.quit(),
                KeyCode::Enter | KeyCode::Char('r') => self.on_play_again()?,
                _ => {}
            },
        }
        Ok(())
    }

    /// Append a typed character to the guess (letters only)
    pub fn on_char(&mut self, c: char) {
        if !c.is_alphabetic() || self.guess().chars().count() >= MAX_GUESS_LENGTH {
            return;
        }
        let mut guess = self.guess().to_string();
        guess.push(c);
        self.session.update_guess(guess);
        self.sync();
    }

    /// Delete the last character of the guess
    pub fn on_backspace(&mut self) {
        let mut guess = self.guess().to_string();
        if guess.pop().is_none() {
            return;
        }
        self.session.update_guess(guess);
        self.sync();
    }

    /// Submit the guess
    pub fn on_submit(&mut self) -> Result<(), GameError> {
        self.session.submit_guess()?;
        self.sync();
        Ok(())
    }

    /// Skip the current word
    pub fn on_skip(&mut self) -> Result<(), GameError> {
        self.session.skip()?;
        self.sync();
        Ok(())
    }

    /// Start a new game from the final score dialog
    pub fn on_play_again(&mut self) -> Result<(), GameError> {
        self.session.reset()?;
        self.sync();
        Ok(())
    }

    /// Take the newest published snapshot
    fn sync(&mut self) {
        if let Some(latest) = self.updates.try_iter().last() {
            self.snapshot = latest;
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &GameSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::GameConfig;
    use crate::game::SCORE_INCREASE;

    fn new_app() -> AppCoordinator {
        AppCoordinator::new(GameSession::seeded(GameConfig::default(), 42).unwrap())
    }

    fn type_word(app: &mut AppCoordinator, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
    }

    fn answer(app: &AppCoordinator) -> String {
        app.session().target_word().to_string()
    }

    #[test]
    fn test_starts_playing() {
        let app = new_app();
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.snapshot().current_word_count, 1);
        assert_eq!(app.round_limit(), 10);
        assert!(app.guess().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_builds_guess() {
        let mut app = new_app();
        type_word(&mut app, "abc");
        assert_eq!(app.guess(), "abc");

        app.handle_key(KeyCode::Backspace).unwrap();
        assert_eq!(app.guess(), "ab");
    }

    #[test]
    fn test_non_letters_ignored() {
        let mut app = new_app();
        type_word(&mut app, "a1 -b");
        assert_eq!(app.guess(), "ab");
    }

    #[test]
    fn test_guess_length_capped() {
        let mut app = new_app();
        type_word(&mut app, &"a".repeat(MAX_GUESS_LENGTH + 5));
        assert_eq!(app.guess().len(), MAX_GUESS_LENGTH);
    }

    #[test]
    fn test_backspace_on_empty_guess() {
        let mut app = new_app();
        app.handle_key(KeyCode::Backspace).unwrap();
        assert!(app.guess().is_empty());
    }

    #[test]
    fn test_enter_submits_correct_guess() {
        let mut app = new_app();
        let word = answer(&app);
        type_word(&mut app, &word);
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.snapshot().score, SCORE_INCREASE);
        assert_eq!(app.snapshot().current_word_count, 2);
        assert!(app.guess().is_empty());
    }

    #[test]
    fn test_enter_submits_wrong_guess() {
        let mut app = new_app();
        type_word(&mut app, "zzz");
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(app.snapshot().is_guessed_word_wrong);
        assert_eq!(app.guess(), "zzz");

        // Editing clears the error
        app.handle_key(KeyCode::Backspace).unwrap();
        assert!(!app.snapshot().is_guessed_word_wrong);
    }

    #[test]
    fn test_tab_skips() {
        let mut app = new_app();
        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(app.snapshot().current_word_count, 2);
        assert_eq!(app.snapshot().score, 0);
    }

    #[test]
    fn test_snapshot_tracks_session() {
        let mut app = new_app();
        app.handle_key(KeyCode::Tab).unwrap();
        type_word(&mut app, "zzz");
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.snapshot(), app.session().state());
    }

    #[test]
    fn test_final_score_screen_after_last_round() {
        let mut app = new_app();
        for _ in 0..10 {
            let word = answer(&app);
            type_word(&mut app, &word);
            app.handle_key(KeyCode::Enter).unwrap();
        }

        assert_eq!(app.screen(), Screen::FinalScore { score: 200 });
    }

    #[test]
    fn test_final_score_screen_ignores_typing() {
        let mut app = new_app();
        for _ in 0..10 {
            app.handle_key(KeyCode::Tab).unwrap();
        }

        type_word(&mut app, "abc");
        app.handle_key(KeyCode::Tab).unwrap();
        assert!(app.guess().is_empty());
        assert_eq!(app.screen(), Screen::FinalScore { score: 0 });
    }

    #[test]
    fn test_play_again() {
        let mut app = new_app();
        for _ in 0..10 {
            app.handle_key(KeyCode::Tab).unwrap();
        }

        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.snapshot().current_word_count, 1);
        assert_eq!(app.snapshot().score, 0);
    }

    #[test]
    fn test_exit_from_final_score() {
        let mut app = new_app();
        for _ in 0..10 {
            app.handle_key(KeyCode::Tab).unwrap();
        }

        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_quits_while_playing() {
        let mut app = new_app();
        app.handle_key(KeyCode::Esc).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_a_letter_while_playing() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.guess(), "q");
    }
}
