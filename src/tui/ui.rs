//! UI rendering using ratatui
//!
//! Layout while playing:
//! ┌──────────────────────────────────────────┐
//! │  UNSCRAMBLE                              │
//! ├──────────────────────────────────────────┤
//! │  3 of 10 words                 Score: 40 │
//! │  ╭────────────────────────────────────╮  │
//! │  │            P L E P A               │  │
//! │  │ Unscramble the word using all the  │  │
//! │  │ ┌Enter your word───────────────┐   │  │
//! │  │ │ appl_                        │   │  │
//! │  │ └──────────────────────────────┘   │  │
//! │  ╰────────────────────────────────────╯  │
//! │  [Tab] Skip               [Enter] Submit │
//! └──────────────────────────────────────────┘
//!
//! When the game is over the final score dialog is drawn on top.

use crate::app::{AppCoordinator, Screen};
use crate::tui::theme::Palette;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const TITLE: &str = "UNSCRAMBLE";
const INSTRUCTIONS: &str = "Unscramble the word using all the letters.";
const ENTER_YOUR_WORD: &str = "Enter your word";
const WRONG_GUESS: &str = "Wrong Guess!";
const SKIP: &str = "[Tab] Skip";
const SUBMIT: &str = "[Enter] Submit";
const CONGRATULATIONS: &str = "Congratulations!";
const PLAY_AGAIN: &str = "[Enter] Play Again";
const EXIT: &str = "[Esc] Exit";

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &AppCoordinator, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    render_game(frame, area, app, palette);

    if let Screen::FinalScore { score } = app.screen() {
        render_final_score(frame, area, score, palette);
    }
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, area: Rect, app: &AppCoordinator, palette: &Palette) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Word count | score
            Constraint::Length(1), // Spacer
            Constraint::Length(9), // Card
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Action buttons
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(palette.primary).bold())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(title, layout[0]);

    render_status(frame, layout[1], app, palette);
    render_card(frame, layout[3], app, palette);
    render_actions(frame, layout[5], palette);

    let footer = Paragraph::new("Esc Quit")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[7]);
}

/// Word count on the left, score on the right
fn render_status(frame: &mut Frame, area: Rect, app: &AppCoordinator, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let snapshot = app.snapshot();
    let word_count = Paragraph::new(format_word_count(
        snapshot.current_word_count,
        app.round_limit(),
    ))
    .style(Style::default().fg(palette.text));
    frame.render_widget(word_count, columns[0]);

    let score = Paragraph::new(format!("Score: {}", snapshot.score))
        .style(Style::default().fg(palette.secondary).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score, columns[1]);
}

/// Scrambled word, instructions, and the guess input
fn render_card(frame: &mut Frame, area: Rect, app: &AppCoordinator, palette: &Palette) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.muted));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Scrambled word
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Length(3), // Input
        ])
        .horizontal_margin(1)
        .split(inner);

    let snapshot = app.snapshot();
    let scrambled = Paragraph::new(format_scrambled_word(&snapshot.current_scrambled_word))
        .style(Style::default().fg(palette.primary).bold())
        .alignment(Alignment::Center);
    frame.render_widget(scrambled, layout[1]);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, layout[3]);

    let (label, colour) = input_label(snapshot.is_guessed_word_wrong, palette);
    let input = Paragraph::new(format!("{}_", app.guess()))
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colour))
                .title(Span::styled(label, Style::default().fg(colour))),
        );
    frame.render_widget(input, layout[4]);
}

/// Skip and submit hints, side by side
fn render_actions(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let skip = Paragraph::new(SKIP)
        .style(Style::default().fg(palette.secondary))
        .alignment(Alignment::Center);
    frame.render_widget(skip, columns[0]);

    let submit = Paragraph::new(SUBMIT)
        .style(Style::default().fg(palette.primary).bold())
        .alignment(Alignment::Center);
    frame.render_widget(submit, columns[1]);
}

/// Modal dialog shown once every round has been played
fn render_final_score(frame: &mut Frame, area: Rect, score: u32, palette: &Palette) {
    let dialog_area = centered_rect(40, 7, area);
    frame.render_widget(Clear, dialog_area);

    let dialog = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .title(Span::styled(
            CONGRATULATIONS,
            Style::default().fg(palette.primary).bold(),
        ))
        .style(Style::default().bg(palette.background));
    let inner = dialog.inner(dialog_area);
    frame.render_widget(dialog, dialog_area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Score
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let scored = Paragraph::new(format!("You scored: {}", score))
        .style(Style::default().fg(palette.text).bold())
        .alignment(Alignment::Center);
    frame.render_widget(scored, layout[1]);

    let buttons = Paragraph::new(format!("{}   {}", PLAY_AGAIN, EXIT))
        .style(Style::default().fg(palette.secondary))
        .alignment(Alignment::Center);
    frame.render_widget(buttons, layout[3]);
}

/// Input label and colour for the wrong-guess flag
fn input_label(is_guessed_word_wrong: bool, palette: &Palette) -> (&'static str, Color) {
    if is_guessed_word_wrong {
        (WRONG_GUESS, palette.error)
    } else {
        (ENTER_YOUR_WORD, palette.muted)
    }
}

/// Spread the scrambled letters out: "pelpa" -> "P E L P A"
fn format_scrambled_word(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word_count(count: u32, limit: u32) -> String {
    format!("{} of {} words", count, limit)
}

/// A `width` x `height` rect centred in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
