//! Terminal UI components using ratatui

mod terminal;
pub mod theme;
mod ui;

pub use terminal::Tui;
pub use theme::{Palette, ThemeMode};
pub use ui::render;
