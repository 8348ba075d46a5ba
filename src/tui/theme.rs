//! Colour palettes

use clap::ValueEnum;
use ratatui::style::Color;

/// Which palette to draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    /// Scrambled word, dialog border
    pub primary: Color,
    /// Score, action hints
    pub secondary: Color,
    /// Wrong guess
    pub error: Color,
}

const PURPLE_200: Color = Color::Rgb(0xBB, 0x86, 0xFC);
const PURPLE_500: Color = Color::Rgb(0x62, 0x00, 0xEE);
const TEAL_200: Color = Color::Rgb(0x03, 0xDA, 0xC5);
const TEAL_700: Color = Color::Rgb(0x01, 0x87, 0x86);

impl ThemeMode {
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                // Keep the terminal's own background
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                primary: PURPLE_200,
                secondary: TEAL_200,
                error: Color::Rgb(0xCF, 0x66, 0x79),
            },
            ThemeMode::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                primary: PURPLE_500,
                secondary: TEAL_700,
                error: Color::Rgb(0xB0, 0x00, 0x20),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_ne!(dark, light);
        assert_eq!(light.background, Color::White);
        assert_eq!(dark.background, Color::Reset);
    }

    #[test]
    fn test_error_colour_stands_out() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let palette = mode.palette();
            assert_ne!(palette.error, palette.text);
            assert_ne!(palette.error, palette.primary);
        }
    }
}
