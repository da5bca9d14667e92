//! Per-mode color palettes.
//!
//! Two fixed palettes, one per theme mode. `design_tokens` is the only
//! way to get one; it is a pure lookup so the same mode always yields
//! the same tokens.

use parley_core::ThemeMode;
use ratatui::style::Color;

/// Resolved color tokens for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary accent (titles, highlights, active borders)
    pub primary: Color,
    /// Divider and inactive border color
    pub divider: Color,
    /// Terminal background
    pub background: Color,
    /// Elevated surface (menu rail, banner body)
    pub surface: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary/muted text
    pub text_secondary: Color,
    /// Error banner accent
    pub error: Color,
}

/// Light mode: amber accents on a white background.
pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(255, 193, 7),
    divider: Color::Rgb(255, 224, 130),
    background: Color::White,
    surface: Color::Rgb(255, 248, 225),
    text_primary: Color::Rgb(33, 33, 33),
    text_secondary: Color::Rgb(66, 66, 66),
    error: Color::Rgb(211, 47, 47),
};

/// Dark mode: deep-orange accents on a black background.
pub const DARK: Palette = Palette {
    primary: Color::Rgb(255, 87, 34),
    divider: Color::Rgb(230, 74, 25),
    background: Color::Black,
    surface: Color::Rgb(255, 204, 188),
    text_primary: Color::White,
    text_secondary: Color::Rgb(158, 158, 158),
    error: Color::Rgb(244, 63, 94),
};

/// Look up the token set for a theme mode.
pub fn design_tokens(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
