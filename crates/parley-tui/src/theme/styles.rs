//! Semantic style builders over a resolved palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.primary)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.error).add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn panel_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.divider))
}

pub fn banner_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(error(p))
        .style(Style::default().bg(p.background))
}

#[cfg(test)]
mod tests {
    use super::super::palette;
    use super::*;

    #[test]
    fn test_accent_uses_primary_token() {
        let style = accent(&palette::LIGHT);
        assert_eq!(style.fg, Some(palette::LIGHT.primary));
    }

    #[test]
    fn test_error_style_is_bold() {
        let style = error(&palette::DARK);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
