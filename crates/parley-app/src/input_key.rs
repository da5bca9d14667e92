//! Terminal-agnostic key representation
//!
//! Decouples the handler layer from crossterm; the TUI crate converts raw
//! key events into these before dispatch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Plain character key
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    Up,
    Down,
}
