//! Key event handlers
//!
//! Key presses translate to follow-up messages; no state is mutated here.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Map a key press to a follow-up message, if any
pub(crate) fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('r') => Some(Message::RefreshDocuments),

        // Navigation shortcuts
        InputKey::Char('h') => Some(Message::Navigate("/".to_string())),
        InputKey::Char('c') => Some(Message::Navigate("/chat".to_string())),
        InputKey::Char('l') => Some(Message::Navigate("/login".to_string())),
        InputKey::Char('s') => Some(Message::Navigate("/signup".to_string())),
        InputKey::Char('f') => Some(Message::Navigate("/forgot".to_string())),

        _ => None,
    }
}
