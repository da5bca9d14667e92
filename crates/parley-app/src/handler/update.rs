//! Main update function - handles state transitions (TEA pattern)

use parley_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{connectivity, documents, keys, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_animation();
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            let mode = state.theme.toggle();
            info!("Theme switched to {}", mode.class_name());
            UpdateResult::none()
        }

        Message::Navigate(path) => {
            debug!("Navigating to {}", path);
            state.navigate(path);
            UpdateResult::none()
        }

        Message::RefreshDocuments => documents::handle_refresh(state),

        Message::DocumentsFetched { seq, result } => {
            documents::handle_fetched(state, seq, result)
        }

        Message::ConnectivityChanged(connectivity) => {
            connectivity::handle_change(state, connectivity)
        }

        Message::SessionUpdated(session) => {
            debug!(
                authenticated = session.is_authenticated(),
                loading = session.loading,
                chat_id = ?session.chat_id,
                "Session snapshot replaced"
            );
            state.session = session;
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{Task, UpdateAction};
    use crate::input_key::InputKey;
    use crate::theme::ThemeController;
    use parley_core::{Connectivity, Session, ThemeMode, UserInfo};

    fn authed_state(chat_id: Option<&str>) -> AppState {
        AppState::new(
            Session {
                user: Some(UserInfo {
                    id: "u1".to_string(),
                    name: "demo".to_string(),
                    email: None,
                }),
                loading: false,
                chat_id: chat_id.map(str::to_string),
            },
            Connectivity::Online,
            ThemeController::ephemeral(ThemeMode::Light),
            "/",
        )
    }

    #[test]
    fn test_quit_message() {
        let mut state = authed_state(None);
        update(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_toggle_theme_twice_returns_to_start() {
        let mut state = authed_state(None);
        update(&mut state, Message::ToggleTheme);
        assert_eq!(state.theme.mode(), ThemeMode::Dark);
        update(&mut state, Message::ToggleTheme);
        assert_eq!(state.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_navigate_message() {
        let mut state = authed_state(None);
        update(&mut state, Message::Navigate("/chat/xyz".to_string()));
        assert_eq!(state.location, "/chat/xyz");
    }

    #[test]
    fn test_refresh_without_chat_id_spawns_nothing() {
        let mut state = authed_state(None);
        let result = update(&mut state, Message::RefreshDocuments);
        assert!(result.action.is_none());
        assert!(result.message.is_none());
        assert!(state.registry.documents().is_empty());
    }

    #[test]
    fn test_refresh_with_chat_id_spawns_fetch() {
        let mut state = authed_state(Some("chat123"));
        let result = update(&mut state, Message::RefreshDocuments);

        match result.action {
            Some(UpdateAction::SpawnTask(Task::FetchDocuments { chat_id, .. })) => {
                assert_eq!(chat_id, "chat123");
            }
            other => panic!("expected FetchDocuments task, got {:?}", other),
        }
        assert!(state.registry.is_refreshing());
    }

    #[test]
    fn test_key_dispatch_produces_follow_up() {
        let mut state = authed_state(None);
        let result = update(&mut state, Message::Key(InputKey::Char('t')));
        assert!(matches!(result.message, Some(Message::ToggleTheme)));
    }

    #[test]
    fn test_session_updated_replaces_snapshot() {
        let mut state = authed_state(Some("chat123"));
        update(&mut state, Message::SessionUpdated(Session::default()));
        assert!(!state.is_authenticated());
        assert!(state.session.chat_id.is_none());
    }

    #[test]
    fn test_tick_advances_animation() {
        let mut state = authed_state(None);
        update(&mut state, Message::Tick);
        assert_eq!(state.animation_frame, 1);
    }
}
