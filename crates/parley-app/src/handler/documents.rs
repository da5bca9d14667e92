//! Document refresh handlers

use parley_core::Document;

use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Start a document refresh for the active chat.
///
/// Without an active chat id the registry declines the refresh and this
/// is a no-op; otherwise the loop is told to spawn the fetch.
pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    match state.registry.begin_refresh(state.session.chat_id.as_deref()) {
        Some(ticket) => UpdateResult::action(UpdateAction::SpawnTask(Task::FetchDocuments {
            chat_id: ticket.chat_id,
            seq: ticket.seq,
        })),
        None => UpdateResult::none(),
    }
}

/// Apply a completed fetch; the registry discards stale sequences and
/// swallows failures (documents stay stale-but-consistent).
pub(crate) fn handle_fetched(
    state: &mut AppState,
    seq: u64,
    result: std::result::Result<Vec<Document>, String>,
) -> UpdateResult {
    state.registry.complete_refresh(seq, result);
    UpdateResult::none()
}
