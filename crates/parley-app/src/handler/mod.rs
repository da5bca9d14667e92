//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers
//! - `documents`: Document refresh/completion handlers
//! - `connectivity`: Connectivity edge handlers

pub(crate) mod connectivity;
pub(crate) mod documents;
pub(crate) mod keys;
pub(crate) mod update;

// Re-export main entry point
pub use update::update;

use crate::message::Message;

/// Background work the event loop should spawn after update
#[derive(Debug, Clone)]
pub enum Task {
    /// Fetch the document list for a chat, stamped with a refresh ticket
    FetchDocuments { chat_id: String, seq: u64 },
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),

    /// Tear down and rebuild all shell state (connectivity regained)
    Reload,
}

/// Result of processing a message: optional follow-up message and/or action
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
