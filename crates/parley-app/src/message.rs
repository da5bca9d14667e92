//! Message types for the application (TEA pattern)

use parley_core::{Connectivity, Document, Session};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// Flip light↔dark and persist the preference
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Change the current location to the given path
    Navigate(String),

    // ─────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────
    /// Request a refresh of the active chat's document list
    RefreshDocuments,

    /// A background document fetch completed
    ///
    /// `seq` is the refresh ticket the fetch was issued under; stale
    /// sequences are discarded by the registry.
    DocumentsFetched {
        seq: u64,
        result: std::result::Result<Vec<Document>, String>,
    },

    // ─────────────────────────────────────────────────────────
    // External collaborators
    // ─────────────────────────────────────────────────────────
    /// Connectivity edge reported by the monitor
    ConnectivityChanged(Connectivity),

    /// Replacement session snapshot from the auth collaborator
    SessionUpdated(Session),
}
