//! Core domain types shared across the Parley crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed message for the 404 page
pub const NOT_FOUND_MESSAGE: &str = "This page could not be found.";

/// Fixed message for the offline banner
pub const OFFLINE_MESSAGE: &str = "Website in offline check your network.";

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Active color mode. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode (Light↔Dark)
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Root-level marker consumed by the rendering layer
    pub fn class_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Connectivity
// ─────────────────────────────────────────────────────────────────────────────

/// Last observed network reachability.
///
/// Initialized from a probe at construction; after that it only changes on
/// transition events reported by the connectivity monitor. Offline is sticky
/// until the next full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
}

impl Connectivity {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    pub fn is_offline(self) -> bool {
        self == Connectivity::Offline
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

/// A file/attachment record associated with a chat session.
///
/// Returned by the document-listing endpoint. Only `id` is guaranteed; the
/// rest is display metadata and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MIME type or short kind label, e.g. "application/pdf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Label to show in document lists: the name when present, else the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Authenticated user identity, as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Externally owned session snapshot.
///
/// The shell only reads this; replacement snapshots arrive whole from the
/// auth collaborator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    /// Present iff the user is authenticated
    pub user: Option<UserInfo>,

    /// True while the collaborator has an operation in flight
    pub loading: bool,

    /// Active chat identifier, if a chat is open
    pub chat_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error pages
// ─────────────────────────────────────────────────────────────────────────────

/// Error view contract: status and content are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: u16,
    pub content: String,
}

impl ErrorPage {
    pub fn new(status: u16, content: impl Into<String>) -> Self {
        Self {
            status,
            content: content.into(),
        }
    }

    /// The fixed 404 page
    pub fn not_found() -> Self {
        Self::new(404, NOT_FOUND_MESSAGE)
    }

    /// The fixed 503 offline banner
    pub fn offline() -> Self {
        Self::new(503, OFFLINE_MESSAGE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application phase
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle phase driving the outer loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal operation
    #[default]
    Running,

    /// Tear down and rebuild all state (connectivity regained)
    Reloading,

    /// Exit the application
    Quitting,
}
