//! Application state (Model in TEA pattern)

use parley_core::{AppPhase, Connectivity, Session};

use crate::registry::DocumentRegistry;
use crate::theme::ThemeController;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Current location path, e.g. "/chat/abc123"
    pub location: String,

    /// Externally owned session snapshot (read-only here)
    pub session: Session,

    /// Theme mode owner
    pub theme: ThemeController,

    /// Last observed connectivity; Offline is sticky until reload
    pub connectivity: Connectivity,

    /// Single owner of the active chat's document list
    pub registry: DocumentRegistry,

    /// Animation frame counter for the loading indicator
    pub animation_frame: u64,
}

impl AppState {
    pub fn new(
        session: Session,
        connectivity: Connectivity,
        theme: ThemeController,
        location: impl Into<String>,
    ) -> Self {
        Self {
            phase: AppPhase::Running,
            location: location.into(),
            session,
            theme,
            connectivity,
            registry: DocumentRegistry::new(),
            animation_frame: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Signals
    // ─────────────────────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_offline(&self) -> bool {
        self.connectivity.is_offline()
    }

    // ─────────────────────────────────────────────────────────
    // Phase Helpers
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn should_reload(&self) -> bool {
        self.phase == AppPhase::Reloading
    }

    /// True while the update loop should keep running
    pub fn is_running(&self) -> bool {
        self.phase == AppPhase::Running
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Request a full shell reload (all state rebuilt, location kept)
    pub fn request_reload(&mut self) {
        self.phase = AppPhase::Reloading;
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.location = path.into();
    }

    // ─────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
