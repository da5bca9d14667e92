//! Theme controller: mode ownership, toggle, and preference persistence
//!
//! The controller is the single owner of the active [`ThemeMode`]; the
//! rendering layer receives the mode (and its `class_name()` marker) by
//! parameter passing, never via ambient lookup.

use std::path::PathBuf;

use parley_core::prelude::*;
use parley_core::ThemeMode;

use crate::config::{load_preferences, save_preferences, UserPreferences};

/// Owns the active theme mode and keeps it in sync with the preference file
#[derive(Debug, Clone)]
pub struct ThemeController {
    mode: ThemeMode,
    /// Where preferences are persisted; `None` disables persistence
    config_dir: Option<PathBuf>,
}

impl ThemeController {
    /// Load the persisted preference from `config_dir`.
    ///
    /// A missing or unreadable preference file yields light mode.
    pub fn load(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let mode = load_preferences(&config_dir).theme_mode();
        Self {
            mode,
            config_dir: Some(config_dir),
        }
    }

    /// A controller with a fixed mode and no persistence
    pub fn ephemeral(mode: ThemeMode) -> Self {
        Self {
            mode,
            config_dir: None,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Set the active mode and persist it.
    ///
    /// Persistence failures are logged and swallowed; the in-memory mode
    /// still changes, matching the source's localStorage semantics.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;

        if let Some(dir) = &self.config_dir {
            if let Err(e) = save_preferences(dir, &UserPreferences::from_mode(mode)) {
                warn!("Failed to persist theme preference: {}", e);
            }
        }

        debug!("Theme mode set to {}", mode.class_name());
    }

    /// Flip light↔dark, persist, and return the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_preferences;

    #[test]
    fn test_toggle_is_involution() {
        let mut theme = ThemeController::ephemeral(ThemeMode::Light);
        let first = theme.toggle();
        assert_eq!(first, ThemeMode::Dark);
        let second = theme.toggle();
        assert_eq!(second, ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_load_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let theme = ThemeController::load(dir.path());
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_mode_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut theme = ThemeController::load(dir.path());

        theme.set_mode(ThemeMode::Dark);
        assert!(load_preferences(dir.path()).dark_mode);

        // A fresh controller sees the persisted mode
        let reloaded = ThemeController::load(dir.path());
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists_each_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut theme = ThemeController::load(dir.path());

        theme.toggle();
        assert!(load_preferences(dir.path()).dark_mode);
        theme.toggle();
        assert!(!load_preferences(dir.path()).dark_mode);
    }

    #[test]
    fn test_persistence_failure_still_changes_mode() {
        // A file where the config dir should be makes persistence fail
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("occupied");
        std::fs::write(&blocked, "").unwrap();

        let mut theme = ThemeController::load(&blocked);
        theme.set_mode(ThemeMode::Dark);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }
}
