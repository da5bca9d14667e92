//! User preference persistence (~/.config/parley/preferences.toml)
//!
//! One boolean, `dark_mode`, selects the ThemeMode at startup. Absence or
//! an unreadable file means light mode.

use parley_core::prelude::*;
use parley_core::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

const PREFERENCES_FILENAME: &str = "preferences.toml";
const PREFERENCES_TMP: &str = ".preferences.toml.tmp";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub dark_mode: bool,
}

impl UserPreferences {
    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        Self {
            dark_mode: mode.is_dark(),
        }
    }
}

/// Load preferences, defaulting to light mode on any problem
pub fn load_preferences(config_dir: &Path) -> UserPreferences {
    let path = config_dir.join(PREFERENCES_FILENAME);

    if !path.exists() {
        debug!("No preferences file at {:?}, using defaults", path);
        return UserPreferences::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                UserPreferences::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            UserPreferences::default()
        }
    }
}

/// Persist preferences with an atomic write (temp file + rename)
pub fn save_preferences(config_dir: &Path, prefs: &UserPreferences) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let path = config_dir.join(PREFERENCES_FILENAME);
    let temp_path = config_dir.join(PREFERENCES_TMP);

    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    std::fs::write(&temp_path, content)
        .map_err(|e| Error::config(format!("Failed to write preferences: {}", e)))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| Error::config(format!("Failed to persist preferences: {}", e)))?;

    debug!("Saved preferences to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPreferences { dark_mode: true };

        save_preferences(dir.path(), &prefs).unwrap();
        let loaded = load_preferences(dir.path());
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_missing_file_is_light_mode() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_preferences(dir.path());
        assert_eq!(loaded.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_file_is_light_mode() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILENAME), "dark_mode = ???").unwrap();
        let loaded = load_preferences(dir.path());
        assert_eq!(loaded.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_save_creates_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("parley");

        save_preferences(&nested, &UserPreferences::from_mode(ThemeMode::Dark)).unwrap();
        assert!(load_preferences(&nested).dark_mode);
    }
}
