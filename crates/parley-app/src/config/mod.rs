//! Configuration file parsing for Parley
//!
//! Two files live under the user config dir (`~/.config/parley/`):
//! - `config.toml` - shell settings (server URL, probe interval)
//! - `preferences.toml` - user preferences (dark mode)
//!
//! Config errors are never fatal: every loader falls back to defaults with
//! a logged warning.

pub mod preferences;
pub mod settings;

pub use preferences::{load_preferences, save_preferences, UserPreferences};
pub use settings::{default_config_dir, load_settings, ConnectivitySettings, ServerSettings, Settings};
