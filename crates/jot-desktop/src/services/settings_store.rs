//! Settings persistence on the local config directory.

use std::fs;
use std::path::PathBuf;

use jot_core::models::Settings;
use jot_core::{Error, Result};

const CONFIG_DIR_NAME: &str = "jot";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Reads and writes [`Settings`] as JSON under the user config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the platform config location, e.g.
    /// `~/.config/jot/settings.json` on Linux.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("No config directory available".to_string()))?;
        Ok(Self::with_path(
            config_dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME),
        ))
    }

    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads persisted settings. A missing or unreadable file degrades to
    /// defaults; the shell must come up even when the config is damaged.
    #[must_use]
    pub fn load(&self) -> Settings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Settings::default();
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to read settings from {}: {}",
                    self.path.display(),
                    error
                );
                return Settings::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(
                "Failed to parse settings from {}: {}",
                self.path.display(),
                error
            );
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jot_core::models::ThemeMode;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("settings.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("nested").join("settings.json"));

        let settings = Settings {
            theme: ThemeMode::Dark,
            font_size: 18,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn corrupted_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = SettingsStore::with_path(path);
        assert_eq!(store.load(), Settings::default());
    }
}
