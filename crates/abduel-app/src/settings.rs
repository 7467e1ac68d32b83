use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    i18n::Language,
    persistence::{self, StoreError},
};

pub const DEFAULT_THINK_DELAY_MS: u64 = 600;

/// User preferences that survive restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    /// Pause before the computer's guess is shown.
    pub think_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
        }
    }
}

/// Loads and saves [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!("no settings at {}, using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => {
                warn!(
                    "failed to load settings from {}: {e}; using defaults",
                    self.path.display()
                );
                Settings::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Settings>, StoreError> {
        let Some(text) = persistence::read_optional(&self.path)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(settings)?;
        persistence::write_atomic(&self.path, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let settings = Settings {
            language: Language::ZhTw,
            think_delay_ms: 0,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_partial_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        std::fs::write(store.path(), r#"{"language":"zh-TW"}"#).unwrap();
        assert_eq!(
            store.load(),
            Settings {
                language: Language::ZhTw,
                think_delay_ms: DEFAULT_THINK_DELAY_MS,
            }
        );

        std::fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.load(), Settings::default());
    }
}
