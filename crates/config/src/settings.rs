// Application settings
// Loaded from ~/.config/gridbase/settings.json

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User-tunable grid behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows fetched per page when loading lazily.
    pub page_size: usize,

    /// Delay before an in-flight edit is validated, in milliseconds.
    pub validation_debounce_ms: u64,

    /// Whether pasting past the last row appends new rows.
    pub auto_expand_rows: bool,

    /// Cap on cells accepted from a single clipboard paste.
    pub max_clipboard_cells: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 100,
            validation_debounce_ms: 250,
            auto_expand_rows: true,
            max_clipboard_cells: 10_000,
        }
    }
}

impl Settings {
    /// Path to the settings file: `<config-dir>/gridbase/settings.json`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gridbase").join("settings.json"))
    }

    /// Load settings, falling back to defaults on a missing or unreadable
    /// file. A corrupt file also yields defaults rather than an error.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory",
            ));
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    pub fn validation_delay(&self) -> Duration {
        Duration::from_millis(self.validation_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.page_size, 100);
        assert_eq!(s.validation_delay(), Duration::from_millis(250));
        assert!(s.auto_expand_rows);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut s = Settings::default();
        s.page_size = 25;
        s.validation_debounce_ms = 100;
        s.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = Settings::load_from(std::path::Path::new("/nonexistent/settings.json"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_unknown_and_missing_fields_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"page_size": 10, "future_option": true}"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.page_size, 10);
        // Everything not in the file keeps its default.
        assert_eq!(loaded.validation_debounce_ms, 250);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json {").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
