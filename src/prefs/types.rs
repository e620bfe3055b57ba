use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PREFS_VERSION: u32 = 1;
pub const DEFAULT_PALETTE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Persisted display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub version: u32,
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "default_palette")]
    pub palette: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

impl Default for ThemePrefs {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemePrefs {
    pub fn new() -> Self {
        Self {
            version: PREFS_VERSION,
            mode: ThemeMode::default(),
            palette: default_palette(),
            updated_at: None,
        }
    }

    /// Apply changes and stamp the update time. Returns whether anything changed.
    pub fn update(&mut self, mode: Option<ThemeMode>, palette: Option<String>) -> bool {
        let mut changed = false;
        if let Some(mode) = mode {
            changed |= self.mode != mode;
            self.mode = mode;
        }
        if let Some(palette) = palette {
            changed |= self.palette != palette;
            self.palette = palette;
        }
        if changed {
            self.updated_at = Some(Utc::now());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = ThemePrefs::new();
        assert_eq!(prefs.version, 1);
        assert_eq!(prefs.mode, ThemeMode::Light);
        assert_eq!(prefs.palette, "default");
        assert!(prefs.updated_at.is_none());
    }

    #[test]
    fn test_update_stamps_time() {
        let mut prefs = ThemePrefs::new();
        assert!(prefs.update(Some(ThemeMode::Dark), None));
        assert_eq!(prefs.mode, ThemeMode::Dark);
        assert!(prefs.updated_at.is_some());
    }

    #[test]
    fn test_update_noop() {
        let mut prefs = ThemePrefs::new();
        assert!(!prefs.update(Some(ThemeMode::Light), Some("default".to_string())));
        assert!(prefs.updated_at.is_none());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_minimal_document() {
        let prefs: ThemePrefs = serde_json::from_str(r#"{"version": 1, "mode": "dark"}"#).unwrap();
        assert_eq!(prefs.mode, ThemeMode::Dark);
        assert_eq!(prefs.palette, "default");
    }
}
