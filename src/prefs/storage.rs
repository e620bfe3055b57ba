use super::types::{ThemePrefs, PREFS_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default preferences file path (~/.config/deck-meta/prefs.json)
pub fn get_prefs_path() -> PathBuf {
    crate::config::get_config_dir().join("prefs.json")
}

/// Load preferences from a JSON file
///
/// If the file doesn't exist, returns the defaults.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_prefs(path: &Path) -> Result<ThemePrefs> {
    if !path.exists() {
        return Ok(ThemePrefs::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open preferences file at {}", path.display()))?;

    let prefs: ThemePrefs = serde_json::from_reader(file).context("Failed to load preferences")?;

    if prefs.version != PREFS_VERSION {
        anyhow::bail!("Unsupported preferences version: {}", prefs.version);
    }

    Ok(prefs)
}

/// Save preferences to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_prefs(path: &Path, prefs: &ThemePrefs) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, prefs).context("Failed to serialize preferences")?;

    file.commit().context("Failed to save preferences")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::ThemeMode;
    use std::env;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_path = env::temp_dir().join("deck_meta_test_prefs_missing.json");
        let _ = std::fs::remove_file(&temp_path);

        let prefs = load_prefs(&temp_path).unwrap();
        assert_eq!(prefs, ThemePrefs::new());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("deck_meta_test_prefs_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut prefs = ThemePrefs::new();
        prefs.update(Some(ThemeMode::Dark), Some("ocean".to_string()));
        save_prefs(&temp_path, &prefs).unwrap();

        let loaded = load_prefs(&temp_path).unwrap();
        assert_eq!(loaded.mode, ThemeMode::Dark);
        assert_eq!(loaded.palette, "ocean");
        assert!(loaded.updated_at.is_some());

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_version() {
        let temp_path = env::temp_dir().join("deck_meta_test_prefs_version.json");
        std::fs::write(&temp_path, r#"{"version": 2, "mode": "light"}"#).unwrap();

        let err = load_prefs(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported preferences version: 2"));

        let _ = std::fs::remove_file(&temp_path);
    }
}
