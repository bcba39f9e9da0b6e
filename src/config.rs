use crate::theme::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct Preferences {
    theme: Theme,
}

/// Persistence seam for the theme preference.
pub trait ThemeStore {
    /// Returns the saved preference, or `None` when nothing usable is
    /// stored. Never fails.
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> io::Result<()>;
}

/// JSON preferences file under the platform config directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "folio") {
            pd.config_dir().join("preferences.json")
        } else {
            PathBuf::from("folio_preferences.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let bytes = fs::read(&self.path).ok()?;
        let prefs = serde_json::from_slice::<Preferences>(&bytes).ok()?;
        Some(prefs.theme)
    }

    fn save(&self, theme: Theme) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&Preferences { theme }).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// In-memory store for unit and headless tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Cell<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new(initial: Option<Theme>) -> Self {
        Self {
            saved: Cell::new(initial),
        }
    }

    pub fn saved(&self) -> Option<Theme> {
        self.saved.get()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.saved.get()
    }

    fn save(&self, theme: Theme) -> io::Result<()> {
        self.saved.set(Some(theme));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileThemeStore::with_path(dir.path().join("preferences.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn roundtrip_both_themes() {
        let dir = tempdir().unwrap();
        let store = FileThemeStore::with_path(dir.path().join("preferences.json"));

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = FileThemeStore::with_path(dir.path().join("nested/config/preferences.json"));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
    }

    #[test]
    fn theme_key_uses_literal_light_and_dark() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FileThemeStore::with_path(&path);

        store.save(Theme::Dark).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\""));
        assert!(raw.contains("\"dark\""));

        store.save(Theme::Light).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileThemeStore::with_path(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load(), None);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
        assert_eq!(store.saved(), Some(Theme::Light));
    }
}
