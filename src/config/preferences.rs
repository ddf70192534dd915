//! Persisted user preferences.
//!
//! The page keeps a single preference, the theme name, under a fixed key.
//! `FilePreferenceStore` keeps it in a small YAML document next to the
//! configuration file; `MemoryPreferenceStore` keeps it in memory.

use super::ConfigError;
use std::collections::BTreeMap;
use std::{fs, path::PathBuf};

/// Key under which the theme name is stored.
pub const THEME_KEY: &str = "theme";

/// Read/write access to persisted string preferences.
///
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// Preference store backed by a YAML file.
///
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        FilePreferenceStore { path }
    }

    fn entries(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_yaml::from_str(&contents).ok())
            .unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries().remove(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        let content = serde_yaml::to_string(&entries)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|e| ConfigError::SaveFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Preference store that never touches the disk.
///
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        MemoryPreferenceStore::default()
    }

    /// Return a store that rejects every write.
    ///
    pub fn read_only() -> Self {
        MemoryPreferenceStore {
            read_only: true,
            ..MemoryPreferenceStore::default()
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if self.read_only {
            return Err(ConfigError::SaveFailed {
                path: PathBuf::from(key),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_absent_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("preferences.yml"));
        assert_eq!(store.read(THEME_KEY), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("preferences.yml");
        let mut store = FilePreferenceStore::new(path.clone());
        store.write(THEME_KEY, "dark").unwrap();

        let reopened = FilePreferenceStore::new(path);
        assert_eq!(reopened.read(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.yml");
        fs::write(&path, ":: not yaml [").unwrap();
        let mut store = FilePreferenceStore::new(path);
        assert_eq!(store.read(THEME_KEY), None);
        store.write(THEME_KEY, "light").unwrap();
        assert_eq!(store.read(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "dark");
        assert_eq!(store.read(THEME_KEY), Some("dark".to_string()));
        store.write(THEME_KEY, "light").unwrap();
        assert_eq!(store.read(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_read_only_memory_store() {
        let mut store = MemoryPreferenceStore::read_only();
        assert!(store.write(THEME_KEY, "dark").is_err());
        assert_eq!(store.read(THEME_KEY), None);
    }
}
