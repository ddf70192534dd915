//! Configuration management module.
//!
//! This module handles loading configuration from disk, including the
//! contact address, animation timings, the page content location and the
//! persisted theme preference.

mod error;
mod preferences;

pub use error::ConfigError;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, THEME_KEY};

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const CONTENT_FILE_NAME: &str = "content.yml";
const PREFERENCES_FILE_NAME: &str = "preferences.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/folio-tui";
const DEFAULT_CONTACT_EMAIL: &str = "ayahady052@gmail.com";

/// Timing of the hero typing animation.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub speed_ms: u64,
    pub delete_speed_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            speed_ms: 100,
            delete_speed_ms: 50,
            pause_ms: 2000,
        }
    }
}

/// Timing of the statistics counters.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub interval_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            duration_ms: 2000,
            interval_ms: 16,
        }
    }
}

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub contact_email: String,
    pub typing: TypingConfig,
    pub counter: CounterConfig,
    pub notification_ms: u64,
    pub content_path: Option<PathBuf>,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default)]
    pub content: Option<PathBuf>,
}

fn default_contact_email() -> String {
    DEFAULT_CONTACT_EMAIL.to_string()
}

fn default_notification_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            contact_email: default_contact_email(),
            typing: TypingConfig::default(),
            counter: CounterConfig::default(),
            notification_ms: default_notification_ms(),
            content_path: None,
            dir_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(&contents)?;
        }

        // Relative content paths are resolved against the config directory
        if let Some(content) = self.content_path.take() {
            self.content_path = Some(if content.is_relative() {
                dir_path.join(content)
            } else {
                content
            });
        } else {
            let default_content = dir_path.join(CONTENT_FILE_NAME);
            if default_content.exists() {
                self.content_path = Some(default_content);
            }
        }

        self.dir_path = Some(dir_path);
        Ok(())
    }

    /// Overwrite values with those found in the given YAML document.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.contact_email = data.contact_email;
        self.typing = data.typing;
        self.counter = data.counter;
        self.notification_ms = data.notification_ms;
        self.content_path = data.content;
        Ok(())
    }

    /// Return the path of the persisted preference file.
    ///
    pub fn preferences_path(&self) -> Result<PathBuf, ConfigError> {
        self.dir_path
            .as_ref()
            .map(|dir| dir.join(PREFERENCES_FILE_NAME))
            .ok_or(ConfigError::FilePathNotSet)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.contact_email, "ayahady052@gmail.com");
        assert_eq!(config.typing.speed_ms, 100);
        assert_eq!(config.typing.delete_speed_ms, 50);
        assert_eq!(config.typing.pause_ms, 2000);
        assert_eq!(config.counter.duration_ms, 2000);
        assert_eq!(config.counter.interval_ms, 16);
        assert_eq!(config.notification_ms, 5000);
        assert!(config.preferences_path().is_err());
    }

    #[test]
    fn test_apply_partial_document() {
        let mut config = Config::new();
        config
            .apply("contact_email: me@example.org\ntyping:\n  speed_ms: 80\n")
            .unwrap();
        assert_eq!(config.contact_email, "me@example.org");
        assert_eq!(config.typing.speed_ms, 80);
        assert_eq!(config.typing.delete_speed_ms, 50);
        assert_eq!(config.counter, CounterConfig::default());
    }

    #[test]
    fn test_apply_invalid_document() {
        let mut config = Config::new();
        let result = config.apply("typing: [1, 2");
        assert!(matches!(
            result,
            Err(ConfigError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "notification_ms: 3000\ncontent: page.yml\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.content_path, Some(dir.path().join("page.yml")));
        assert_eq!(
            config.preferences_path().unwrap(),
            dir.path().join(PREFERENCES_FILE_NAME)
        );
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let mut config = Config::new();
        config.load(nested.to_str()).unwrap();
        assert!(nested.exists());
        assert_eq!(config.notification_ms, 5000);
        assert!(config.content_path.is_none());
    }
}
