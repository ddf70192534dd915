//! Light/dark theme preference.

use super::StateError;
use crate::config::{PreferenceStore, THEME_KEY};
use log::*;
use std::fmt;
use std::str::FromStr;

/// Specifying the available themes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Glyph of the toggle control: the theme it switches to.
    ///
    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☾",
            ThemePreference::Dark => "☀",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(StateError::UnknownTheme(other.to_string())),
        }
    }
}

/// Reads, applies and persists the theme preference.
///
pub struct ThemeController {
    store: Box<dyn PreferenceStore + Send>,
    current: ThemePreference,
}

impl ThemeController {
    /// Return a controller applying the stored theme, or light when nothing
    /// usable is stored. The applied theme is written back to the store.
    ///
    pub fn new(store: Box<dyn PreferenceStore + Send>) -> Self {
        let current = store
            .read(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let mut controller = ThemeController { store, current };
        if let Err(e) = controller.set_theme(current) {
            warn!("{}", e);
        }
        controller
    }

    pub fn get_theme(&self) -> ThemePreference {
        self.current
    }

    /// Apply the theme immediately and persist it. A failed write leaves
    /// the theme applied and is reported to the caller.
    ///
    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<(), StateError> {
        self.current = theme;
        self.store
            .write(THEME_KEY, theme.as_str())
            .map_err(|e| StateError::PreferenceWrite(e.to_string()))
    }

    pub fn toggle(&mut self) -> Result<ThemePreference, StateError> {
        let next = self.current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn icon(&self) -> &'static str {
        self.current.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MemoryPreferenceStore};
    use std::sync::{Arc, Mutex};

    /// Store sharing its entries with the test so writes can be inspected.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<Option<String>>>);

    impl PreferenceStore for SharedStore {
        fn read(&self, _key: &str) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn write(&mut self, _key: &str, value: &str) -> Result<(), ConfigError> {
            *self.0.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_to_light_and_persists_it() {
        let store = SharedStore::default();
        let controller = ThemeController::new(Box::new(store.clone()));
        assert_eq!(controller.get_theme(), ThemePreference::Light);
        assert_eq!(store.read(THEME_KEY), Some("light".to_string()));
        assert_eq!(controller.icon(), "☾");
    }

    #[test]
    fn restores_stored_theme() {
        let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "dark");
        let controller = ThemeController::new(Box::new(store));
        assert_eq!(controller.get_theme(), ThemePreference::Dark);
        assert_eq!(controller.icon(), "☀");
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "sepia");
        let controller = ThemeController::new(Box::new(store));
        assert_eq!(controller.get_theme(), ThemePreference::Light);
    }

    #[test]
    fn toggle_parity_matches_persisted_value() {
        let store = SharedStore::default();
        let mut controller = ThemeController::new(Box::new(store.clone()));
        for n in 1..=9 {
            controller.toggle().unwrap();
            let expected = if n % 2 == 0 {
                ThemePreference::Light
            } else {
                ThemePreference::Dark
            };
            assert_eq!(controller.get_theme(), expected);
            assert_eq!(store.read(THEME_KEY), Some(expected.to_string()));
        }
    }

    #[test]
    fn set_theme_is_idempotent() {
        let store = SharedStore::default();
        let mut controller = ThemeController::new(Box::new(store.clone()));
        controller.set_theme(ThemePreference::Dark).unwrap();
        controller.set_theme(ThemePreference::Dark).unwrap();
        assert_eq!(controller.get_theme(), ThemePreference::Dark);
        assert_eq!(store.read(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn failed_write_still_applies_theme() {
        let mut controller = ThemeController::new(Box::new(MemoryPreferenceStore::read_only()));
        let result = controller.toggle();
        assert!(matches!(result, Err(StateError::PreferenceWrite(_))));
        assert_eq!(controller.get_theme(), ThemePreference::Dark);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }
}
