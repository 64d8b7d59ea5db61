//! Light/dark theme preference.
//!
//! The stored value is read once at startup and becomes the single source of
//! truth. The document class flag is derived from it, never read back.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class added to the document element in dark mode.
pub const DARK_CLASS: &str = "dark";

/// UI color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Parse the stored representation.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::InvalidTheme(other.to_string())),
        }
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether the document element must carry [`DARK_CLASS`].
    pub fn class_flag(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value storage, e.g. the browser's `localStorage`.
pub trait PreferenceStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The active theme, loaded from a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    theme: Theme,
}

impl ThemePreference {
    /// Read the stored preference.
    ///
    /// Missing, unreadable and unrecognized values all yield [`Theme::Light`].
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let theme = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        Self { theme }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist a theme.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set<S: PreferenceStore + ?Sized>(&mut self, theme: Theme, store: &mut S) -> Result<()> {
        self.theme = theme;
        tracing::debug!(theme = theme.as_str(), "Persisting theme preference");
        store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    /// Flip and persist the theme, returning the new value.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next, store)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("quota exceeded".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_parse_accepts_only_literals() {
        assert_eq!(Theme::parse("light"), Ok(Theme::Light));
        assert_eq!(Theme::parse("dark"), Ok(Theme::Dark));
        assert_eq!(
            Theme::parse("Dark"),
            Err(Error::InvalidTheme("Dark".to_string()))
        );
    }

    #[test]
    fn test_load_reads_storage() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        let pref = ThemePreference::load(&store);
        assert_eq!(pref.theme(), Theme::Dark);
        assert!(pref.theme().class_flag());
    }

    #[test]
    fn test_load_defaults_to_light() {
        assert_eq!(ThemePreference::load(&MemoryStore::new()).theme(), Theme::Light);

        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::load(&store).theme(), Theme::Light);

        assert_eq!(ThemePreference::load(&FailingStore).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_flag_and_storage() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light").unwrap();
        let mut pref = ThemePreference::load(&store);
        let flag_before = pref.theme().class_flag();

        assert_eq!(pref.toggle(&mut store), Ok(Theme::Dark));
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
        assert!(pref.theme().class_flag());

        assert_eq!(pref.toggle(&mut store), Ok(Theme::Light));
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(pref.theme().class_flag(), flag_before);
    }

    #[test]
    fn test_failed_write_still_updates_theme() {
        let mut pref = ThemePreference::default();
        let result = pref.toggle(&mut FailingStore);
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(pref.theme(), Theme::Dark);
    }
}
