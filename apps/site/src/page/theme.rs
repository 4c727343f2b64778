//! Dark-mode preference, persisted in a string key-value store (browser local storage).

use std::collections::HashMap;

use serde::Serialize;

pub const DARK_MODE_KEY: &str = "darkMode";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads the stored preference. Only an explicit `enabled` means dark.
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get(DARK_MODE_KEY).as_deref() {
            Some("enabled") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Flips the mode and persists the new value.
    pub fn toggle(self, store: &mut impl PreferenceStore) -> Self {
        let next = match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        store.set(DARK_MODE_KEY, next.stored_value());
        next
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            ThemeMode::Light => "disabled",
            ThemeMode::Dark => "enabled",
        }
    }

    /// Icon class shown on the toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "fa-moon",
            ThemeMode::Dark => "fa-sun",
        }
    }

    pub fn body_class(self) -> Option<&'static str> {
        match self {
            ThemeMode::Light => None,
            ThemeMode::Dark => Some("dark-mode"),
        }
    }
}
