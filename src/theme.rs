//! Light/dark theme preference.
//!
//! Stored as `"light"` or `"dark"` under the `"theme"` key of whatever
//! key-value store the host provides (browser storage, a config file).
//! The game engine never reads this; it lives beside it for hosts.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Colour theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Caption for the button that switches away from this theme.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Theme",
            Theme::Dark => "Switch to Light Theme",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

/// String key-value storage supplied by the host.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Read the saved theme, falling back to light.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    let Some(raw) = store.get(THEME_KEY) else {
        return Theme::default();
    };
    raw.parse().unwrap_or_else(|err: Error| {
        warn!(%err, "ignoring stored theme");
        Theme::default()
    })
}

/// Flip the saved theme and persist it. Returns the new theme.
pub fn toggle_theme(store: &mut dyn PreferenceStore) -> Theme {
    let next = load_theme(store).toggled();
    store.set(THEME_KEY, next.as_str());
    next
}
