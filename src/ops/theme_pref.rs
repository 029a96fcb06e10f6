use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::io::ambient::AmbientTheme;
use crate::io::state::KeyValueStore;

/// Key under which the theme flag is persisted
pub const THEME_KEY: &str = "theme";

/// Light or dark display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Sun for light, moon for dark
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "\u{2600}",
            ThemeMode::Dark => "\u{263E}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// The persisted light/dark choice
pub struct ThemePreference<S> {
    store: S,
    current: ThemeMode,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Persisted value, else the ambient preference, else light.
    /// A value not read from the store is written back to it.
    pub fn resolve(store: S, ambient: &dyn AmbientTheme) -> Self {
        let persisted = store
            .get(THEME_KEY)
            .and_then(|v| v.parse::<ThemeMode>().ok());

        if let Some(mode) = persisted {
            debug!(theme = %mode, "theme from saved state");
            return ThemePreference {
                store,
                current: mode,
            };
        }

        let current = match ambient.prefers_dark() {
            Some(true) => ThemeMode::Dark,
            Some(false) => ThemeMode::Light,
            None => ThemeMode::default(),
        };
        debug!(theme = %current, "theme from environment");
        let mut pref = ThemePreference { store, current };
        pref.persist();
        pref
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Indicator glyph for the current mode
    pub fn indicator(&self) -> &'static str {
        self.current.icon()
    }

    /// Flip the mode and persist it
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, mode: ThemeMode) -> ThemeMode {
        self.current = mode;
        info!(theme = %mode, "theme changed");
        self.persist();
        mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write failures are logged and otherwise ignored
    fn persist(&mut self) {
        if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
            warn!(error = %e, "could not save theme");
        }
    }
}
