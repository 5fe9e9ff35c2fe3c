//! Light/dark theme preference

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved theme; light when nothing usable is stored.
    pub fn current(&self) -> Result<Theme, StoreError> {
        match self.store.get(THEME_KEY)? {
            None | Some(Value::Null) => Ok(Theme::default()),
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(theme) => Ok(theme),
                Err(_) => {
                    warn!("Ignoring unknown theme value {}", value);
                    Ok(Theme::default())
                }
            },
        }
    }

    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, serde_json::to_value(theme)?)?;
        debug!("Theme set to {}", theme);
        Ok(())
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_defaults_to_light() {
        let themes = ThemeStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(themes.current().unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trips_through_store() {
        let store = Arc::new(MemoryStore::new());
        let themes = ThemeStore::new(store.clone());

        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap(), Some(json!("dark")));
        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(themes.current().unwrap(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        let store = Arc::new(MemoryStore::new());
        store.set("theme", json!("sepia")).unwrap();
        let themes = ThemeStore::new(store);
        assert_eq!(themes.current().unwrap(), Theme::Light);
    }
}
