//! Local UI chrome state (sidebar visibility).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the session and page data. The
//! sidebar preference survives reloads through the same key/value storage the
//! session uses.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for persisted UI preferences.
pub const UI_PREFS_KEY: &str = "learnx_ui_prefs";

/// UI state for the navigation shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl UiState {
    /// Load persisted preferences, falling back to defaults.
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, UI_PREFS_KEY).unwrap_or_default()
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if !save_json(store, UI_PREFS_KEY, &self) {
            log::debug!("ui preferences not persisted");
        }
    }

    /// Flip the sidebar and return the new state.
    #[must_use]
    pub fn toggled_sidebar(self) -> Self {
        Self { sidebar_open: !self.sidebar_open }
    }
}
