use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn ui_state_default_sidebar_open() {
    assert!(UiState::default().sidebar_open);
}

#[test]
fn ui_state_toggle_flips_sidebar() {
    let closed = UiState::default().toggled_sidebar();
    assert!(!closed.sidebar_open);
    assert!(closed.toggled_sidebar().sidebar_open);
}

#[test]
fn ui_state_save_then_load() {
    let store = MemoryStore::new();
    UiState { sidebar_open: false }.save(&store);
    assert_eq!(UiState::load(&store), UiState { sidebar_open: false });
}

#[test]
fn ui_state_load_tolerates_missing_and_malformed() {
    assert_eq!(UiState::load(&MemoryStore::new()), UiState::default());
    let store = MemoryStore::with_entry(UI_PREFS_KEY, "not json");
    assert_eq!(UiState::load(&store), UiState::default());
    let partial = MemoryStore::with_entry(UI_PREFS_KEY, "{}");
    assert_eq!(UiState::load(&partial), UiState::default());
}
