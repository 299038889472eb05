//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use habit_core::{Habit, HabitTracker};
use leptos::prelude::*;
use log::error;
use reactive_stores::Store;

use crate::location;
use crate::storage::BrowserStorage;

/// Application state owned by `App` and shared through context
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Habits, active habit and persistence
    pub tracker: HabitTracker<BrowserStorage>,
    /// Whether the "add habit" popup is shown
    pub popup_open: bool,
    /// Message of the last failed save, until dismissed or a save succeeds
    pub save_error: Option<String>,
}

impl AppState {
    pub fn new(tracker: HabitTracker<BrowserStorage>) -> Self {
        Self {
            tracker,
            popup_open: false,
            save_error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write the whole collection; a failed write is logged and shown
fn persist(store: &AppStore) {
    let result = store.tracker().read_untracked().persist();
    match result {
        Ok(()) => {
            if store.save_error().read_untracked().is_some() {
                *store.save_error().write() = None;
            }
        }
        Err(e) => {
            error!("Saving habits failed: {}", e);
            *store.save_error().write() = Some(e.to_string());
        }
    }
}

/// Show habit `id`; unknown ids change nothing
pub fn store_switch_active(store: &AppStore, id: u32) {
    if !store.tracker().read_untracked().contains(id) {
        return;
    }
    store.tracker().write().switch_active(id);
    location::replace_fragment(id);
}

/// Create a habit, save, and show it. None when no habit ID is left.
pub fn store_add_habit(store: &AppStore, icon: String, name: String, target: String) -> Option<Habit> {
    let habit = store.tracker().write().add_habit(icon, name, target)?;
    persist(store);
    location::replace_fragment(habit.id);
    Some(habit)
}

/// Log a day on the active habit and save
pub fn store_add_day(store: &AppStore, comment: String) {
    if store.tracker().read_untracked().active_id().is_none() {
        return;
    }
    store.tracker().write().add_day(comment);
    persist(store);
}

/// Delete a day of the active habit and save
pub fn store_delete_day(store: &AppStore, index: usize) {
    if !store.tracker().read_untracked().can_delete_day(index) {
        return;
    }
    store.tracker().write().delete_day(index);
    persist(store);
}
