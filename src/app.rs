//! Habit Tracker App
//!
//! Habit switcher on the left, active habit on the right, popup for new habits.

use habit_core::{HabitTracker, TrackerConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddHabitPopup, DayList, HabitHeader, HabitMenu, SaveErrorBanner};
use crate::location;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Load once; the fragment picks the first habit shown
    let tracker = HabitTracker::open(BrowserStorage, TrackerConfig::default(), &location::current_fragment());
    if let Some(id) = tracker.active_id() {
        location::replace_fragment(id);
    }

    // Provide the store to all children
    provide_context(Store::new(AppState::new(tracker)));

    view! {
        <div class="app">
            <HabitMenu />
            <main class="main-content">
                <SaveErrorBanner />
                <HabitHeader />
                <DayList />
            </main>
            <AddHabitPopup />
        </div>
    }
}
