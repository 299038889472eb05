//! Habit Menu Component
//!
//! Left-hand switcher with one icon button per habit.

use leptos::prelude::*;

use crate::store::{store_switch_active, use_app_store, AppStateStoreFields};

/// Habit switcher.
///
/// Buttons are keyed by habit id, so a habit keeps its button across
/// re-renders and only the active marker changes.
#[component]
pub fn HabitMenu() -> impl IntoView {
    let store = use_app_store();
    let entries = Memo::new(move |_| store.tracker().read().menu_entries());
    let config = store.tracker().read_untracked().config().clone();
    let add_icon = config.icon_src("add");

    view! {
        <nav class="menu">
            <div class="menu__list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.id
                    children=move |entry| {
                        let id = entry.id;
                        let is_active = move || {
                            entries.with(|list| list.iter().any(|e| e.id == id && e.active))
                        };
                        view! {
                            <button
                                class=move || if is_active() { "menu__item menu__item_active" } else { "menu__item" }
                                on:click=move |_| store_switch_active(&store, id)
                            >
                                <img src=config.icon_src(&entry.icon) alt=entry.name.clone() />
                            </button>
                        }
                    }
                />
            </div>
            <button class="menu__add" on:click=move |_| *store.popup_open().write() = true>
                <img src=add_icon alt="Add habit" />
            </button>
        </nav>
    }
}
