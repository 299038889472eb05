//! Icon Select Component
//!
//! Swatches for picking a habit icon; exactly one is selected.

use habit_core::form::HABIT_ICONS;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn IconSelect(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let config = store.tracker().read_untracked().config().clone();

    view! {
        <div class="icon-select">
            {HABIT_ICONS.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || selected.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "icon-select__icon icon-select__icon_active" } else { "icon-select__icon" }
                        on:click=move |_| on_select.run(val_clone.clone())
                    >
                        <img src=config.icon_src(value) alt=*label />
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
