//! Add Habit Popup Component
//!
//! Modal form with icon picker, name and target for a new habit.

use habit_core::form::{
    ADD_HABIT_FIELDS, ADD_HABIT_RESET_FIELDS, DEFAULT_ICON, FIELD_ICON, FIELD_NAME, FIELD_TARGET,
};
use leptos::prelude::*;
use log::{info, warn};

use crate::components::{FormState, IconSelect};
use crate::store::{store_add_habit, use_app_store, AppStateStoreFields};

#[component]
pub fn AddHabitPopup() -> impl IntoView {
    let store = use_app_store();
    let form = FormState::new(&[(FIELD_ICON, DEFAULT_ICON), (FIELD_NAME, ""), (FIELD_TARGET, "")]);

    let is_open = move || *store.popup_open().read();
    let close = move |_| *store.popup_open().write() = false;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut record) = form.submit(ADD_HABIT_FIELDS) else {
            return;
        };
        let icon = record.remove(FIELD_ICON).unwrap_or_default();
        let name = record.remove(FIELD_NAME).unwrap_or_default();
        let target = record.remove(FIELD_TARGET).unwrap_or_default();
        let Some(habit) = store_add_habit(&store, icon, name, target) else {
            warn!("Habit was not created");
            return;
        };
        info!("Created habit {}", habit.id);
        form.reset(ADD_HABIT_RESET_FIELDS);
        *store.popup_open().write() = false;
    };

    view! {
        <div class=move || if is_open() { "cover" } else { "cover cover_hidden" }>
            <div class="popup">
                <h2>"New habit"</h2>
                <div class="icon-label">"Icon"</div>
                <IconSelect
                    selected=Signal::derive(move || form.value(FIELD_ICON))
                    on_select=move |icon: String| form.set(FIELD_ICON, icon)
                />
                <form class="popup__form" on:submit=on_submit>
                    <input type="hidden" name=FIELD_ICON prop:value=move || form.value(FIELD_ICON) />
                    <input
                        type="text"
                        name=FIELD_NAME
                        class=move || form.class(FIELD_NAME, "input")
                        placeholder="Name"
                        prop:value=move || form.value(FIELD_NAME)
                        on:input=move |ev| form.set(FIELD_NAME, event_target_value(&ev))
                    />
                    <input
                        type="number"
                        name=FIELD_TARGET
                        class=move || form.class(FIELD_TARGET, "input")
                        placeholder="Target"
                        prop:value=move || form.value(FIELD_TARGET)
                        on:input=move |ev| form.set(FIELD_TARGET, event_target_value(&ev))
                    />
                    <button class="button" type="submit">"Add"</button>
                </form>
                <button class="popup__close" on:click=close>"×"</button>
            </div>
        </div>
    }
}
