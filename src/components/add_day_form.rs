//! Add Day Form Component
//!
//! Logs the next day of the active habit with a comment.

use habit_core::form::{ADD_DAY_FIELDS, FIELD_COMMENT};
use leptos::prelude::*;

use crate::components::FormState;
use crate::store::{store_add_day, use_app_store, AppStateStoreFields};

#[component]
pub fn AddDayForm() -> impl IntoView {
    let store = use_app_store();
    let form = FormState::new(&[(FIELD_COMMENT, "")]);
    let next_day = move || format!("Day {}", store.tracker().read().next_day_number());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.submit(ADD_DAY_FIELDS) else {
            return;
        };
        let comment = record.get(FIELD_COMMENT).cloned().unwrap_or_default();
        store_add_day(&store, comment);
        form.reset(ADD_DAY_FIELDS);
    };

    view! {
        <div class="habit habit-add-day">
            <div class="habit__day">{next_day}</div>
            <form class="habit__form" on:submit=on_submit>
                <input
                    type="text"
                    name=FIELD_COMMENT
                    class=move || form.class(FIELD_COMMENT, "input_icon")
                    placeholder="Comment"
                    prop:value=move || form.value(FIELD_COMMENT)
                    on:input=move |ev| form.set(FIELD_COMMENT, event_target_value(&ev))
                />
                <button class="button" type="submit">"Done"</button>
            </form>
        </div>
    }
}
