//! Day List Component
//!
//! Logged days of the active habit, followed by the "add day" form.

use leptos::prelude::*;

use crate::components::AddDayForm;
use crate::store::{store_delete_day, use_app_store, AppStateStoreFields};

#[component]
pub fn DayList() -> impl IntoView {
    let store = use_app_store();
    let rows = Memo::new(move |_| store.tracker().read().day_rows());
    let delete_icon = store.tracker().read_untracked().config().icon_src("delete");

    view! {
        <div class="days">
            // Rows are keyed by their full content: a delete shifts later
            // indexes, so those rows are rebuilt with the new index.
            <For
                each=move || rows.get()
                key=|row| row.clone()
                children=move |row| {
                    let index = row.index;
                    view! {
                        <div class="habit">
                            <div class="habit__day">{format!("Day {}", row.number)}</div>
                            <div class="habit__comment">{row.comment.clone()}</div>
                            <button
                                class="habit__delete"
                                on:click=move |_| store_delete_day(&store, index)
                            >
                                <img src=delete_icon.clone() alt=format!("Delete day {}", row.number) />
                            </button>
                        </div>
                    }
                }
            />
            <AddDayForm />
        </div>
    }
}
