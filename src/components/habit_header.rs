//! Habit Header Component
//!
//! Name of the active habit and its progress bar.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HabitHeader() -> impl IntoView {
    let store = use_app_store();
    let header = Memo::new(move |_| store.tracker().read().header());

    let name = move || header.with(|h| h.as_ref().map(|h| h.name.clone()).unwrap_or_default());
    let percent = move || header.with(|h| h.as_ref().map(|h| h.progress_label()).unwrap_or_default());

    view! {
        <header class="header">
            <h1 class="header__text">{name}</h1>
            <Show when=move || header.with(Option::is_some)>
                <div class="progress">
                    <div class="progress__text">
                        <div class="progress__name">"Progress"</div>
                        <div class="progress__percent">{percent}</div>
                    </div>
                    <div class="progress__bar">
                        <div class="progress__cover-bar" style:width=percent></div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
