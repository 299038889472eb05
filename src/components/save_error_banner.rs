//! Save Error Banner Component
//!
//! Tells the user their last change could not be written to storage.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SaveErrorBanner() -> impl IntoView {
    let store = use_app_store();

    move || {
        (*store.save_error().read()).clone().map(|message| view! {
            <div class="save-error" role="alert">
                <span>{format!("Could not save your habits: {}", message)}</span>
                <button on:click=move |_| *store.save_error().write() = None>"×"</button>
            </div>
        })
    }
}
