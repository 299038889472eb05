//! URL Fragment
//!
//! Reads the `#<id>` deep link and keeps it in sync with the active habit.

use habit_core::navigation::fragment_for;
use log::warn;
use wasm_bindgen::JsValue;

/// Current fragment including the leading `#`, or empty
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Point the fragment at habit `id` without adding a history entry
pub fn replace_fragment(id: u32) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment_for(id))) {
        warn!("Could not update URL fragment: {:?}", e);
    }
}
