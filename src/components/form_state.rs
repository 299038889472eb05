//! Form State
//!
//! Field values and validation markers of one form, as signals.

use std::collections::BTreeSet;

use habit_core::form::{self, FormValues};
use leptos::prelude::*;
use log::debug;

/// Reactive field values plus the set of fields currently marked invalid
#[derive(Clone, Copy)]
pub struct FormState {
    values: RwSignal<FormValues>,
    invalid: RwSignal<BTreeSet<String>>,
}

impl FormState {
    pub fn new(initial: &[(&str, &str)]) -> Self {
        let values = initial
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        Self {
            values: RwSignal::new(values),
            invalid: RwSignal::new(BTreeSet::new()),
        }
    }

    pub fn value(&self, field: &str) -> String {
        self.values.with(|values| values.get(field).cloned().unwrap_or_default())
    }

    pub fn set(&self, field: &str, value: String) {
        self.values.update(|values| {
            values.insert(field.to_string(), value);
        });
    }

    /// `base` plus `error` while the field is marked invalid
    pub fn class(&self, field: &str, base: &str) -> String {
        if self.invalid.with(|invalid| invalid.contains(field)) {
            format!("{} error", base)
        } else {
            base.to_string()
        }
    }

    /// Validate `required` and refresh the invalid markers.
    /// Returns the record only when every required field has a value.
    pub fn submit(&self, required: &[&str]) -> Option<FormValues> {
        match form::validate(&self.values.get_untracked(), required) {
            Ok(record) => {
                self.invalid.set(BTreeSet::new());
                Some(record)
            }
            Err(e) => {
                debug!("Form rejected: {}", e);
                self.invalid.set(e.0);
                None
            }
        }
    }

    /// Clear the listed fields
    pub fn reset(&self, fields: &[&str]) {
        self.values.update(|values| form::reset_fields(values, fields));
    }
}
