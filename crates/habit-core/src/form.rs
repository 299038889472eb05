//! Form validation
//!
//! Presence-only checks shared by the "add habit" and "add day" forms.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Field names of the forms
pub const FIELD_ICON: &str = "icon";
pub const FIELD_NAME: &str = "name";
pub const FIELD_TARGET: &str = "target";
pub const FIELD_COMMENT: &str = "comment";

pub const ADD_HABIT_FIELDS: &[&str] = &[FIELD_ICON, FIELD_NAME, FIELD_TARGET];
/// The icon choice survives a submit so the picker keeps its selection
pub const ADD_HABIT_RESET_FIELDS: &[&str] = &[FIELD_NAME, FIELD_TARGET];
pub const ADD_DAY_FIELDS: &[&str] = &[FIELD_COMMENT];

/// Icon options: (identifier, label)
pub const HABIT_ICONS: &[(&str, &str)] = &[
    ("sport", "Sport"),
    ("water", "Water"),
    ("food", "Food"),
];

pub const DEFAULT_ICON: &str = "sport";

/// Current value of each form field
pub type FormValues = BTreeMap<String, String>;

/// Required fields that were left empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required fields are empty: {0:?}")]
pub struct InvalidFields(pub BTreeSet<String>);

impl InvalidFields {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }
}

/// Collect the required fields of `values`.
///
/// Every empty or missing field is reported; a record is returned only when
/// all of them have a value. Content is not checked beyond presence.
pub fn validate(values: &FormValues, required: &[&str]) -> Result<FormValues, InvalidFields> {
    let mut record = FormValues::new();
    let mut invalid = BTreeSet::new();

    for field in required {
        match values.get(*field) {
            Some(value) if !value.is_empty() => {
                record.insert(field.to_string(), value.clone());
            }
            _ => {
                invalid.insert(field.to_string());
            }
        }
    }

    if invalid.is_empty() {
        Ok(record)
    } else {
        Err(InvalidFields(invalid))
    }
}

/// Clear the listed fields
pub fn reset_fields(values: &mut FormValues, fields: &[&str]) {
    for field in fields {
        if let Some(value) = values.get_mut(*field) {
            value.clear();
        }
    }
}
