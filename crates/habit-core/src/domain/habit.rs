//! Habit Entity
//!
//! A tracked recurring activity with a target and an append-only day log.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::Entity;
use super::progress::progress_percent;

/// One logged day of a habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub comment: String,
}

impl DayEntry {
    pub fn new(comment: impl Into<String>) -> Self {
        Self { comment: comment.into() }
    }
}

/// A habit with its day log
///
/// `target` keeps the text exactly as entered; it is only read as a number
/// when progress is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique, strictly positive identifier
    pub id: u32,
    /// Icon identifier, fixed at creation
    pub icon: String,
    /// Display name
    pub name: String,
    /// Goal in days, as entered
    #[serde(deserialize_with = "target_from_text_or_number")]
    pub target: String,
    /// Days in creation order; the position is the only identity of a day
    #[serde(default)]
    pub days: Vec<DayEntry>,
}

impl Habit {
    /// Create a habit with an empty day log
    pub fn new(id: u32, icon: String, name: String, target: String) -> Self {
        Self {
            id,
            icon,
            name,
            target,
            days: Vec::new(),
        }
    }

    /// Progress towards the target, in whole percent
    pub fn progress(&self) -> u32 {
        progress_percent(self.days.len(), &self.target)
    }

    /// 1-based number of the day that would be added next
    pub fn next_day_number(&self) -> usize {
        self.days.len() + 1
    }
}

impl Entity for Habit {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Older blobs may carry the target as a JSON number.
fn target_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Target {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Target::deserialize(deserializer)? {
        Target::Text(text) => text,
        Target::Number(number) => number.to_string(),
    })
}
