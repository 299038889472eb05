//! Domain Layer
//!
//! Habit entities and the progress rule.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod habit;
mod progress;

pub use entity::Entity;
pub use habit::{Habit, DayEntry};
pub use progress::progress_percent;
