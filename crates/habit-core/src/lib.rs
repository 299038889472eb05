//! Habit Tracker Core
//!
//! Layered state for the habit tracker:
//! - domain: habits, day entries and the progress rule
//! - repository: storage seam, JSON persistence, in-memory collection
//! - tracker: active habit and the view models the UI renders
//! - form / navigation: form validation and URL fragment handling

pub mod config;
pub mod domain;
pub mod form;
pub mod navigation;
pub mod repository;
pub mod tracker;

pub use config::TrackerConfig;
pub use domain::{DayEntry, Entity, Habit};
pub use repository::{HabitPersistence, HabitRepository, KeyValueStorage, MemoryStorage, StorageError};
pub use tracker::{DayRow, HabitTracker, HeaderView, MenuEntry};
