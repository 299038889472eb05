//! Habit Tracker
//!
//! Coordinator state behind the view: the habit collection, its persistence
//! and the active habit, plus the view models the components render.
//!
//! Mutations only change memory and report whether anything changed. The
//! caller re-renders and then calls [`HabitTracker::persist`].

use log::{debug, info};

use crate::config::TrackerConfig;
use crate::domain::Habit;
use crate::navigation::initial_active_id;
use crate::repository::{HabitPersistence, HabitRepository, KeyValueStorage, StorageError};

/// One button of the habit switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: u32,
    pub icon: String,
    pub name: String,
    pub active: bool,
}

/// Name and progress of the active habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub name: String,
    pub progress: u32,
}

impl HeaderView {
    /// Text shown next to the bar, also used as the bar width
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// One row of the day list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayRow {
    /// Position in the day log, used by the delete control
    pub index: usize,
    /// 1-based day number
    pub number: usize,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct HabitTracker<S> {
    config: TrackerConfig,
    persistence: HabitPersistence<S>,
    repo: HabitRepository,
    active_id: Option<u32>,
}

impl<S: KeyValueStorage> HabitTracker<S> {
    /// Load the stored habits and pick the active one from `fragment`
    pub fn open(storage: S, config: TrackerConfig, fragment: &str) -> Self {
        let persistence = HabitPersistence::new(storage, config.storage_key.clone());
        let repo = HabitRepository::new(persistence.load());
        let active_id = initial_active_id(&repo, fragment);
        info!("Opened tracker with {} habits, active {:?}", repo.habits().len(), active_id);
        Self {
            config,
            persistence,
            repo,
            active_id,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn habits(&self) -> &[Habit] {
        self.repo.habits()
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active_id
    }

    pub fn active_habit(&self) -> Option<&Habit> {
        self.active_id.and_then(|id| self.repo.find_by_id(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.repo.find_by_id(id).is_some()
    }

    /// Make habit `id` active. Unknown ids leave everything unchanged.
    pub fn switch_active(&mut self, id: u32) -> bool {
        if !self.contains(id) {
            debug!("Ignoring switch to unknown habit {}", id);
            return false;
        }
        self.active_id = Some(id);
        true
    }

    /// Create a habit and make it active; see [`HabitRepository::add_habit`]
    pub fn add_habit(&mut self, icon: String, name: String, target: String) -> Option<Habit> {
        let habit = self.repo.add_habit(icon, name, target)?;
        self.active_id = Some(habit.id);
        Some(habit)
    }

    /// Log a day on the active habit
    pub fn add_day(&mut self, comment: String) -> bool {
        match self.active_id {
            Some(id) => self.repo.add_day(id, comment),
            None => false,
        }
    }

    /// Whether the active habit has a removable day at `index`
    pub fn can_delete_day(&self, index: usize) -> bool {
        self.active_id
            .is_some_and(|id| self.repo.can_delete_day(id, index))
    }

    /// Remove a day of the active habit; see [`HabitRepository::delete_day`]
    pub fn delete_day(&mut self, index: usize) -> bool {
        match self.active_id {
            Some(id) => self.repo.delete_day(id, index),
            None => false,
        }
    }

    /// Write the full collection to storage
    pub fn persist(&self) -> Result<(), StorageError> {
        self.persistence.save(self.repo.habits())
    }

    // ========================
    // View Models
    // ========================

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.repo
            .habits()
            .iter()
            .map(|habit| MenuEntry {
                id: habit.id,
                icon: habit.icon.clone(),
                name: habit.name.clone(),
                active: self.active_id == Some(habit.id),
            })
            .collect()
    }

    pub fn header(&self) -> Option<HeaderView> {
        self.active_habit().map(|habit| HeaderView {
            name: habit.name.clone(),
            progress: habit.progress(),
        })
    }

    pub fn day_rows(&self) -> Vec<DayRow> {
        self.active_habit()
            .map(|habit| {
                habit
                    .days
                    .iter()
                    .enumerate()
                    .map(|(index, day)| DayRow {
                        index,
                        number: index + 1,
                        comment: day.comment.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number shown on the "add day" form
    pub fn next_day_number(&self) -> usize {
        self.active_habit().map(Habit::next_day_number).unwrap_or(1)
    }
}
