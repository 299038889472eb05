//! Habit Repository
//!
//! The in-memory habit collection and its mutations.

use log::{debug, error};

use crate::domain::{DayEntry, Entity, Habit};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitRepository {
    habits: Vec<Habit>,
}

impl HabitRepository {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn first(&self) -> Option<&Habit> {
        self.habits.first()
    }

    /// Find habit by ID
    pub fn find_by_id(&self, id: u32) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id() == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id() == id)
    }

    /// ID for the next habit: one past the largest existing ID, so 1 when empty.
    /// None once the largest ID is `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        self.habits.iter().map(|habit| habit.id()).max().unwrap_or(0).checked_add(1)
    }

    /// Append a habit with an empty day log and return it.
    /// Returns None, adding nothing, when no ID is left.
    pub fn add_habit(&mut self, icon: String, name: String, target: String) -> Option<Habit> {
        let Some(id) = self.next_id() else {
            error!("No habit ID left after {}", u32::MAX);
            return None;
        };
        let habit = Habit::new(id, icon, name, target);
        debug!("Adding habit {} ({})", habit.id, habit.name);
        self.habits.push(habit.clone());
        Some(habit)
    }

    /// Append a day to habit `habit_id`. Returns false if there is no such habit.
    pub fn add_day(&mut self, habit_id: u32, comment: String) -> bool {
        match self.find_by_id_mut(habit_id) {
            Some(habit) => {
                habit.days.push(DayEntry { comment });
                true
            }
            None => false,
        }
    }

    /// Whether [`Self::delete_day`] would remove a day.
    ///
    /// Index 0 is never removable, so the first logged day stays. Unknown
    /// habits and out-of-range indexes are not removable either.
    pub fn can_delete_day(&self, habit_id: u32, index: usize) -> bool {
        index != 0
            && self
                .find_by_id(habit_id)
                .is_some_and(|habit| index < habit.days.len())
    }

    /// Remove the day at `index` from habit `habit_id`; later days shift down.
    /// Returns whether a day was removed.
    pub fn delete_day(&mut self, habit_id: u32, index: usize) -> bool {
        if !self.can_delete_day(habit_id, index) {
            return false;
        }
        match self.find_by_id_mut(habit_id) {
            Some(habit) => {
                habit.days.remove(index);
                true
            }
            None => false,
        }
    }
}
