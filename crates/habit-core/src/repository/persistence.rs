//! Persistence Adapter
//!
//! Reads and writes the whole habit collection as one JSON array under a
//! single storage key. Loading never fails; saving reports storage errors.

use log::{debug, warn};

use crate::domain::Habit;
use super::traits::{KeyValueStorage, StorageError};

#[derive(Debug, Clone)]
pub struct HabitPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> HabitPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored collection.
    ///
    /// An absent key, an unreadable backend, malformed JSON or a value that is
    /// not an array of habits all yield an empty collection.
    pub fn load(&self) -> Vec<Habit> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored habits under {}", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not read {}: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Habit>>(&raw) {
            Ok(habits) => {
                debug!("Loaded {} habits", habits.len());
                habits
            }
            Err(e) => {
                warn!("Ignoring malformed data under {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `habits`
    pub fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(habits)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!("Saved {} habits", habits.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayEntry;
    use crate::repository::MemoryStorage;

    const KEY: &str = "HABBIT_KEY";

    #[test]
    fn test_absent_key_loads_empty() {
        let persistence = HabitPersistence::new(MemoryStorage::new(), KEY);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_malformed_and_non_array_load_empty() {
        for raw in ["{not json", "null", r#"{"id":1}"#, "42", r#"[{"id":"x"}]"#] {
            let persistence = HabitPersistence::new(MemoryStorage::with_item(KEY, raw), KEY);
            assert!(persistence.load().is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn test_save_then_load_empty() {
        let persistence = HabitPersistence::new(MemoryStorage::new(), KEY);
        persistence.save(&[]).unwrap();
        assert_eq!(persistence.storage().get_item(KEY).unwrap(), Some("[]".to_string()));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let persistence = HabitPersistence::new(MemoryStorage::new(), KEY);
        let mut habit = Habit::new(1, "sport".to_string(), "Run".to_string(), "10".to_string());
        habit.days.push(DayEntry::new("5 km"));
        habit.days.push(DayEntry::new(""));
        let habits = vec![
            habit,
            Habit::new(4, "water".to_string(), "Water".to_string(), "30".to_string()),
        ];

        persistence.save(&habits).unwrap();
        assert_eq!(persistence.load(), habits);
    }

    #[test]
    fn test_reads_data_written_by_earlier_versions() {
        let raw = r#"[{"id":1,"icon":"sport","name":"Run","target":"10","days":[{"comment":"ok"}]}]"#;
        let persistence = HabitPersistence::new(MemoryStorage::with_item(KEY, raw), KEY);
        let habits = persistence.load();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].days[0].comment, "ok");
    }

    #[test]
    fn test_save_reports_rejected_write() {
        let storage = MemoryStorage::new();
        storage.set_reject_writes(true);
        let persistence = HabitPersistence::new(storage, KEY);
        assert!(matches!(persistence.save(&[]), Err(StorageError::WriteRejected(_))));
    }
}
