//! Tracker Integration Tests
//!
//! End-to-end flows over the tracker with in-memory storage.

#[cfg(test)]
mod tests {
    use crate::config::TrackerConfig;
    use crate::domain::{DayEntry, Habit};
    use crate::form::{self, FormValues, ADD_DAY_FIELDS, ADD_HABIT_FIELDS};
    use crate::navigation::fragment_for;
    use crate::repository::{HabitPersistence, KeyValueStorage, MemoryStorage, StorageError};
    use crate::tracker::HabitTracker;

    fn open(storage: &MemoryStorage, fragment: &str) -> HabitTracker<MemoryStorage> {
        HabitTracker::open(storage.clone(), TrackerConfig::default(), fragment)
    }

    fn seed(storage: &MemoryStorage, habits: &[Habit]) {
        HabitPersistence::new(storage.clone(), "HABBIT_KEY")
            .save(habits)
            .expect("Failed to seed storage");
    }

    #[test]
    fn test_first_habit_from_empty_storage() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");
        assert!(tracker.habits().is_empty());
        assert!(tracker.header().is_none());

        let created = tracker
            .add_habit("sun".to_string(), "Drink water".to_string(), "30".to_string())
            .expect("Failed to add habit");
        tracker.persist().expect("Persist failed");

        assert_eq!(
            created,
            Habit {
                id: 1,
                icon: "sun".to_string(),
                name: "Drink water".to_string(),
                target: "30".to_string(),
                days: vec![],
            }
        );
        assert_eq!(tracker.active_id(), Some(1));
        assert_eq!(tracker.header().unwrap().progress_label(), "0%");
        assert_eq!(fragment_for(created.id), "#1");

        let reopened = open(&storage, "#1");
        assert_eq!(reopened.habits(), tracker.habits());
    }

    #[test]
    fn test_progress_after_adding_a_day() {
        let storage = MemoryStorage::new();
        let mut habit = Habit::new(1, "sport".to_string(), "Run".to_string(), "4".to_string());
        habit.days = vec![DayEntry::new("a"), DayEntry::new("b")];
        seed(&storage, &[habit]);

        let mut tracker = open(&storage, "#1");
        assert_eq!(tracker.header().unwrap().progress_label(), "50%");

        assert!(tracker.add_day("c".to_string()));
        assert_eq!(tracker.header().unwrap().progress_label(), "75%");

        for comment in ["d", "e", "f"] {
            tracker.add_day(comment.to_string());
        }
        assert_eq!(tracker.header().unwrap().progress, 100);
    }

    #[test]
    fn test_ids_keep_increasing_across_reloads() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");
        let mut ids = Vec::new();
        for name in ["A", "B", "C"] {
            ids.push(tracker.add_habit("food".to_string(), name.to_string(), "3".to_string()).unwrap().id);
            tracker.persist().unwrap();
        }
        let mut reopened = open(&storage, "");
        ids.push(reopened.add_habit("food".to_string(), "D".to_string(), "3".to_string()).unwrap().id);

        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fragment_picks_active_on_open() {
        let storage = MemoryStorage::new();
        seed(
            &storage,
            &[
                Habit::new(1, "sport".to_string(), "Run".to_string(), "4".to_string()),
                Habit::new(2, "water".to_string(), "Water".to_string(), "4".to_string()),
            ],
        );
        assert_eq!(open(&storage, "#2").active_id(), Some(2));
        assert_eq!(open(&storage, "#7").active_id(), Some(1));
        assert_eq!(open(&storage, "").active_id(), Some(1));
    }

    #[test]
    fn test_no_new_habit_after_largest_stored_id() {
        let storage = MemoryStorage::with_item(
            "HABBIT_KEY",
            r#"[{"id":4294967295,"icon":"sport","name":"Run","target":"4","days":[]}]"#,
        );
        let mut tracker = open(&storage, "");
        assert_eq!(tracker.active_id(), Some(u32::MAX));

        assert!(tracker.add_habit("food".to_string(), "Cook".to_string(), "3".to_string()).is_none());
        assert_eq!(tracker.habits().len(), 1);
        assert_eq!(tracker.active_id(), Some(u32::MAX));
    }

    #[test]
    fn test_deleting_first_day_is_a_no_op() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");
        tracker.add_habit("sport".to_string(), "Run".to_string(), "4".to_string());
        tracker.add_day("only".to_string());

        assert!(!tracker.delete_day(0));
        assert_eq!(tracker.day_rows().len(), 1);
    }

    #[test]
    fn test_delete_day_persists_shifted_log() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");
        tracker.add_habit("sport".to_string(), "Run".to_string(), "4".to_string());
        for comment in ["a", "b", "c"] {
            tracker.add_day(comment.to_string());
        }
        assert!(tracker.delete_day(1));
        tracker.persist().unwrap();

        let reopened = open(&storage, "#1");
        let comments: Vec<_> = reopened.day_rows().into_iter().map(|r| r.comment).collect();
        assert_eq!(comments, vec!["a", "c"]);
    }

    #[test]
    fn test_failed_write_keeps_memory_and_reports() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");
        tracker.add_habit("sport".to_string(), "Run".to_string(), "4".to_string());
        tracker.persist().unwrap();

        storage.set_reject_writes(true);
        tracker.add_day("lost".to_string());
        assert!(matches!(tracker.persist(), Err(StorageError::WriteRejected(_))));
        assert_eq!(tracker.day_rows().len(), 1);

        let reopened = open(&storage, "#1");
        assert!(reopened.day_rows().is_empty());
    }

    #[test]
    fn test_form_submit_flow() {
        let storage = MemoryStorage::new();
        let mut tracker = open(&storage, "");

        let mut habit_form: FormValues = [("icon", "water"), ("name", ""), ("target", "8")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let invalid = form::validate(&habit_form, ADD_HABIT_FIELDS).unwrap_err();
        assert!(invalid.contains("name"));
        assert!(tracker.habits().is_empty());

        habit_form.insert("name".to_string(), "Water".to_string());
        let record = form::validate(&habit_form, ADD_HABIT_FIELDS).unwrap();
        tracker.add_habit(record["icon"].clone(), record["name"].clone(), record["target"].clone());
        tracker.persist().unwrap();

        let day_form: FormValues = [("comment".to_string(), "glass".to_string())].into_iter().collect();
        let record = form::validate(&day_form, ADD_DAY_FIELDS).unwrap();
        tracker.add_day(record["comment"].clone());
        tracker.persist().unwrap();

        let raw = storage.get_item("HABBIT_KEY").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"icon":"water","name":"Water","target":"8","days":[{"comment":"glass"}]}]"#
        );
    }
}
