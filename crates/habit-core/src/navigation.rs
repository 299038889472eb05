//! URL fragment handling
//!
//! The active habit is addressed as `#<id>` so a view can be bookmarked.

use crate::repository::HabitRepository;

/// Fragment that addresses habit `id`
pub fn fragment_for(id: u32) -> String {
    format!("#{}", id)
}

/// Habit id encoded in a fragment such as `#3` (a leading `#` is optional)
pub fn parse_fragment(fragment: &str) -> Option<u32> {
    fragment.trim_start_matches('#').trim().parse().ok()
}

/// Habit to show first: the one named by the fragment if it exists,
/// otherwise the first stored habit, otherwise none.
pub fn initial_active_id(repo: &HabitRepository, fragment: &str) -> Option<u32> {
    parse_fragment(fragment)
        .and_then(|id| repo.find_by_id(id))
        .or_else(|| repo.first())
        .map(|habit| habit.id)
}
