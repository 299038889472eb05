//! Repository Layer
//!
//! Storage abstraction, the JSON persistence adapter and the in-memory
//! habit collection.

mod traits;
mod memory;
mod persistence;
mod habit_repo;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStorage, StorageError};
pub use memory::MemoryStorage;
pub use persistence::HabitPersistence;
pub use habit_repo::HabitRepository;
