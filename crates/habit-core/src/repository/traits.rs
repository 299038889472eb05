//! Repository Layer - Storage Seam
//!
//! Defines the key-value interface the persistence adapter writes through.
//! Implementations can use browser localStorage, in-memory maps, etc.

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled, lock poisoned)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the write (quota exceeded, read-only)
    #[error("storage rejected write: {0}")]
    WriteRejected(String),
    /// The collection could not be encoded
    #[error("failed to encode habits: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
