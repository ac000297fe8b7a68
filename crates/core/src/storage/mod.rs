//! Client-local key-value storage for persisted blobs.
//!
//! Favorites and watch history are each stored as one serialized string
//! under a fixed key, the same shape browser local storage offers.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored blob could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for key-value storage backends.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Factory function to open the configured store
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Sqlite => Ok(Arc::new(SqliteStore::new(&config.path)?)),
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
