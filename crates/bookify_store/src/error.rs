//! Error types for the local store

use bookify_common::BookifyError;
use thiserror::Error;

/// Errors that can occur when reading or writing the local store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value did not have the expected shape
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store's lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// A stored value was readable JSON but not a valid entry
    #[error("Invalid value under '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<StoreError> for BookifyError {
    fn from(err: StoreError) -> Self {
        BookifyError::StorageError(err.to_string())
    }
}
