//! Storage error types for hospital-storage.
//!
//! [`StorageError`] covers the two failure modes of snapshot persistence:
//! file I/O and JSON (de)serialization.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
