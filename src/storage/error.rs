//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur reading or writing persisted values
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped to a storage location
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),

    /// Storage backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
