//! Error types for file store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during `FileStore` operations.
#[derive(Error, Debug)]
pub enum FileStoreError {
    /// Reading or writing the storage file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The stored data is not a valid task array.
    #[error("failed to parse stored tasks in {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Serializing the store to JSON failed.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}
