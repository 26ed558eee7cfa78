//! Store error types.
//!
//! Only I/O and encoding problems on load/save become errors; every
//! validation problem is reported through boolean returns or skipped
//! with a warning.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for store persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the persisted list failed
    #[error("Failed to read hidden-block list {}: {source}", path.display())]
    ReadFailed {
        /// Path of the persisted list
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing the persisted list failed
    #[error("Failed to write hidden-block list {}: {source}", path.display())]
    WriteFailed {
        /// Path of the persisted list
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Serializing the list to JSON failed
    #[error("Failed to encode hidden-block list: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Read failure at the given path
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        Self::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Write failure at the given path
    pub fn write_failed(path: &Path, source: io::Error) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}
