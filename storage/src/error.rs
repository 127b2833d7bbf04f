//! Storage error types.
//!
//! Returned by [`crate::RegistryStore`] implementations; callers decide whether a failure is fatal.

use thiserror::Error;

/// Errors that can occur when loading or saving the registry.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
