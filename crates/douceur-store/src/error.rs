//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend could not be opened.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to (de)serialize a stored document.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend rejected an operation (quota, security, poisoned lock).
    #[error("storage operation failed: {0}")]
    Backend(String),
}
