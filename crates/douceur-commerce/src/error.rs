//! Domain error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// An entity failed validation at ingestion time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A durable-storage collaborator reported a failure.
    #[error("storage error: {0}")]
    Storage(String),
}
