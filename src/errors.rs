//! Error types for inventory operations

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors that can occur while building or querying an inventory tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Malformed input rejected at construction time
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Partition does not fit into the remaining disk space
    #[error("Failed to add partition: requested {requested} GiB, only {remaining} GiB remaining")]
    CapacityExceeded { requested: u64, remaining: u64 },

    /// Lookup found no matching child
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            InventoryError::Deserialization(err.to_string())
        } else {
            InventoryError::Serialization(err.to_string())
        }
    }
}
