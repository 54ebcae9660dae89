//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a flag/variant store.
///
/// The facade surfaces these unchanged; mapping them onto a transport
/// status is left to the transport layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity exists for the given key or id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same key already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Required fields are missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other backend failure.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Create a not found error for a flag key.
    pub fn flag_not_found(key: &str) -> Self {
        Self::NotFound(format!("flag \"{}\"", key))
    }

    /// Create a not found error for a variant id.
    pub fn variant_not_found(flag_key: &str, id: &str) -> Self {
        Self::NotFound(format!("variant \"{}\" of flag \"{}\"", id, flag_key))
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is an already exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Check if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
