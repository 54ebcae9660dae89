// Error types for server setup

use pennant_storage::StoreError;
use thiserror::Error;

/// Errors raised while configuring or bootstrapping a [`Server`](crate::Server).
///
/// Request handling never produces these; facade calls return the store's
/// own [`StoreError`] untouched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to seed store: {0}")]
    Seed(#[from] StoreError),

    #[error("Failed to install log subscriber: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
