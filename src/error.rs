// src/error.rs
use ndb_version::{ParseVersionError, UnknownTier};
use thiserror::Error;

/// Error type for assessment runs.
#[derive(Debug, Error)]
pub enum CompatError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseVersionError),
    #[error(transparent)]
    Tier(#[from] UnknownTier),
}

/// Result type for assessment runs.
pub type Result<T> = std::result::Result<T, CompatError>;
