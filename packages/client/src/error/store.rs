//! Storage boundary errors

use thiserror::Error;

/// Failures from the settings or script record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i64),
    #[error("record {0} already exists")]
    DuplicateId(i64),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("storage backend error: {0}")]
    Backend(super::BoxError),
}
