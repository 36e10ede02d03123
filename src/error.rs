//! Error types for table creation and insertion.

use std::collections::TryReserveError;
use thiserror::Error;

/// Reasons `insert` can refuse a binding. The table is unchanged in
/// every case.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("key is already bound")]
    DuplicateKey,
    #[error("out of memory while storing binding: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

impl InsertError {
    /// True when the key was already bound, as opposed to an allocation failure.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, InsertError::DuplicateKey)
    }
}

/// Reasons a table could not be constructed.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("bucket count must be non-zero")]
    ZeroBuckets,
    #[error("out of memory while allocating buckets: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
