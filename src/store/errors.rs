//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures. Absent records are not errors; they surface as
/// `None`/`false` from the individual operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
