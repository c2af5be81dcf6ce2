//! Store Errors

use thiserror::Error;

/// Result type for store reducer operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons the store can refuse an action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no item with id {0}")]
    NotFound(String),
    #[error("an item with id {0} already exists")]
    DuplicateId(String),
    #[error("reorder payload of {actual} items is not a permutation of the {expected} stored items")]
    ReorderMismatch { expected: usize, actual: usize },
}
