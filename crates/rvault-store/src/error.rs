use rvault_types::ReplicaId;

/// Errors from replica store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// A required argument was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced replica does not exist.
    #[error("replica not found: {0}")]
    NotFound(ReplicaId),

    /// The store holds no replicas, so there is nothing to vote over.
    #[error("store has no replicas")]
    EmptyStore,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
