use crate::event_sourcing::EventStoreError;

// ============================================================================
// Order Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order #{0} not found")]
    NotFound(u64),

    #[error("Invalid status {0:?}: expected Pending, Processing or Completed")]
    InvalidStatus(String),

    #[error("Order is already placed")]
    AlreadyPlaced,

    #[error("Aggregate not initialized")]
    NotInitialized,

    #[error(transparent)]
    EventStore(#[from] EventStoreError),
}
