// ============================================================================
// Event Store - in-memory, append-only event streams
// ============================================================================

mod event_store;

pub use event_store::{EventStore, EventStoreError};
