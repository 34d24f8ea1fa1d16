// ============================================================================
// Event Sourcing Core - Generic Infrastructure Abstractions
// ============================================================================
//
// GENERIC infrastructure shared by every aggregate. No domain-specific code
// (no Order) lives here.
//
// ============================================================================

pub mod aggregate;
pub mod event;

// Re-export core types for convenience
pub use aggregate::{Aggregate, AggregateId};
pub use event::{DomainEvent, EventEnvelope};
