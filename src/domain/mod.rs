// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Commands
// - Errors
// - Aggregate implementation
// - Store (command handling + read model)
//
// This layer is separate from the event sourcing infrastructure.
//
// ============================================================================

pub mod order;
