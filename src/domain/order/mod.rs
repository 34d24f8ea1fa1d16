// ============================================================================
// Order Domain - Business Logic for the laundry Order aggregate
// ============================================================================
//
// - Value objects (OrderStatus)
// - Events (OrderPlaced, StatusChanged)
// - Commands (UpdateStatus)
// - Errors (OrderError enum)
// - Aggregate (Order)
// - Store (OrderStore: id assignment, command handling, listing)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod store;

pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use aggregate::*;
pub use store::*;
