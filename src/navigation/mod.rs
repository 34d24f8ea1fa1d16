// ============================================================================
// Navigation - screen sequencing and action dispatch
// ============================================================================
//
// Each user action is a discrete `Action` value dispatched against the
// `Session` and a borrowed `OrderStore`. The session never keeps a copy of
// an order, only the id of the one open for editing.
//
// ============================================================================

pub mod screen;
pub mod action;
pub mod session;

pub use screen::Screen;
pub use action::{Action, Field};
pub use session::{NavigationError, Session, Transition};
