//! Event system for the Catalyst orchestrator.
//!
//! Carries run- and unit-level lifecycle events from the dispatcher to any
//! interested observer (report writers, monitoring, tests).

mod bus;
mod types;

pub use bus::EventBus;
pub use types::*;
