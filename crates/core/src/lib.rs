//! Domain model for the Catalyst execution orchestrator.
//!
//! This crate holds the parameter catalog, execution request, and entity
//! types shared by the orchestrator and its collaborators. Everything here
//! is plain data: no I/O, no async.

pub mod domain;
pub mod error;

pub use domain::catalog::ParameterCatalog;
pub use domain::definition::ParameterDefinition;
pub use domain::entity::Entity;
pub use domain::kind::EntityKind;
pub use domain::parameter::{ExecutionParameter, ParameterRecord, ParameterStatus};
pub use domain::request::ExecutionRequest;
pub use error::CoreError;
