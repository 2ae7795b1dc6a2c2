//! Structured-document collaborator: header + content + footer records.
//!
//! The orchestrator consumes catalog and request documents through the
//! [`DocumentStore`] trait and never inspects header/footer semantics
//! beyond passing them through for report logging.

mod error;
mod model;
mod store;

pub use error::DocumentError;
pub use model::{Document, Footer, Header};
pub use store::{DocumentStore, JsonDocumentFile};
