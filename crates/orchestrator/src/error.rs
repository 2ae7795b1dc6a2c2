use catalyst_core::{CoreError, EntityKind};
use document::DocumentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Value {value:?} is not allowed for parameter {parameter}")]
    DisallowedValue { parameter: String, value: String },

    #[error("Parameters {0} and {1} are incompatible")]
    IncompatibleParameters(String, String),

    #[error("Parameter {0} requires parameter {1}")]
    MissingRequiredParameter(String, String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CoreError),

    #[error("Worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("Dispatch interrupted: {0}")]
    DispatchInterrupted(String),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Error raised by a processor while working on one parameter.
///
/// Recorded on the owning unit's execution result; never fatal to sibling
/// units.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Processing failed: {0}")]
    Failed(String),

    #[error("Processor does not handle entity kind {0}")]
    UnsupportedKind(EntityKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessorError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = OrchestratorError::IncompatibleParameters("verbose".into(), "quiet".into());
        assert_eq!(
            error.to_string(),
            "Parameters verbose and quiet are incompatible"
        );
    }

    #[test]
    fn test_processor_error_helper() {
        let error = ProcessorError::failed("no input");
        assert!(error.to_string().contains("no input"));
    }
}
