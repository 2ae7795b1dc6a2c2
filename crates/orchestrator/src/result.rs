//! Per-unit execution outcome.

use std::time::Duration;

use catalyst_core::{ExecutionRequest, ParameterStatus};

use crate::error::ProcessorError;

/// Status of one unit's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStatus {
    #[default]
    Unknown,
    Running,
    Succeeded,
    Failed,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised during processing, tagged with the parameter that
/// caused it.
#[derive(Debug)]
pub struct RaisedError {
    pub parameter: String,
    pub error: ProcessorError,
}

/// The outcome record produced by one processor.
///
/// Owns the parameter set the processor worked on. The processed and
/// unprocessed views are independent copies; mutating them never touches
/// this result.
#[derive(Debug)]
pub struct ExecutionResult {
    name: String,
    status: ExecutionStatus,
    elapsed: Duration,
    errors: Vec<RaisedError>,
    parameters: ExecutionRequest,
}

impl ExecutionResult {
    pub fn new(name: impl Into<String>, parameters: ExecutionRequest) -> Self {
        Self {
            name: name.into(),
            status: ExecutionStatus::Unknown,
            elapsed: Duration::ZERO,
            errors: Vec::new(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ExecutionStatus) {
        self.status = status;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Record a processor error without aborting the unit.
    pub fn record_error(&mut self, parameter: impl Into<String>, error: ProcessorError) {
        self.errors.push(RaisedError {
            parameter: parameter.into(),
            error,
        });
    }

    /// Errors in the order they were raised.
    pub fn errors(&self) -> &[RaisedError] {
        &self.errors
    }

    pub fn is_failed(&self) -> bool {
        self.status == ExecutionStatus::Failed
    }

    /// The full parameter set this unit worked on.
    pub fn parameters(&self) -> &ExecutionRequest {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ExecutionRequest {
        &mut self.parameters
    }

    /// Independently cloned view of the parameters a processor handled.
    pub fn processed_parameters(&self) -> ExecutionRequest {
        self.parameters.with_status(ParameterStatus::Processed)
    }

    /// Independently cloned view of the parameters left untouched.
    pub fn unprocessed_parameters(&self) -> ExecutionRequest {
        self.parameters.with_status(ParameterStatus::Unprocessed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::ExecutionParameter;

    fn result_with_mixed_statuses() -> ExecutionResult {
        let mut parameters = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("a"),
            ExecutionParameter::new("b"),
            ExecutionParameter::new("c"),
        ]);
        parameters.iter_mut().nth(1).unwrap().mark_processed();
        ExecutionResult::new("unit", parameters)
    }

    #[test]
    fn test_views_partition_the_full_set() {
        let result = result_with_mixed_statuses();
        let processed = result.processed_parameters();
        let unprocessed = result.unprocessed_parameters();

        assert_eq!(processed.len(), 1);
        assert_eq!(unprocessed.len(), 2);
        assert_eq!(processed.len() + unprocessed.len(), result.parameters().len());
        assert!(processed.get("b").is_some());
        assert!(unprocessed.get("b").is_none());
    }

    #[test]
    fn test_views_are_copies() {
        let result = result_with_mixed_statuses();
        let mut unprocessed = result.unprocessed_parameters();
        unprocessed.iter_mut().for_each(|p| p.mark_processed());

        // The source of truth is untouched.
        assert_eq!(result.unprocessed_parameters().len(), 2);
    }

    #[test]
    fn test_errors_keep_order() {
        let mut result = result_with_mixed_statuses();
        result.record_error("a", crate::error::ProcessorError::failed("first"));
        result.record_error("c", crate::error::ProcessorError::failed("second"));

        let errors = result.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].parameter, "a");
        assert_eq!(errors[1].parameter, "c");
    }
}
