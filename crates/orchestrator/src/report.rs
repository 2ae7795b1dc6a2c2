//! Run-level aggregation of unit results.

use std::time::Duration;

use tracing::{error, info};

use crate::result::{ExecutionResult, ExecutionStatus};

/// Outcome of a whole run: every unit's result in submission order plus
/// the run-level verdict. Results are owned and never mutated after
/// aggregation.
#[derive(Debug)]
pub struct RunReport {
    results: Vec<ExecutionResult>,
    status: ExecutionStatus,
    elapsed: Duration,
}

impl RunReport {
    /// Aggregate unit results. The run fails if any unit failed.
    pub fn from_results(results: Vec<ExecutionResult>, elapsed: Duration) -> Self {
        let status = if results.iter().any(ExecutionResult::is_failed) {
            ExecutionStatus::Failed
        } else {
            ExecutionStatus::Succeeded
        };
        Self {
            results,
            status,
            elapsed,
        }
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    pub fn is_failed(&self) -> bool {
        self.status == ExecutionStatus::Failed
    }

    /// Total wall-clock time of the run, not the sum of unit times.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn failed_units(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    /// Log the execution summary: one line per unit, one line per error.
    pub fn log_summary(&self) {
        info!(
            units = self.results.len(),
            status = %self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "Run finished"
        );

        for result in &self.results {
            info!(
                unit = result.name(),
                status = %result.status(),
                elapsed_ms = result.elapsed().as_millis() as u64,
                processed = result.processed_parameters().len(),
                unprocessed = result.unprocessed_parameters().len(),
                "Unit result"
            );
            for raised in result.errors() {
                error!(
                    unit = result.name(),
                    parameter = %raised.parameter,
                    error = %raised.error,
                    "Error raised during processing"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessorError;
    use catalyst_core::ExecutionRequest;

    fn unit(name: &str, failed: bool) -> ExecutionResult {
        let mut result = ExecutionResult::new(name, ExecutionRequest::new());
        if failed {
            result.record_error(name, ProcessorError::failed("boom"));
            result.set_status(ExecutionStatus::Failed);
        } else {
            result.set_status(ExecutionStatus::Succeeded);
        }
        result
    }

    #[test]
    fn test_run_succeeds_when_all_units_succeed() {
        let report =
            RunReport::from_results(vec![unit("a", false), unit("b", false)], Duration::ZERO);
        assert_eq!(report.status(), ExecutionStatus::Succeeded);
        assert_eq!(report.failed_units(), 0);
    }

    #[test]
    fn test_one_failed_unit_fails_the_run() {
        let report =
            RunReport::from_results(vec![unit("a", false), unit("b", true)], Duration::ZERO);
        assert!(report.is_failed());
        assert_eq!(report.failed_units(), 1);
        // Unit results keep their own statuses.
        assert_eq!(report.results()[0].status(), ExecutionStatus::Succeeded);
    }

    #[test]
    fn test_empty_run_succeeds() {
        let report = RunReport::from_results(Vec::new(), Duration::ZERO);
        assert_eq!(report.status(), ExecutionStatus::Succeeded);
    }
}
