//! The orchestrator's front door: prepare and run one execution.

use std::time::Instant;

use catalyst_core::{ExecutionRequest, ParameterCatalog};
use document::Header;
use events::{Event, EventBus};
use tracing::{debug, info};

use crate::context::Context;
use crate::dispatcher::Dispatcher;
use crate::entity::EntityBuilder;
use crate::error::{OrchestratorError, Result};
use crate::processor::ProcessorFactory;
use crate::report::RunReport;
use crate::resolver::TypeResolver;
use crate::validator::Validator;

const DEFAULT_WORKER_COUNT: usize = 4;

/// Explicit construction inputs for a run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub worker_count: usize,
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepares and executes one run.
///
/// Construction performs the whole preparation pipeline — type resolution,
/// validation, context building — and fails before anything is dispatched
/// when the request does not hold up against the catalog.
pub struct Runner {
    catalog: ParameterCatalog,
    request: ExecutionRequest,
    contexts: Vec<Context>,
    config: RunnerConfig,
    event_bus: Option<EventBus>,
    request_header: Option<Header>,
}

impl Runner {
    pub fn new(
        catalog: ParameterCatalog,
        mut request: ExecutionRequest,
        factory: ProcessorFactory,
        config: RunnerConfig,
    ) -> Result<Self> {
        if config.worker_count == 0 {
            return Err(OrchestratorError::InvalidWorkerCount(config.worker_count));
        }

        TypeResolver::new(&catalog).resolve(&mut request)?;
        Validator::new(&catalog).validate(&request)?;
        let contexts = EntityBuilder::new(factory).build(&request);

        info!(
            parameters = request.len(),
            contexts = contexts.len(),
            "Execution prepared"
        );
        for context in &contexts {
            debug!(
                entity = context.entity().name(),
                kind = %context.entity().kind(),
                "Context initialized"
            );
        }

        Ok(Self {
            catalog,
            request,
            contexts,
            config,
            event_bus: None,
            request_header: None,
        })
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Request document header, passed through for report logging only.
    pub fn with_request_header(mut self, header: Header) -> Self {
        self.request_header = Some(header);
        self
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    pub fn request(&self) -> &ExecutionRequest {
        &self.request
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Dispatch every context, wait for all of them, and aggregate.
    pub async fn run(self) -> Result<RunReport> {
        let started = Instant::now();

        info!(
            contexts = self.contexts.len(),
            workers = self.config.worker_count,
            description = self
                .request_header
                .as_ref()
                .map(|h| h.description.as_str())
                .unwrap_or_default(),
            "Runner started"
        );
        for parameter in self.request.iter() {
            info!(
                name = parameter.name(),
                kind = parameter.kind().map(|k| k.as_str()).unwrap_or("unknown"),
                value = parameter.value().unwrap_or_default(),
                description = parameter
                    .definition()
                    .map(|d| d.description.as_str())
                    .unwrap_or_default(),
                "Parameter"
            );
        }

        let mut dispatcher = Dispatcher::new(self.config.worker_count)?;
        if let Some(bus) = self.event_bus.clone() {
            dispatcher = dispatcher.with_event_bus(bus);
        }

        let results = dispatcher.dispatch(self.contexts).await?;
        let report = RunReport::from_results(results, started.elapsed());

        if let Some(bus) = &self.event_bus {
            bus.publish(Event::RunCompleted {
                status: report.status().to_string(),
                elapsed_ms: report.elapsed().as_millis() as u64,
                failed_units: report.failed_units(),
            });
        }

        report.log_summary();
        Ok(report)
    }
}
