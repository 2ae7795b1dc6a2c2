//! Bounded concurrent execution of contexts.

use std::sync::Arc;
use std::time::Instant;

use events::{Event, EventBus};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::context::Context;
use crate::error::{OrchestratorError, Result};
use crate::processor::ProcessorState;
use crate::result::{ExecutionResult, ExecutionStatus};

/// Fixed-size worker pool over tokio tasks.
///
/// All contexts are submitted at once; at most `worker_count` run
/// concurrently. The single public operation blocks until every unit has
/// completed and returns results in submission order, so reporting is
/// deterministic regardless of scheduling. A unit failure never cancels
/// its siblings.
pub struct Dispatcher {
    worker_count: usize,
    event_bus: Option<EventBus>,
}

impl Dispatcher {
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(OrchestratorError::InvalidWorkerCount(worker_count));
        }
        Ok(Self {
            worker_count,
            event_bus: None,
        })
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run every context's processor and collect the results.
    pub async fn dispatch(&self, contexts: Vec<Context>) -> Result<Vec<ExecutionResult>> {
        let total = contexts.len();
        debug!(
            contexts = total,
            workers = self.worker_count,
            "Dispatching contexts"
        );
        if let Some(bus) = &self.event_bus {
            bus.publish(Event::RunStarted {
                contexts: total,
                workers: self.worker_count,
            });
        }

        let semaphore = Arc::new(Semaphore::new(self.worker_count));
        let mut join_set = JoinSet::new();

        for (index, context) in contexts.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let bus = self.event_bus.clone();
            join_set.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| OrchestratorError::DispatchInterrupted(e.to_string()))?;
                Ok::<_, OrchestratorError>((index, execute_context(context, bus).await))
            });
        }

        let mut slots: Vec<Option<ExecutionResult>> = (0..total).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            let (index, result) = joined
                .map_err(|e| OrchestratorError::DispatchInterrupted(e.to_string()))??;
            slots[index] = Some(result);
        }

        // Every submitted unit reported back exactly once.
        debug_assert!(slots.iter().all(Option::is_some));
        Ok(slots.into_iter().flatten().collect())
    }
}

/// Drive one processor through its lifecycle and produce the unit's result.
async fn execute_context(context: Context, bus: Option<EventBus>) -> ExecutionResult {
    let (entity, parameters, mut processor) = context.into_parts();
    let started = Instant::now();

    if let Some(bus) = &bus {
        bus.publish(Event::UnitStarted {
            name: entity.name().to_string(),
            kind: entity.kind().to_string(),
        });
    }

    let mut result = ExecutionResult::new(entity.name(), parameters);
    result.set_status(ExecutionStatus::Running);

    let mut state = ProcessorState::Created;
    let mut raised = Vec::new();

    match processor.initialize(&entity) {
        Ok(()) => state = ProcessorState::Initialized,
        Err(error) => {
            warn!(unit = entity.name(), error = %error, "Processor initialization failed");
            raised.push((entity.name().to_string(), error));
        }
    }

    if state == ProcessorState::Initialized {
        state = ProcessorState::Running;
        for parameter in result.parameters_mut().iter_mut() {
            if parameter.is_processed() || !processor.recognizes(parameter) {
                continue;
            }
            match processor.process_parameter(&entity, parameter).await {
                Ok(()) => parameter.mark_processed(),
                Err(error) => {
                    warn!(
                        unit = entity.name(),
                        parameter = parameter.name(),
                        error = %error,
                        "Parameter processing failed"
                    );
                    raised.push((parameter.name().to_string(), error));
                }
            }
        }
    }

    state = ProcessorState::Completed;
    debug!(
        unit = entity.name(),
        state = state.as_str(),
        "Processor lifecycle finished"
    );

    for (parameter, error) in raised {
        result.record_error(parameter, error);
    }
    result.set_status(if result.errors().is_empty() {
        ExecutionStatus::Succeeded
    } else {
        ExecutionStatus::Failed
    });
    result.set_elapsed(started.elapsed());

    if let Some(bus) = &bus {
        bus.publish(Event::UnitCompleted {
            name: result.name().to_string(),
            status: result.status().to_string(),
            elapsed_ms: result.elapsed().as_millis() as u64,
        });
    }

    result
}
