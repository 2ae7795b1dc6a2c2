//! Processor contract and the shipped default implementation.

use std::sync::Arc;

use async_trait::async_trait;
use catalyst_core::{Entity, ExecutionParameter};
use serde_json::Value;
use tracing::info;

use crate::error::ProcessorError;

/// Lifecycle of one processor, driven by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessorState {
    #[default]
    Created,
    Initialized,
    Running,
    Completed,
}

impl ProcessorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Initialized => "initialized",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

/// The unit of work bound to one context.
///
/// The dispatcher drives the lifecycle: `initialize` once, then
/// `process_parameter` for every unprocessed parameter the processor
/// recognizes. An error from `process_parameter` is recorded on the unit's
/// execution result and the remaining parameters still get their turn.
#[async_trait]
pub trait Processor: Send {
    fn name(&self) -> &str;

    /// Extension point; the default does nothing.
    fn initialize(&mut self, _entity: &Entity) -> Result<(), ProcessorError> {
        Ok(())
    }

    /// Whether this parameter is the processor's responsibility.
    fn recognizes(&self, parameter: &ExecutionParameter) -> bool;

    /// Perform the kind-specific work for one parameter.
    async fn process_parameter(
        &mut self,
        entity: &Entity,
        parameter: &mut ExecutionParameter,
    ) -> Result<(), ProcessorError>;
}

/// Builds the processor assigned to a freshly created entity.
pub type ProcessorFactory = Arc<dyn Fn(&Entity) -> Box<dyn Processor> + Send + Sync>;

/// Default processor: logs the work for every processable parameter and
/// stamps a `processed_by` runtime property.
pub struct LogProcessor {
    name: String,
}

impl LogProcessor {
    pub fn new(entity: &Entity) -> Self {
        Self {
            name: entity.name().to_string(),
        }
    }

    pub fn factory() -> ProcessorFactory {
        Arc::new(|entity| Box::new(LogProcessor::new(entity)) as Box<dyn Processor>)
    }
}

#[async_trait]
impl Processor for LogProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognizes(&self, parameter: &ExecutionParameter) -> bool {
        parameter.kind().is_some_and(|kind| kind.is_processable())
    }

    async fn process_parameter(
        &mut self,
        entity: &Entity,
        parameter: &mut ExecutionParameter,
    ) -> Result<(), ProcessorError> {
        info!(
            entity = entity.name(),
            kind = %entity.kind(),
            parameter = parameter.name(),
            value = parameter.value().unwrap_or_default(),
            "Processing parameter"
        );
        parameter.set_property("processed_by", Value::String(self.name.clone()));
        Ok(())
    }
}
