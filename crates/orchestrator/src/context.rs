//! Per-entity execution context.

use catalyst_core::{Entity, ExecutionRequest};

use crate::processor::Processor;

/// Self-contained bundle submitted to the dispatcher: the entity, an
/// independent copy of the full parameter set, and the processor assigned
/// to it. The parameter copy is the concurrency boundary; no two contexts
/// share mutable parameter state.
pub struct Context {
    entity: Entity,
    parameters: ExecutionRequest,
    processor: Box<dyn Processor>,
}

impl Context {
    pub fn new(entity: Entity, parameters: ExecutionRequest, processor: Box<dyn Processor>) -> Self {
        Self {
            entity,
            parameters,
            processor,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn parameters(&self) -> &ExecutionRequest {
        &self.parameters
    }

    pub(crate) fn into_parts(self) -> (Entity, ExecutionRequest, Box<dyn Processor>) {
        (self.entity, self.parameters, self.processor)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("entity", &self.entity)
            .field("parameters", &self.parameters.len())
            .finish()
    }
}
