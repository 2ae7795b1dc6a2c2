//! Derivation of processing units from a validated request.

use catalyst_core::{Entity, ExecutionRequest};
use tracing::debug;

use crate::context::Context;
use crate::processor::ProcessorFactory;

/// Builds one context per execution parameter whose resolved kind is
/// processable, in request order. Display and reserved parameters yield no
/// unit of work but stay in every context's parameter set so processors
/// and the final report still see them.
pub struct EntityBuilder {
    factory: ProcessorFactory,
}

impl EntityBuilder {
    pub fn new(factory: ProcessorFactory) -> Self {
        Self { factory }
    }

    pub fn build(&self, request: &ExecutionRequest) -> Vec<Context> {
        let mut contexts = Vec::new();

        for parameter in request.iter() {
            let Some(kind) = parameter.kind() else {
                continue;
            };
            if !kind.is_processable() {
                debug!(
                    parameter = parameter.name(),
                    kind = %kind,
                    "Skipping non-processable parameter"
                );
                continue;
            }

            let entity = Entity::new(parameter.name(), kind);
            let processor = (self.factory)(&entity);
            contexts.push(Context::new(entity, request.clone(), processor));
        }

        contexts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::LogProcessor;
    use crate::resolver::TypeResolver;
    use catalyst_core::{
        EntityKind, ExecutionParameter, ParameterCatalog, ParameterDefinition,
    };

    fn prepared_request() -> ExecutionRequest {
        let catalog = ParameterCatalog::new(vec![
            ParameterDefinition::new("report", EntityKind::File),
            ParameterDefinition::new("section", EntityKind::Computation),
            ParameterDefinition::new("help", EntityKind::Display),
            ParameterDefinition::new("internal", EntityKind::Reserved).with_reserved(true),
        ])
        .unwrap();
        let mut request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("report"),
            ExecutionParameter::new("help"),
            ExecutionParameter::new("section").with_value("CPA"),
            ExecutionParameter::new("internal"),
        ]);
        TypeResolver::new(&catalog).resolve(&mut request).unwrap();
        request
    }

    #[test]
    fn test_only_processable_kinds_yield_contexts() {
        let request = prepared_request();
        let contexts = EntityBuilder::new(LogProcessor::factory()).build(&request);

        let names: Vec<_> = contexts
            .iter()
            .map(|c| c.entity().name().to_string())
            .collect();
        assert_eq!(names, ["report", "section"]);
    }

    #[test]
    fn test_every_context_sees_the_full_parameter_set() {
        let request = prepared_request();
        let contexts = EntityBuilder::new(LogProcessor::factory()).build(&request);

        for context in &contexts {
            assert_eq!(context.parameters().len(), request.len());
            assert!(context.parameters().get("help").is_some());
        }
    }

    #[test]
    fn test_contexts_do_not_share_parameter_state() {
        let request = prepared_request();
        let mut contexts = EntityBuilder::new(LogProcessor::factory()).build(&request);

        let (entity, mut parameters, processor) = contexts.remove(0).into_parts();
        parameters.iter_mut().for_each(|p| p.mark_processed());
        drop((entity, processor));

        assert!(contexts[0].parameters().iter().all(|p| !p.is_processed()));
    }
}
