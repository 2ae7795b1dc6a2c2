//! Type resolution of raw parameter names against the catalog.

use catalyst_core::{ExecutionRequest, ParameterCatalog};
use tracing::debug;

use crate::error::{OrchestratorError, Result};

/// Maps each execution parameter to its catalog definition.
///
/// Resolution is closed: a name matching neither a definition's name nor
/// any alias aborts the whole pass. On success every parameter carries its
/// definition back-reference, its resolved entity kind, and an
/// `Unprocessed` status.
pub struct TypeResolver<'a> {
    catalog: &'a ParameterCatalog,
}

impl<'a> TypeResolver<'a> {
    pub fn new(catalog: &'a ParameterCatalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, request: &mut ExecutionRequest) -> Result<()> {
        for parameter in request.iter_mut() {
            let definition = self
                .catalog
                .resolve(parameter.name())
                .ok_or_else(|| OrchestratorError::UnknownParameter(parameter.name().to_string()))?;

            debug!(
                parameter = parameter.name(),
                definition = %definition.name,
                kind = %definition.kind,
                "Parameter resolved"
            );
            parameter.resolve(definition);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::{
        EntityKind, ExecutionParameter, ParameterDefinition, ParameterStatus,
    };

    fn catalog() -> ParameterCatalog {
        ParameterCatalog::new(vec![
            ParameterDefinition::new("section", EntityKind::Computation)
                .with_alias("s")
                .with_alias("sec"),
            ParameterDefinition::new("help", EntityKind::Display).with_alias("h"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolution_sets_definition_kind_and_status() {
        let catalog = catalog();
        let mut request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("sec").with_value("CPA"),
            ExecutionParameter::new("help"),
        ]);

        TypeResolver::new(&catalog).resolve(&mut request).unwrap();

        let section = request.get("sec").unwrap();
        assert_eq!(section.canonical_name(), Some("section"));
        assert_eq!(section.kind(), Some(EntityKind::Computation));
        assert_eq!(section.status(), ParameterStatus::Unprocessed);

        let help = request.get("help").unwrap();
        assert_eq!(help.kind(), Some(EntityKind::Display));
    }

    #[test]
    fn test_unknown_parameter_aborts_resolution() {
        let catalog = catalog();
        let mut request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("section"),
            ExecutionParameter::new("bogus"),
        ]);

        let err = TypeResolver::new(&catalog)
            .resolve(&mut request)
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::UnknownParameter(name) if name == "bogus"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let catalog = catalog();
        let mut request =
            ExecutionRequest::from_parameters(vec![ExecutionParameter::new("Section")]);
        assert!(TypeResolver::new(&catalog).resolve(&mut request).is_err());
    }
}
