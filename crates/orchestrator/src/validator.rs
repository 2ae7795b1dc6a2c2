//! Request validation against the catalog.

use catalyst_core::{ExecutionRequest, ParameterCatalog};
use tracing::debug;

use crate::error::{OrchestratorError, Result};

/// Two-layer validation: per-parameter checks first, then cross-parameter
/// constraints over the whole supplied set. Both layers fail fast on the
/// first violation; nothing is dispatched on failure.
pub struct Validator<'a> {
    catalog: &'a ParameterCatalog,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a ParameterCatalog) -> Self {
        Self { catalog }
    }

    pub fn validate(&self, request: &ExecutionRequest) -> Result<()> {
        self.validate_each(request)?;
        self.validate_incompatibilities(request)?;
        self.validate_requirements(request)?;
        debug!(
            parameters = request.len(),
            "Request validated against catalog"
        );
        Ok(())
    }

    /// Existence and allowed-value checks for every supplied parameter.
    fn validate_each(&self, request: &ExecutionRequest) -> Result<()> {
        for parameter in request.iter() {
            let definition = parameter
                .definition()
                .ok_or_else(|| OrchestratorError::UnknownParameter(parameter.name().to_string()))?;

            if !definition.accepts_value(parameter.value()) {
                return Err(OrchestratorError::DisallowedValue {
                    parameter: definition.name.clone(),
                    value: parameter.value().unwrap_or_default().to_string(),
                });
            }
        }
        Ok(())
    }

    /// No supplied parameter may appear together with one it excludes.
    fn validate_incompatibilities(&self, request: &ExecutionRequest) -> Result<()> {
        for parameter in request.iter() {
            let Some(definition) = parameter.definition() else {
                continue;
            };
            for name in &definition.excludes {
                let other = self
                    .catalog
                    .resolve(name)
                    .ok_or_else(|| OrchestratorError::UnknownParameter(name.clone()))?;
                if request.contains_definition(&other.name) {
                    return Err(OrchestratorError::IncompatibleParameters(
                        definition.name.clone(),
                        other.name.clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Every parameter required by a supplied parameter must be supplied.
    fn validate_requirements(&self, request: &ExecutionRequest) -> Result<()> {
        for parameter in request.iter() {
            let Some(definition) = parameter.definition() else {
                continue;
            };
            for name in &definition.includes {
                let other = self
                    .catalog
                    .resolve(name)
                    .ok_or_else(|| OrchestratorError::UnknownParameter(name.clone()))?;
                if !request.contains_definition(&other.name) {
                    return Err(OrchestratorError::MissingRequiredParameter(
                        definition.name.clone(),
                        other.name.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}
