use super::parameter::{ExecutionParameter, ParameterStatus};

/// The ordered set of parameters supplied for one run.
///
/// Insertion order is preserved end to end: the entity builder iterates it,
/// the dispatcher reports in it. `Clone` is the deep copy handed to each
/// context.
#[derive(Debug, Clone, Default)]
pub struct ExecutionRequest {
    parameters: Vec<ExecutionParameter>,
}

impl ExecutionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: Vec<ExecutionParameter>) -> Self {
        let mut request = Self::new();
        for parameter in parameters {
            request.add(parameter);
        }
        request
    }

    /// Add a parameter. A parameter that resolves to (or is supplied under)
    /// a name already present is ignored.
    pub fn add(&mut self, parameter: ExecutionParameter) {
        let duplicate = self.parameters.iter().any(|existing| {
            existing.name() == parameter.name()
                || match (existing.canonical_name(), parameter.canonical_name()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
        });
        if !duplicate {
            self.parameters.push(parameter);
        }
    }

    /// Find by supplied name.
    pub fn get(&self, name: &str) -> Option<&ExecutionParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Find by resolved canonical catalog name.
    pub fn find_by_definition(&self, canonical: &str) -> Option<&ExecutionParameter> {
        self.parameters
            .iter()
            .find(|p| p.canonical_name() == Some(canonical))
    }

    pub fn contains_definition(&self, canonical: &str) -> bool {
        self.find_by_definition(canonical).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionParameter> {
        self.parameters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ExecutionParameter> {
        self.parameters.iter_mut()
    }

    /// Parameters currently in the given status, as independent copies.
    pub fn with_status(&self, status: ParameterStatus) -> Self {
        Self {
            parameters: self
                .parameters
                .iter()
                .filter(|p| p.status() == status)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl IntoIterator for ExecutionRequest {
    type Item = ExecutionParameter;
    type IntoIter = std::vec::IntoIter<ExecutionParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::definition::ParameterDefinition;
    use crate::domain::kind::EntityKind;
    use std::sync::Arc;

    #[test]
    fn test_insertion_order_is_preserved() {
        let request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("c"),
            ExecutionParameter::new("a"),
            ExecutionParameter::new("b"),
        ]);
        let names: Vec<_> = request.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_supplied_name_is_ignored() {
        let request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("section").with_value("CPA"),
            ExecutionParameter::new("section").with_value("TAK"),
        ]);
        assert_eq!(request.len(), 1);
        assert_eq!(request.get("section").unwrap().value(), Some("CPA"));
    }

    #[test]
    fn test_duplicate_resolved_definition_is_ignored() {
        let def = Arc::new(ParameterDefinition::new("section", EntityKind::Computation));
        let mut first = ExecutionParameter::new("s");
        first.resolve(Arc::clone(&def));
        let mut second = ExecutionParameter::new("sec");
        second.resolve(def);

        let mut request = ExecutionRequest::new();
        request.add(first);
        request.add(second);
        assert_eq!(request.len(), 1);
    }

    #[test]
    fn test_find_by_definition() {
        let def = Arc::new(ParameterDefinition::new("section", EntityKind::Computation));
        let mut param = ExecutionParameter::new("sec");
        param.resolve(def);

        let mut request = ExecutionRequest::new();
        request.add(param);

        assert!(request.contains_definition("section"));
        assert!(request.get("sec").is_some());
        assert!(request.get("section").is_none());
    }

    #[test]
    fn test_with_status_returns_copies() {
        let mut request = ExecutionRequest::from_parameters(vec![
            ExecutionParameter::new("a"),
            ExecutionParameter::new("b"),
        ]);
        request.iter_mut().next().unwrap().mark_processed();

        let processed = request.with_status(ParameterStatus::Processed);
        let unprocessed = request.with_status(ParameterStatus::Unprocessed);
        assert_eq!(processed.len(), 1);
        assert_eq!(unprocessed.len(), 1);
        assert_eq!(processed.get("a").unwrap().status(), ParameterStatus::Processed);
        assert_eq!(processed.len() + unprocessed.len(), request.len());
    }
}
