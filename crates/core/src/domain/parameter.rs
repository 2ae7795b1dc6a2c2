use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::definition::ParameterDefinition;
use super::kind::EntityKind;

/// Processing status of one execution parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    #[default]
    Unprocessed,
    Processed,
}

impl ParameterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unprocessed => "unprocessed",
            Self::Processed => "processed",
        }
    }
}

/// Wire form of one request entry, as read from a request document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl From<ParameterRecord> for ExecutionParameter {
    fn from(record: ParameterRecord) -> Self {
        Self {
            name: record.name,
            value: record.value,
            properties: record.properties,
            definition: None,
            kind: None,
            status: ParameterStatus::Unprocessed,
        }
    }
}

/// One parameter instance supplied for a run.
///
/// Created from the request document, resolved against the catalog by the
/// type resolver, and mutated by processors (status, runtime properties).
/// `Clone` produces the independent copy handed to each context: status,
/// value and properties are owned per copy, while the definition
/// back-reference shares the read-only catalog entry.
#[derive(Debug, Clone)]
pub struct ExecutionParameter {
    name: String,
    value: Option<String>,
    properties: HashMap<String, Value>,
    definition: Option<Arc<ParameterDefinition>>,
    kind: Option<EntityKind>,
    status: ParameterStatus,
}

impl ExecutionParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            properties: HashMap::new(),
            definition: None,
            kind: None,
            status: ParameterStatus::Unprocessed,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Name as supplied in the request (may be an alias).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn definition(&self) -> Option<&Arc<ParameterDefinition>> {
        self.definition.as_ref()
    }

    /// Canonical catalog name, once resolved.
    pub fn canonical_name(&self) -> Option<&str> {
        self.definition.as_ref().map(|d| d.name.as_str())
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    pub fn status(&self) -> ParameterStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ParameterStatus) {
        self.status = status;
    }

    pub fn mark_processed(&mut self) {
        self.status = ParameterStatus::Processed;
    }

    pub fn is_processed(&self) -> bool {
        self.status == ParameterStatus::Processed
    }

    /// Resolution post-condition: attach the catalog entry, inherit its
    /// kind, and reset the status to unprocessed.
    pub fn resolve(&mut self, definition: Arc<ParameterDefinition>) {
        self.kind = Some(definition.kind);
        self.definition = Some(definition);
        self.status = ParameterStatus::Unprocessed;
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
