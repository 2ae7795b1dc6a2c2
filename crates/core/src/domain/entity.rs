use serde_json::Value;

use super::kind::EntityKind;

/// A unit of work derived from one processable execution parameter.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    kind: EntityKind,
    content: Option<Value>,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            content: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Kind-specific payload; opaque to the orchestrator.
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: Value) {
        self.content = Some(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new("section", EntityKind::Computation);
        assert_eq!(entity.name(), "section");
        assert_eq!(entity.kind(), EntityKind::Computation);
        assert!(entity.content().is_none());
    }

    #[test]
    fn test_content_assignment() {
        let mut entity = Entity::new("report", EntityKind::File);
        entity.set_content(serde_json::json!({ "path": "/tmp/report" }));
        assert!(entity.content().is_some());
    }
}
