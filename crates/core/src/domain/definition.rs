use serde::{Deserialize, Serialize};

use super::kind::EntityKind;

/// A single catalog entry: one recognized parameter and its constraints.
///
/// Definitions are read-only once the catalog is built; the orchestrator
/// shares them across workers behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Lower priority is processed first where ordering matters.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub mandatory: bool,
    /// Internal-only entries; never yield a processing unit.
    #[serde(default)]
    pub reserved: bool,
    pub kind: EntityKind,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Empty means unrestricted.
    #[serde(default)]
    pub allowed_values: Vec<String>,
    /// Names of parameters that must not be supplied together with this one.
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Names of parameters that must be supplied together with this one.
    #[serde(default)]
    pub includes: Vec<String>,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            priority: 0,
            mandatory: false,
            reserved: false,
            kind,
            aliases: Vec::new(),
            allowed_values: Vec::new(),
            excludes: Vec::new(),
            includes: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn with_reserved(mut self, reserved: bool) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_allowed_value(mut self, value: impl Into<String>) -> Self {
        self.allowed_values.push(value.into());
        self
    }

    pub fn with_exclude(mut self, name: impl Into<String>) -> Self {
        self.excludes.push(name.into());
        self
    }

    pub fn with_include(mut self, name: impl Into<String>) -> Self {
        self.includes.push(name.into());
        self
    }

    /// Whether `name` matches this definition's name or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }

    /// Whether `value` is acceptable for this definition.
    ///
    /// An empty allowed-value set accepts anything, including an absent
    /// value. A non-empty set requires a case-insensitive match and rejects
    /// an absent value.
    pub fn accepts_value(&self, value: Option<&str>) -> bool {
        if self.allowed_values.is_empty() {
            return true;
        }
        match value {
            Some(v) if !v.is_empty() => self
                .allowed_values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(v)),
            _ => false,
        }
    }
}
