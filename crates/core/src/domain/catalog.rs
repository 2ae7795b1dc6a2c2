use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CoreError;

use super::definition::ParameterDefinition;

/// The closed set of recognized parameter definitions.
///
/// Lookup tables for canonical names and aliases are built once at
/// construction and never change afterwards, so the catalog can be shared
/// across worker tasks without synchronization.
#[derive(Debug, Clone)]
pub struct ParameterCatalog {
    definitions: Vec<Arc<ParameterDefinition>>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl ParameterCatalog {
    /// Build a catalog from a list of definitions.
    ///
    /// Fails when a name or alias appears twice across the whole catalog,
    /// or when a definition lists itself (by name or alias) in its own
    /// excludes/includes.
    pub fn new(definitions: Vec<ParameterDefinition>) -> Result<Self, CoreError> {
        let mut by_name = HashMap::new();
        let mut by_alias = HashMap::new();

        for (index, definition) in definitions.iter().enumerate() {
            let self_referential = definition
                .excludes
                .iter()
                .chain(definition.includes.iter())
                .any(|n| definition.answers_to(n));
            if self_referential {
                return Err(CoreError::SelfReferentialDefinition {
                    name: definition.name.clone(),
                });
            }

            if by_name.contains_key(&definition.name) || by_alias.contains_key(&definition.name) {
                return Err(CoreError::DuplicateDefinition {
                    name: definition.name.clone(),
                });
            }
            by_name.insert(definition.name.clone(), index);

            for alias in &definition.aliases {
                if by_name.contains_key(alias) || by_alias.contains_key(alias) {
                    return Err(CoreError::DuplicateDefinition {
                        name: alias.clone(),
                    });
                }
                by_alias.insert(alias.clone(), index);
            }
        }

        Ok(Self {
            definitions: definitions.into_iter().map(Arc::new).collect(),
            by_name,
            by_alias,
        })
    }

    /// Resolve a raw name against the catalog: exact name first, then alias.
    /// Matching is case-sensitive.
    pub fn resolve(&self, name: &str) -> Option<Arc<ParameterDefinition>> {
        self.by_name
            .get(name)
            .or_else(|| self.by_alias.get(name))
            .map(|&index| Arc::clone(&self.definitions[index]))
    }

    /// Look up a definition by its canonical name only.
    pub fn get(&self, name: &str) -> Option<Arc<ParameterDefinition>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.definitions[index]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name) || self.by_alias.contains_key(name)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ParameterDefinition>> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
