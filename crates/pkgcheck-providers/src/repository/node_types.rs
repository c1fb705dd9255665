//! In-memory node type manager
//!
//! Batches are validated as a whole before anything is stored: every
//! referenced type must already exist or be part of the same batch, mixins
//! may only extend mixins, and supertypes must not form a cycle.

use super::builtin;
use pkgcheck_domain::{Error, NodeTypeDefinition, NodeTypeManager, Result};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Node type definitions keyed by qualified name
#[derive(Debug, Clone)]
pub struct InMemoryNodeTypeManager {
    types: BTreeMap<String, NodeTypeDefinition>,
}

impl InMemoryNodeTypeManager {
    /// Create a manager holding the built-in node types
    pub fn new() -> Self {
        let types = builtin::node_types()
            .into_iter()
            .map(|definition| (definition.name.clone(), definition))
            .collect();
        Self { types }
    }

    /// Registered node type names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Number of registered node types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn validate_batch(
        &self,
        definitions: &[NodeTypeDefinition],
        allow_update: bool,
    ) -> Result<()> {
        let mut batch: BTreeMap<&str, &NodeTypeDefinition> = BTreeMap::new();
        for definition in definitions {
            let name = definition.name.as_str();
            if name.is_empty() {
                return Err(Error::invalid_argument("node type name must not be empty"));
            }
            if batch.insert(name, definition).is_some() {
                return Err(Error::node_type(name, "defined more than once in the same batch"));
            }
            if !allow_update && self.types.contains_key(name) {
                return Err(Error::node_type(name, "node type is already registered"));
            }
        }

        for definition in definitions {
            for referenced in definition.referenced_types() {
                if !batch.contains_key(referenced) && !self.types.contains_key(referenced) {
                    return Err(Error::node_type(
                        &definition.name,
                        format!("references unknown node type {referenced}"),
                    ));
                }
            }
            if definition.is_mixin {
                let primary_supertype = definition.supertypes.iter().find(|supertype| {
                    batch
                        .get(supertype.as_str())
                        .copied()
                        .or_else(|| self.types.get(supertype.as_str()))
                        .is_some_and(|s| !s.is_mixin)
                });
                if let Some(supertype) = primary_supertype {
                    return Err(Error::node_type(
                        &definition.name,
                        format!("mixin cannot extend primary type {supertype}"),
                    ));
                }
            }
        }

        let mut done = HashSet::new();
        for &name in batch.keys() {
            let mut visiting = HashSet::new();
            if inherits_from_itself(name, &batch, &mut visiting, &mut done) {
                return Err(Error::node_type(name, "supertype hierarchy contains a cycle"));
            }
        }
        Ok(())
    }
}

impl Default for InMemoryNodeTypeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn inherits_from_itself<'a>(
    name: &'a str,
    batch: &BTreeMap<&'a str, &'a NodeTypeDefinition>,
    visiting: &mut HashSet<&'a str>,
    done: &mut HashSet<&'a str>,
) -> bool {
    if done.contains(name) {
        return false;
    }
    if !visiting.insert(name) {
        return true;
    }
    if let Some(&definition) = batch.get(name) {
        for supertype in &definition.supertypes {
            if inherits_from_itself(supertype.as_str(), batch, visiting, done) {
                return true;
            }
        }
    }
    visiting.remove(name);
    done.insert(name);
    false
}

impl NodeTypeManager for InMemoryNodeTypeManager {
    fn has_node_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    fn node_type(&self, name: &str) -> Option<&NodeTypeDefinition> {
        self.types.get(name)
    }

    fn register_node_types(
        &mut self,
        definitions: Vec<NodeTypeDefinition>,
        allow_update: bool,
    ) -> Result<Vec<String>> {
        self.validate_batch(&definitions, allow_update)?;

        let mut names = Vec::with_capacity(definitions.len());
        for definition in definitions {
            debug!(node_type = %definition.name, "Node type registered");
            names.push(definition.name.clone());
            self.types.insert(definition.name.clone(), definition);
        }
        Ok(names)
    }
}
