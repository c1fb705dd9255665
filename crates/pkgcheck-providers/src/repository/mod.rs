//! In-memory repository
//!
//! A self-contained stand-in for a content repository's schema layer,
//! seeded with the built-in namespaces and node types.

mod builtin;
pub mod namespaces;
pub mod node_types;
pub mod values;

pub use namespaces::InMemoryNamespaceRegistry;
pub use node_types::InMemoryNodeTypeManager;
pub use values::StandardValueFactory;

use pkgcheck_domain::{RepositorySession, SchemaCapabilities};

/// Repository session holding all schema capabilities in memory
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    namespaces: InMemoryNamespaceRegistry,
    node_types: InMemoryNodeTypeManager,
    values: StandardValueFactory,
}

impl InMemoryRepository {
    /// Create a repository with the built-in namespaces and node types
    pub fn new() -> Self {
        Self {
            namespaces: InMemoryNamespaceRegistry::new(),
            node_types: InMemoryNodeTypeManager::new(),
            values: StandardValueFactory,
        }
    }

    /// Namespace registry
    pub fn namespaces(&self) -> &InMemoryNamespaceRegistry {
        &self.namespaces
    }

    /// Node type manager
    pub fn node_types(&self) -> &InMemoryNodeTypeManager {
        &self.node_types
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositorySession for InMemoryRepository {
    fn schema_capabilities(&mut self) -> SchemaCapabilities<'_> {
        SchemaCapabilities {
            node_types: &mut self.node_types,
            namespaces: &mut self.namespaces,
            values: &self.values,
        }
    }
}
