//! Repository capability ports
//!
//! The validation layer never inspects repository internals; it only talks
//! to these three capabilities.

use crate::error::Result;
use crate::value_objects::{NodeTypeDefinition, PropertyType, Value};

/// Prefix to URI registry of the repository
pub trait NamespaceRegistry {
    /// URI registered for `prefix`
    fn uri(&self, prefix: &str) -> Option<String>;

    /// Prefix registered for `uri`
    fn prefix(&self, uri: &str) -> Option<String>;

    /// Register a new mapping. Re-registering an identical mapping is a no-op;
    /// remapping an existing prefix to another URI fails.
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()>;
}

/// Node type manager of the repository
pub trait NodeTypeManager {
    /// Whether a node type with this qualified name is registered
    fn has_node_type(&self, name: &str) -> bool;

    /// Registered definition for `name`
    fn node_type(&self, name: &str) -> Option<&NodeTypeDefinition>;

    /// Register a batch of definitions atomically
    ///
    /// Definitions may reference each other and any already registered type.
    /// When `allow_update` is false, a definition whose name is already
    /// registered makes the whole batch fail. Returns the registered names.
    fn register_node_types(
        &mut self,
        definitions: Vec<NodeTypeDefinition>,
        allow_update: bool,
    ) -> Result<Vec<String>>;
}

/// Converts raw default values into typed values
pub trait ValueFactory {
    /// Create a value of `property_type` from its string form
    fn create_value(&self, raw: &str, property_type: PropertyType) -> Result<Value>;
}

/// Borrowed view of the capabilities a schema registration needs
pub struct SchemaCapabilities<'a> {
    pub node_types: &'a mut dyn NodeTypeManager,
    pub namespaces: &'a mut dyn NamespaceRegistry,
    pub values: &'a dyn ValueFactory,
}

/// A repository session able to hand out its schema capabilities
pub trait RepositorySession {
    /// Borrow the schema manager, namespace registry and value factory together
    fn schema_capabilities(&mut self) -> SchemaCapabilities<'_>;
}
