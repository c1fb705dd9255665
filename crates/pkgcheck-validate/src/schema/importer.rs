//! Schema document importer
//!
//! Registers the content of one parsed schema document: namespace mappings
//! first, then node type definitions with every name resolved against the
//! repository's namespace registry. Types that already exist are left
//! untouched; the rest are registered as a single batch, so a document
//! either registers all of its new types or none of them.

use super::cnd::{self, ChildNodeTemplate, NodeTypeTemplate, PropertyTemplate};
use pkgcheck_domain::constants::NT_BASE;
use pkgcheck_domain::{
    ChildNodeDefinition, Error, NamespaceRegistry, NodeTypeDefinition, PropertyDefinition,
    PropertyType, Result, SchemaCapabilities, ValueFactory,
};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

/// What a single import changed in the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Prefixes of newly registered namespaces
    pub namespaces: Vec<String>,
    /// Node types registered by this import
    pub registered: Vec<String>,
    /// Node types skipped because they were already registered
    pub skipped: Vec<String>,
}

/// Imports schema documents into a repository
pub struct SchemaImporter;

impl SchemaImporter {
    /// Read, parse and register the document behind `reader`
    pub fn import(
        document: &str,
        reader: &mut dyn Read,
        capabilities: &mut SchemaCapabilities<'_>,
    ) -> Result<ImportOutcome> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|e| {
            Error::io_with_source(format!("cannot read schema document {document}"), e)
        })?;
        Self::import_str(document, &text, capabilities)
    }

    /// Parse and register schema text
    pub fn import_str(
        document: &str,
        text: &str,
        capabilities: &mut SchemaCapabilities<'_>,
    ) -> Result<ImportOutcome> {
        let parsed = cnd::parse(document, text)?;
        let mut outcome = ImportOutcome::default();
        let mut local_prefixes: HashMap<String, String> = HashMap::new();

        for mapping in &parsed.namespaces {
            let namespaces = &mut *capabilities.namespaces;
            if let Some(existing) = namespaces.prefix(&mapping.uri) {
                if existing != mapping.prefix {
                    debug!(
                        document,
                        prefix = %mapping.prefix,
                        registered = %existing,
                        "Namespace already registered under another prefix"
                    );
                }
            } else if let Some(taken) = namespaces.uri(&mapping.prefix) {
                return Err(Error::namespace(format!(
                    "prefix '{}' is already mapped to '{taken}' and cannot be mapped to '{}'",
                    mapping.prefix, mapping.uri
                )));
            } else {
                namespaces.register_namespace(&mapping.prefix, &mapping.uri)?;
                outcome.namespaces.push(mapping.prefix.clone());
            }
            local_prefixes.insert(mapping.prefix.clone(), mapping.uri.clone());
        }

        let resolver = NameResolver {
            local_prefixes,
            registry: &*capabilities.namespaces,
            values: capabilities.values,
        };
        let mut pending = Vec::new();
        for template in &parsed.node_types {
            let definition = resolver.node_type(template)?;
            if capabilities.node_types.has_node_type(&definition.name) {
                warn!(
                    document,
                    node_type = %definition.name,
                    "Node type already registered, skipping"
                );
                outcome.skipped.push(definition.name);
            } else {
                pending.push(definition);
            }
        }

        if !pending.is_empty() {
            outcome.registered = capabilities.node_types.register_node_types(pending, false)?;
        }
        debug!(
            document,
            registered = outcome.registered.len(),
            skipped = outcome.skipped.len(),
            "Schema document imported"
        );
        Ok(outcome)
    }
}

/// Turns document-local names and raw values into repository terms
struct NameResolver<'a> {
    local_prefixes: HashMap<String, String>,
    registry: &'a dyn NamespaceRegistry,
    values: &'a dyn ValueFactory,
}

impl NameResolver<'_> {
    /// Rewrite `prefix:local` to use the prefix the repository knows the URI by
    fn name(&self, name: &str) -> Result<String> {
        if name == "*" {
            return Ok(name.to_string());
        }
        let Some((prefix, local)) = name.split_once(':') else {
            return Ok(name.to_string());
        };
        if local.is_empty() {
            return Err(Error::namespace(format!("invalid qualified name '{name}'")));
        }
        let uri = self
            .local_prefixes
            .get(prefix)
            .cloned()
            .or_else(|| self.registry.uri(prefix))
            .ok_or_else(|| {
                Error::namespace(format!("unknown namespace prefix '{prefix}' in '{name}'"))
            })?;
        let registered = self
            .registry
            .prefix(&uri)
            .ok_or_else(|| Error::namespace(format!("namespace '{uri}' is not registered")))?;
        Ok(format!("{registered}:{local}"))
    }

    fn names(&self, names: &[String]) -> Result<Vec<String>> {
        names.iter().map(|n| self.name(n)).collect()
    }

    fn node_type(&self, template: &NodeTypeTemplate) -> Result<NodeTypeDefinition> {
        let name = self.name(&template.name)?;
        if name == "*" {
            return Err(Error::node_type(name, "node type name must not be residual"));
        }
        let mut definition =
            NodeTypeDefinition::new(name).with_supertypes(self.names(&template.supertypes)?);
        definition.is_abstract = template.is_abstract;
        definition.is_mixin = template.is_mixin;
        definition.orderable_child_nodes = template.orderable;
        definition.primary_item_name = template
            .primary_item
            .as_deref()
            .map(|item| self.name(item))
            .transpose()?;
        definition.property_definitions = template
            .properties
            .iter()
            .map(|p| self.property(&definition.name, p))
            .collect::<Result<_>>()?;
        definition.child_node_definitions = template
            .child_nodes
            .iter()
            .map(|c| self.child_node(c))
            .collect::<Result<_>>()?;
        Ok(definition)
    }

    fn property(&self, owner: &str, template: &PropertyTemplate) -> Result<PropertyDefinition> {
        let mut property =
            PropertyDefinition::new(self.name(&template.name)?, template.required_type);
        if !template.multiple && template.default_values.len() > 1 {
            return Err(Error::node_type(
                owner,
                format!(
                    "single-valued property {} declares {} default values",
                    property.name,
                    template.default_values.len()
                ),
            ));
        }
        let value_type = match template.required_type {
            PropertyType::Undefined => PropertyType::String,
            other => other,
        };
        property.default_values = template
            .default_values
            .iter()
            .map(|raw| {
                self.values.create_value(raw, value_type).map_err(|e| {
                    Error::node_type(
                        owner,
                        format!("invalid default value for {}: {e}", property.name),
                    )
                })
            })
            .collect::<Result<_>>()?;
        property.value_constraints = template.value_constraints.clone();
        property.mandatory = template.mandatory;
        property.autocreated = template.autocreated;
        property.protected = template.protected;
        property.multiple = template.multiple;
        Ok(property)
    }

    fn child_node(&self, template: &ChildNodeTemplate) -> Result<ChildNodeDefinition> {
        let required = if template.required_types.is_empty() {
            vec![NT_BASE.to_string()]
        } else {
            self.names(&template.required_types)?
        };
        let mut child = ChildNodeDefinition::new(self.name(&template.name)?, required);
        child.default_primary_type = template
            .default_type
            .as_deref()
            .map(|t| self.name(t))
            .transpose()?;
        child.mandatory = template.mandatory;
        child.autocreated = template.autocreated;
        child.protected = template.protected;
        child.same_name_siblings = template.same_name_siblings;
        Ok(child)
    }
}
