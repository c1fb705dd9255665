//! In-memory namespace registry

use super::builtin;
use crate::constants::RESERVED_PREFIX_START;
use pkgcheck_domain::{Error, NamespaceRegistry, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Bidirectional prefix/URI map
#[derive(Debug, Clone)]
pub struct InMemoryNamespaceRegistry {
    by_prefix: BTreeMap<String, String>,
    by_uri: BTreeMap<String, String>,
}

impl InMemoryNamespaceRegistry {
    /// Create a registry holding the built-in namespaces
    pub fn new() -> Self {
        let mut registry = Self {
            by_prefix: BTreeMap::new(),
            by_uri: BTreeMap::new(),
        };
        for (prefix, uri) in builtin::NAMESPACES {
            registry.insert(prefix, uri);
        }
        registry
    }

    /// Registered prefixes, sorted
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.by_prefix.keys().map(String::as_str)
    }

    fn insert(&mut self, prefix: &str, uri: &str) {
        self.by_prefix.insert(prefix.to_string(), uri.to_string());
        self.by_uri.insert(uri.to_string(), prefix.to_string());
    }
}

impl Default for InMemoryNamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceRegistry for InMemoryNamespaceRegistry {
    fn uri(&self, prefix: &str) -> Option<String> {
        self.by_prefix.get(prefix).cloned()
    }

    fn prefix(&self, uri: &str) -> Option<String> {
        self.by_uri.get(uri).cloned()
    }

    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        if prefix.is_empty() || prefix.contains(':') {
            return Err(Error::namespace(format!("invalid namespace prefix '{prefix}'")));
        }
        if uri.is_empty() {
            return Err(Error::namespace(format!(
                "namespace URI for prefix '{prefix}' must not be empty"
            )));
        }

        match (self.by_prefix.get(prefix), self.by_uri.get(uri)) {
            (Some(existing), _) if existing == uri => Ok(()),
            (Some(existing), _) => Err(Error::namespace(format!(
                "prefix '{prefix}' is already mapped to '{existing}'"
            ))),
            (None, Some(other)) => Err(Error::namespace(format!(
                "namespace '{uri}' is already registered with prefix '{other}'"
            ))),
            (None, None) => {
                if prefix.to_lowercase().starts_with(RESERVED_PREFIX_START) {
                    return Err(Error::namespace(format!("prefix '{prefix}' is reserved")));
                }
                debug!(prefix, uri, "Namespace registered");
                self.insert(prefix, uri);
                Ok(())
            }
        }
    }
}
