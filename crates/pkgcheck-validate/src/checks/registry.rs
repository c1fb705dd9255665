//! Check Registry
//!
//! Maps implementation names to factories and turns declarative
//! [`CheckSpec`] entries into loaded check instances.

use super::ac_handling::AcHandlingFactory;
use super::config::CheckConfig;
use super::factory::CheckFactory;
use crate::session::LoadedCheck;
use crate::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Declarative description of one check in the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Name used in reports; defaults to the check's own name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Implementation name the factory is registered under
    #[serde(rename = "impl")]
    pub implementation: String,
    /// JSON object handed to the factory
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub config: serde_json::Value,
    /// Leave the check out of the pipeline
    #[serde(default)]
    pub skip: bool,
}

impl CheckSpec {
    /// Spec for `implementation` with empty configuration
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            name: None,
            implementation: implementation.into(),
            config: serde_json::Value::Null,
            skip: false,
        }
    }

    /// Set the report name (builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the configuration object (builder pattern)
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = config;
        self
    }

    /// Mark the check as skipped (builder pattern)
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Name to use in diagnostics before the check exists
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.implementation)
    }
}

/// Registry of check factories
#[derive(Default)]
pub struct CheckRegistry {
    factories: BTreeMap<String, Box<dyn CheckFactory>>,
}

impl CheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in checks
    pub fn standard() -> Self {
        Self::new().with_factory(Box::new(AcHandlingFactory))
    }

    /// Register a factory, replacing any factory with the same name
    pub fn register(&mut self, factory: Box<dyn CheckFactory>) {
        let name = factory.name().to_string();
        if self.factories.insert(name.clone(), factory).is_some() {
            warn!(check = %name, "Replacing previously registered check factory");
        }
    }

    /// Register a factory (builder pattern)
    pub fn with_factory(mut self, factory: Box<dyn CheckFactory>) -> Self {
        self.register(factory);
        self
    }

    /// Factory registered under `name`
    pub fn get(&self, name: &str) -> Option<&dyn CheckFactory> {
        self.factories.get(name).map(AsRef::as_ref)
    }

    /// Registered implementation names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the check described by `spec`
    pub fn instantiate(&self, spec: &CheckSpec) -> Result<LoadedCheck> {
        let factory = self
            .get(&spec.implementation)
            .ok_or_else(|| ValidationError::UnknownCheck(spec.implementation.clone()))?;
        let config = CheckConfig::from_value(spec.config.clone()).map_err(|source| {
            ValidationError::Configuration {
                check: spec.label().to_string(),
                source,
            }
        })?;
        let check =
            factory
                .new_instance(&config)
                .map_err(|source| ValidationError::Configuration {
                    check: spec.label().to_string(),
                    source,
                })?;
        let name = spec.name.clone().unwrap_or_else(|| check.check_name());
        debug!(check = %name, implementation = %spec.implementation, "Check instantiated");
        Ok(LoadedCheck::new(name, check))
    }
}
