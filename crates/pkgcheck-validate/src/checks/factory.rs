//! Check factories
//!
//! A factory turns a [`CheckConfig`] into a fresh check instance, rejecting
//! configuration it cannot honor.

use super::config::{CheckConfig, ConfigurationError};
use super::contract::PackageCheck;

/// Builds check instances from configuration
pub trait CheckFactory {
    /// Implementation name the factory is registered under
    fn name(&self) -> &str;

    /// What the produced check verifies
    fn description(&self) -> &str {
        ""
    }

    /// Create a new check instance
    fn new_instance(
        &self,
        config: &CheckConfig,
    ) -> Result<Box<dyn PackageCheck>, ConfigurationError>;
}

/// Factory backed by a closure
///
/// Lets callers plug in checks without writing a factory type.
pub struct FnCheckFactory<F>
where
    F: Fn(&CheckConfig) -> Result<Box<dyn PackageCheck>, ConfigurationError>,
{
    name: String,
    description: String,
    build: F,
}

impl<F> FnCheckFactory<F>
where
    F: Fn(&CheckConfig) -> Result<Box<dyn PackageCheck>, ConfigurationError>,
{
    /// Create a factory registered as `name`
    pub fn new(name: impl Into<String>, build: F) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            build,
        }
    }

    /// Set the description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<F> CheckFactory for FnCheckFactory<F>
where
    F: Fn(&CheckConfig) -> Result<Box<dyn PackageCheck>, ConfigurationError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn new_instance(
        &self,
        config: &CheckConfig,
    ) -> Result<Box<dyn PackageCheck>, ConfigurationError> {
        (self.build)(config)
    }
}
