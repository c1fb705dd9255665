//! Per-check configuration
//!
//! Checks receive their configuration as a JSON object. [`CheckConfig`]
//! gives typed, validating access to it.

use serde_json::{Map, Value};
use thiserror::Error;

/// A check rejected its configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("configuration must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown configuration key '{key}' (expected one of: {expected})")]
    UnknownKey { key: String, expected: String },

    #[error("configuration key '{key}' must be {expected}, found {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigurationError {
    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// JSON object configuring one check instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckConfig {
    values: Map<String, Value>,
}

impl CheckConfig {
    /// Empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value; `null` is treated as an empty object
    pub fn from_value(value: Value) -> Result<Self, ConfigurationError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(values) => Ok(Self { values }),
            other => Err(ConfigurationError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// Set a key (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Whether `key` is present with a non-null value
    pub fn has(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !v.is_null())
    }

    /// Configured keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// String value of `key`
    pub fn string(&self, key: &str) -> Result<Option<&str>, ConfigurationError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_type(key, "a string", other)),
        }
    }

    /// Array-of-strings value of `key`
    pub fn string_list(&self, key: &str) -> Result<Option<Vec<String>>, ConfigurationError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(wrong_type(key, "an array of strings", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(wrong_type(key, "an array of strings", other)),
        }
    }

    /// Boolean value of `key`
    pub fn boolean(&self, key: &str) -> Result<Option<bool>, ConfigurationError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(wrong_type(key, "a boolean", other)),
        }
    }

    /// Fail on the first key not in `allowed`
    pub fn deny_unknown_keys(&self, allowed: &[&str]) -> Result<(), ConfigurationError> {
        match self.keys().find(|key| !allowed.contains(key)) {
            Some(key) => Err(ConfigurationError::UnknownKey {
                key: key.to_string(),
                expected: allowed.join(", "),
            }),
            None => Ok(()),
        }
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }
}

impl TryFrom<Value> for CheckConfig {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn wrong_type(key: &str, expected: &'static str, found: &Value) -> ConfigurationError {
    ConfigurationError::WrongType {
        key: key.to_string(),
        expected,
        found: kind_of(found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
