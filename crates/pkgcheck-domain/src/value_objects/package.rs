//! Content package value objects
//!
//! Identity, properties and metadata of a content package, as supplied by
//! the package-format collaborator.

use crate::constants::{PROPERTY_AC_HANDLING, PROPERTY_DESCRIPTION, PROPERTY_REQUIRES_RESTART};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a content package: `group:name[:version]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageId {
    group: String,
    name: String,
    version: String,
}

impl PackageId {
    /// Create a package identity. `name` must not be empty.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("package name must not be empty"));
        }
        Ok(Self {
            group: group.into(),
            name,
            version: version.into(),
        })
    }

    /// Package group
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Package name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package version, empty when unversioned
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}:{}", self.group, self.name)
        } else {
            write!(f, "{}:{}:{}", self.group, self.name, self.version)
        }
    }
}

impl FromStr for PackageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, name] => Self::new(*group, *name, ""),
            [group, name, version] => Self::new(*group, *name, *version),
            _ => Err(Error::invalid_argument(format!(
                "invalid package id '{s}': expected group:name[:version]"
            ))),
        }
    }
}

impl TryFrom<String> for PackageId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PackageId> for String {
    fn from(id: PackageId) -> Self {
        id.to_string()
    }
}

/// Access control handling mode declared by a package
///
/// Controls what happens to existing access control entries when the
/// package is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcHandling {
    /// Leave existing access control untouched
    Ignore,
    /// Replace access control entries of principals present in the package
    Overwrite,
    /// Merge package entries into existing access control
    Merge,
    /// Merge, keeping existing entries for principals present in both
    MergePreserve,
    /// Remove all existing access control before applying the package
    Clear,
}

impl AcHandling {
    /// All modes, in declaration order
    pub const ALL: [AcHandling; 5] = [
        AcHandling::Ignore,
        AcHandling::Overwrite,
        AcHandling::Merge,
        AcHandling::MergePreserve,
        AcHandling::Clear,
    ];

    /// Lowercase name used in package properties and configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Overwrite => "overwrite",
            Self::Merge => "merge",
            Self::MergePreserve => "merge_preserve",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for AcHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcHandling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("unknown acHandling mode '{s}'")))
    }
}

/// Key/value property bag of a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageProperties {
    values: BTreeMap<String, String>,
}

impl PackageProperties {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder pattern)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set the access control handling mode (builder pattern)
    pub fn with_ac_handling(self, mode: AcHandling) -> Self {
        self.with_property(PROPERTY_AC_HANDLING, mode.as_str())
    }

    /// Raw property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Declared access control handling mode
    ///
    /// Returns `Ok(None)` when the package does not declare one and an error
    /// when the declared value is not a known mode.
    pub fn ac_handling(&self) -> Result<Option<AcHandling>> {
        match self.get(PROPERTY_AC_HANDLING).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    /// Package description
    pub fn description(&self) -> Option<&str> {
        self.get(PROPERTY_DESCRIPTION)
    }

    /// Whether installing the package requires a restart
    pub fn requires_restart(&self) -> bool {
        self.get(PROPERTY_REQUIRES_RESTART)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Iterate over all properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Package metadata from the package's meta directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaInf {
    /// Workspace filter roots covered by the package
    #[serde(default)]
    pub filter_roots: Vec<String>,
    /// Names of schema documents bundled with the package
    #[serde(default)]
    pub node_type_documents: Vec<String>,
    /// Whether the package carries a package definition node
    #[serde(default)]
    pub has_definition: bool,
}

/// Everything the package-format collaborator supplies for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    /// Package identity
    pub id: PackageId,
    /// Package properties
    #[serde(default)]
    pub properties: PackageProperties,
    /// Package metadata
    #[serde(default)]
    pub meta_inf: MetaInf,
    /// Identities of nested sub-packages
    #[serde(default)]
    pub subpackages: Vec<PackageId>,
}

impl PackageDescriptor {
    /// Create a descriptor with empty properties and metadata
    pub fn new(id: PackageId) -> Self {
        Self {
            id,
            properties: PackageProperties::default(),
            meta_inf: MetaInf::default(),
            subpackages: Vec::new(),
        }
    }

    /// Replace the property bag (builder pattern)
    pub fn with_properties(mut self, properties: PackageProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Add a nested sub-package (builder pattern)
    pub fn with_subpackage(mut self, id: PackageId) -> Self {
        self.subpackages.push(id);
        self
    }
}
