//! Schema (node type) value objects
//!
//! Locators of schema definition documents and the resolved node type
//! definitions handed to the repository's node type manager.

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use url::Url;

/// Opaque locator of a schema definition document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocumentRef(Url);

impl SchemaDocumentRef {
    /// Wrap an already parsed URL
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    /// Parse a locator, accepting either a URL or a filesystem path
    pub fn parse(locator: &str) -> Result<Self> {
        match Url::parse(locator) {
            Ok(url) => Ok(Self(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::from_file_path(locator),
            Err(e) => Err(Error::invalid_argument(format!(
                "invalid schema document locator '{locator}': {e}"
            ))),
        }
    }

    /// Build a `file:` locator from a filesystem path
    pub fn from_file_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).map_err(|e| {
            Error::io_with_source(format!("cannot resolve path {}", path.display()), e)
        })?;
        Url::from_file_path(&absolute).map(Self).map_err(|()| {
            Error::invalid_argument(format!("not a valid file path: {}", absolute.display()))
        })
    }

    /// Underlying URL
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// External form of the locator
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SchemaDocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for SchemaDocumentRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Required type of a property definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    String,
    Binary,
    Long,
    Double,
    Decimal,
    Date,
    Boolean,
    Name,
    Path,
    Reference,
    WeakReference,
    Uri,
    Undefined,
}

impl PropertyType {
    /// All property types
    pub const ALL: [PropertyType; 13] = [
        PropertyType::String,
        PropertyType::Binary,
        PropertyType::Long,
        PropertyType::Double,
        PropertyType::Decimal,
        PropertyType::Date,
        PropertyType::Boolean,
        PropertyType::Name,
        PropertyType::Path,
        PropertyType::Reference,
        PropertyType::WeakReference,
        PropertyType::Uri,
        PropertyType::Undefined,
    ];

    /// Name as written in schema documents
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Binary => "BINARY",
            Self::Long => "LONG",
            Self::Double => "DOUBLE",
            Self::Decimal => "DECIMAL",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::Name => "NAME",
            Self::Path => "PATH",
            Self::Reference => "REFERENCE",
            Self::WeakReference => "WEAKREFERENCE",
            Self::Uri => "URI",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "*" {
            return Ok(Self::Undefined);
        }
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| Error::value(format!("unknown property type '{s}'")))
    }
}

/// Typed property value produced by a value factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum Value {
    String(String),
    Binary(Vec<u8>),
    Long(i64),
    Double(f64),
    Decimal(String),
    Date(DateTime<FixedOffset>),
    Boolean(bool),
    Name(String),
    Path(String),
    Reference(String),
    WeakReference(String),
    Uri(String),
}

impl Value {
    /// Property type of this value
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::String(_) => PropertyType::String,
            Self::Binary(_) => PropertyType::Binary,
            Self::Long(_) => PropertyType::Long,
            Self::Double(_) => PropertyType::Double,
            Self::Decimal(_) => PropertyType::Decimal,
            Self::Date(_) => PropertyType::Date,
            Self::Boolean(_) => PropertyType::Boolean,
            Self::Name(_) => PropertyType::Name,
            Self::Path(_) => PropertyType::Path,
            Self::Reference(_) => PropertyType::Reference,
            Self::WeakReference(_) => PropertyType::WeakReference,
            Self::Uri(_) => PropertyType::Uri,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s)
            | Self::Decimal(s)
            | Self::Name(s)
            | Self::Path(s)
            | Self::Reference(s)
            | Self::WeakReference(s)
            | Self::Uri(s) => f.write_str(s),
            Self::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Self::Long(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Prefix to URI mapping declared by a schema document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceMapping {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceMapping {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Resolved property definition of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub required_type: PropertyType,
    pub default_values: Vec<Value>,
    pub value_constraints: Vec<String>,
    pub mandatory: bool,
    pub autocreated: bool,
    pub protected: bool,
    pub multiple: bool,
}

impl PropertyDefinition {
    /// Single-valued, optional property of the given type
    pub fn new(name: impl Into<String>, required_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            required_type,
            default_values: Vec::new(),
            value_constraints: Vec::new(),
            mandatory: false,
            autocreated: false,
            protected: false,
            multiple: false,
        }
    }
}

/// Resolved child node definition of a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildNodeDefinition {
    pub name: String,
    pub required_primary_types: Vec<String>,
    pub default_primary_type: Option<String>,
    pub mandatory: bool,
    pub autocreated: bool,
    pub protected: bool,
    pub same_name_siblings: bool,
}

impl ChildNodeDefinition {
    /// Optional child node accepting any of `required_primary_types`
    pub fn new(name: impl Into<String>, required_primary_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            required_primary_types,
            default_primary_type: None,
            mandatory: false,
            autocreated: false,
            protected: false,
            same_name_siblings: false,
        }
    }
}

/// Resolved node type definition, ready for registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeDefinition {
    pub name: String,
    pub supertypes: Vec<String>,
    pub is_abstract: bool,
    pub is_mixin: bool,
    pub orderable_child_nodes: bool,
    pub primary_item_name: Option<String>,
    pub property_definitions: Vec<PropertyDefinition>,
    pub child_node_definitions: Vec<ChildNodeDefinition>,
}

impl NodeTypeDefinition {
    /// Concrete primary type with no declared supertypes or items
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            is_abstract: false,
            is_mixin: false,
            orderable_child_nodes: false,
            primary_item_name: None,
            property_definitions: Vec::new(),
            child_node_definitions: Vec::new(),
        }
    }

    /// Set the declared supertypes (builder pattern)
    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    /// Every other node type this definition depends on
    ///
    /// Supertypes, required primary types and default primary types of child
    /// node definitions, in declaration order and without duplicates.
    pub fn referenced_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let children = self.child_node_definitions.iter().flat_map(|child| {
            child
                .required_primary_types
                .iter()
                .chain(child.default_primary_type.iter())
        });
        for name in self.supertypes.iter().chain(children) {
            if name != &self.name && !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}
