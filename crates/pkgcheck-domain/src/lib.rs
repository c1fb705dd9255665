//! # Domain Layer
//!
//! Core types and contracts shared by every pkgcheck crate:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Packages, violations, schema model |
//! | [`ports`] | Repository capabilities, document source, error listener |
//! | [`error`] | Domain error type |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    DocumentSource, ErrorListener, NamespaceRegistry, NodeTypeManager, RepositorySession,
    SchemaCapabilities, ValueFactory,
};
pub use value_objects::{
    AcHandling, ChildNodeDefinition, MetaInf, NamespaceMapping, NodeTypeDefinition, PackageDescriptor,
    PackageId, PackageProperties, PropertyDefinition, PropertyType, SchemaDocumentRef, Severity,
    Value, Violation,
};
