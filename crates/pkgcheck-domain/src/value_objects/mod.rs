//! Domain value objects
//!
//! Immutable data carried between the package-format collaborator, the
//! schema registrar and the check pipeline.

/// Content package identity, properties and metadata
pub mod package;
/// Schema document locators and node type definitions
pub mod schema;
/// Severity-ranked findings
pub mod violation;

pub use package::{AcHandling, MetaInf, PackageDescriptor, PackageId, PackageProperties};
pub use schema::{
    ChildNodeDefinition, NamespaceMapping, NodeTypeDefinition, PropertyDefinition, PropertyType,
    SchemaDocumentRef, Value,
};
pub use violation::{Severity, Violation};
