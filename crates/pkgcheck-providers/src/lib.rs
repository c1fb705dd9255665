//! # pkgcheck - Provider Implementations
//!
//! Adapters implementing the ports defined in `pkgcheck-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `RepositorySession` | `InMemoryRepository` |
//! | Namespaces | `NamespaceRegistry` | `InMemoryNamespaceRegistry` |
//! | Node types | `NodeTypeManager` | `InMemoryNodeTypeManager` |
//! | Values | `ValueFactory` | `StandardValueFactory` |
//! | Documents | `DocumentSource` | `FileDocumentSource`, `InMemoryDocumentSource` |
//!
//! ## Usage
//!
//! ```ignore
//! use pkgcheck_providers::{FileDocumentSource, InMemoryRepository};
//!
//! let mut repository = InMemoryRepository::new();
//! let source = FileDocumentSource::new();
//! ```

pub use pkgcheck_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Schema document sources
pub mod document;

/// In-memory repository capabilities
pub mod repository;

pub use document::{FileDocumentSource, InMemoryDocumentSource};
pub use repository::{
    InMemoryNamespaceRegistry, InMemoryNodeTypeManager, InMemoryRepository, StandardValueFactory,
};
