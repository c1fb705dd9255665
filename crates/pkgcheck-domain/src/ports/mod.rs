//! Domain Port Interfaces
//!
//! Boundary contracts the validation layer consumes and the infrastructure
//! layer implements:
//!
//! - **repository** - schema manager, namespace registry and value factory capabilities
//! - **document** - opening schema document streams
//! - **listener** - error reporting sink for terminal failures

pub mod document;
pub mod listener;
pub mod repository;

pub use document::DocumentSource;
pub use listener::ErrorListener;
pub use repository::{
    NamespaceRegistry, NodeTypeManager, RepositorySession, SchemaCapabilities, ValueFactory,
};
