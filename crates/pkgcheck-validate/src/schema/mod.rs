//! Schema registration
//!
//! - **cnd** - parser for compact node type definition documents
//! - **importer** - registers one parsed document against the repository
//! - **registrar** - bounded multi-pass registration of many documents

pub mod cnd;
pub mod importer;
pub mod registrar;

pub use cnd::CndDocument;
pub use importer::{ImportOutcome, SchemaImporter};
pub use registrar::{
    RegistrationPhase, RegistrationReport, SchemaRegistrar, SchemaRegistrationOutcome,
};
