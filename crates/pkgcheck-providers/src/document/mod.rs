//! Schema document sources
//!
//! - **file** - reads `file:` locators from the local filesystem
//! - **in_memory** - serves documents registered in memory

pub mod file;
pub mod in_memory;

pub use file::FileDocumentSource;
pub use in_memory::InMemoryDocumentSource;
