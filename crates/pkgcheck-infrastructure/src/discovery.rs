//! Schema document discovery
//!
//! Collects `*.cnd` files below configured directories as `file:` locators,
//! in a stable order so registration logs and reports are reproducible.

use crate::error_ext::ErrorContext;
use pkgcheck_domain::constants::SCHEMA_DOCUMENT_EXTENSION;
use pkgcheck_domain::{Error, Result, SchemaDocumentRef};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Find schema documents below every directory in `directories`
///
/// Paths are sorted and deduplicated across directories. A directory that
/// does not exist is an error.
pub fn discover_schema_documents<P: AsRef<Path>>(
    directories: &[P],
) -> Result<Vec<SchemaDocumentRef>> {
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    for directory in directories {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(Error::not_found(format!(
                "schema directory {}",
                directory.display()
            )));
        }
        for entry in WalkDir::new(directory).follow_links(true) {
            let entry = entry.with_context(|| format!("cannot walk {}", directory.display()))?;
            if entry.file_type().is_file() && is_schema_document(entry.path()) {
                found.insert(entry.into_path());
            }
        }
        debug!(directory = %directory.display(), total = found.len(), "Scanned schema directory");
    }

    found.iter().map(SchemaDocumentRef::from_file_path).collect()
}

fn is_schema_document(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCHEMA_DOCUMENT_EXTENSION))
}
