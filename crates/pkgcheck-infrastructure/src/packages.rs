//! Package descriptor loading
//!
//! A descriptor file holds either one package descriptor object or an array
//! of them, in the JSON form of [`PackageDescriptor`].

use crate::error_ext::ErrorContext;
use pkgcheck_domain::{Error, PackageDescriptor, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read every descriptor from `path`
pub fn read_package_descriptors(path: &Path) -> Result<Vec<PackageDescriptor>> {
    let text = std::fs::read_to_string(path)
        .io_context(format!("cannot read package descriptor {}", path.display()))?;
    let descriptors = parse_package_descriptors(&text).map_err(|e| {
        Error::invalid_argument(format!("invalid package descriptor {}: {e}", path.display()))
    })?;
    debug!(file = %path.display(), packages = descriptors.len(), "Package descriptors loaded");
    Ok(descriptors)
}

/// Read the descriptors of every file in `paths`, in order
pub fn load_package_descriptors<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PackageDescriptor>> {
    let mut descriptors = Vec::new();
    for path in paths {
        descriptors.extend(read_package_descriptors(path.as_ref())?);
    }
    Ok(descriptors)
}

/// Parse one descriptor object or an array of them
pub fn parse_package_descriptors(text: &str) -> serde_json::Result<Vec<PackageDescriptor>> {
    match serde_json::from_str::<Value>(text)? {
        array @ Value::Array(_) => serde_json::from_value(array),
        single => serde_json::from_value(single).map(|descriptor| vec![descriptor]),
    }
}
