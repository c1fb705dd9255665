//! Check lifecycle contract
//!
//! A check is driven through a fixed sequence of callbacks during a scan:
//! `started_scan`, then for every package `identify_package`,
//! `identify_subpackage` for each nested package, `before_extract` and
//! `after_extract`, and finally `finished_scan`. Every callback receives a
//! [`ViolationReporter`] to append findings to.

use anyhow::Result;
use pkgcheck_domain::{MetaInf, PackageId, PackageProperties, Violation};

/// Append-only handle to the violations of one check
pub struct ViolationReporter<'a> {
    sink: &'a mut Vec<Violation>,
}

impl<'a> ViolationReporter<'a> {
    /// Wrap a violation buffer
    pub fn new(sink: &'a mut Vec<Violation>) -> Self {
        Self { sink }
    }

    /// Record a violation
    pub fn report(&mut self, violation: Violation) {
        self.sink.push(violation);
    }
}

/// A check run against every package of a scan
///
/// All callbacks default to doing nothing, so a check only overrides the
/// phases it cares about. A returned error aborts the scan.
pub trait PackageCheck {
    /// Name used in reports; defaults to the implementing type's name
    fn check_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }

    /// Called once before any package is visited
    fn started_scan(&mut self, _reporter: &mut ViolationReporter<'_>) -> Result<()> {
        Ok(())
    }

    /// A top-level package is about to be inspected
    fn identify_package(
        &mut self,
        _package_id: &PackageId,
        _reporter: &mut ViolationReporter<'_>,
    ) -> Result<()> {
        Ok(())
    }

    /// A package nested inside `parent_id` was found
    fn identify_subpackage(
        &mut self,
        _package_id: &PackageId,
        _parent_id: &PackageId,
        _reporter: &mut ViolationReporter<'_>,
    ) -> Result<()> {
        Ok(())
    }

    /// Package metadata is available, content is not yet extracted
    fn before_extract(
        &mut self,
        _package_id: &PackageId,
        _properties: &PackageProperties,
        _meta_inf: &MetaInf,
        _subpackages: &[PackageId],
        _reporter: &mut ViolationReporter<'_>,
    ) -> Result<()> {
        Ok(())
    }

    /// Package content has been extracted
    fn after_extract(
        &mut self,
        _package_id: &PackageId,
        _reporter: &mut ViolationReporter<'_>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the last package
    fn finished_scan(&mut self, _reporter: &mut ViolationReporter<'_>) -> Result<()> {
        Ok(())
    }
}

/// Last path segment of a type name, without generic arguments
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
