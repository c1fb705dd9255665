//! Validation Session
//!
//! Drives every loaded check through the scan lifecycle, in pipeline order,
//! and collects each check's violations into a [`ScanReport`].

use crate::checks::{CheckRegistry, CheckSpec, PackageCheck, ViolationReporter};
use crate::reporter::{CheckReport, ScanReport};
use crate::{Result, ValidationError};
use pkgcheck_domain::{PackageDescriptor, PackageId, Violation};
use tracing::{debug, error, info};

/// A check instance together with the name it reports under
pub struct LoadedCheck {
    name: String,
    check: Box<dyn PackageCheck>,
}

impl LoadedCheck {
    pub fn new(name: impl Into<String>, check: Box<dyn PackageCheck>) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }

    /// Name used in reports
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for LoadedCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedCheck")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Result of building a session from declarative check specs
#[derive(Debug)]
pub struct CheckLoadOutcome {
    /// Session holding every check that loaded
    pub session: ValidationSession,
    /// Checks that could not be loaded, in spec order
    pub failures: Vec<ValidationError>,
}

/// Ordered pipeline of checks run against a set of packages
#[derive(Debug, Default)]
pub struct ValidationSession {
    checks: Vec<LoadedCheck>,
}

impl ValidationSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check under its own name (builder pattern)
    pub fn with_check(mut self, check: Box<dyn PackageCheck>) -> Self {
        let name = check.check_name();
        self.add(LoadedCheck::new(name, check));
        self
    }

    /// Append a loaded check to the pipeline
    pub fn add(&mut self, check: LoadedCheck) {
        self.checks.push(check);
    }

    /// Build a session from `specs`
    ///
    /// A spec that fails to load is recorded in the outcome and left out of
    /// the pipeline; the remaining checks load regardless.
    pub fn from_specs(registry: &CheckRegistry, specs: &[CheckSpec]) -> CheckLoadOutcome {
        let mut session = Self::new();
        let mut failures = Vec::new();

        for spec in specs {
            if spec.skip {
                debug!(check = %spec.label(), "Check skipped by configuration");
                continue;
            }
            match registry.instantiate(spec) {
                Ok(check) => session.add(check),
                Err(e) => {
                    error!(check = %spec.label(), error = %e, "Check could not be loaded");
                    failures.push(e);
                }
            }
        }

        CheckLoadOutcome { session, failures }
    }

    /// Names of the checks in pipeline order
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(LoadedCheck::name).collect()
    }

    /// Whether the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run the lifecycle for `packages`
    ///
    /// Any error returned by a check callback aborts the scan.
    pub fn scan(&mut self, packages: &[PackageDescriptor]) -> Result<ScanReport> {
        info!(
            checks = self.checks.len(),
            packages = packages.len(),
            "Starting package scan"
        );
        let mut collected: Vec<Vec<Violation>> = vec![Vec::new(); self.checks.len()];

        self.dispatch(&mut collected, "started_scan", None, |loaded, reporter| {
            loaded.check.started_scan(reporter)
        })?;

        for package in packages {
            let id = &package.id;
            debug!(package = %id, "Scanning package");

            self.dispatch(&mut collected, "identify_package", Some(id), |loaded, reporter| {
                loaded.check.identify_package(id, reporter)
            })?;
            for subpackage in &package.subpackages {
                self.dispatch(
                    &mut collected,
                    "identify_subpackage",
                    Some(subpackage),
                    |loaded, reporter| loaded.check.identify_subpackage(subpackage, id, reporter),
                )?;
            }
            self.dispatch(&mut collected, "before_extract", Some(id), |loaded, reporter| {
                loaded.check.before_extract(
                    id,
                    &package.properties,
                    &package.meta_inf,
                    &package.subpackages,
                    reporter,
                )
            })?;
            self.dispatch(&mut collected, "after_extract", Some(id), |loaded, reporter| {
                loaded.check.after_extract(id, reporter)
            })?;
        }

        self.dispatch(&mut collected, "finished_scan", None, |loaded, reporter| {
            loaded.check.finished_scan(reporter)
        })?;

        let reports = self
            .checks
            .iter()
            .zip(collected)
            .map(|(loaded, violations)| CheckReport::new(loaded.name.clone(), violations))
            .collect();
        let report = ScanReport::new(packages.iter().map(|p| p.id.clone()).collect(), reports);
        info!(
            violations = report.summary.total_violations,
            "Package scan finished"
        );
        Ok(report)
    }

    fn dispatch<F>(
        &mut self,
        collected: &mut [Vec<Violation>],
        phase: &'static str,
        package: Option<&PackageId>,
        mut callback: F,
    ) -> Result<()>
    where
        F: FnMut(&mut LoadedCheck, &mut ViolationReporter<'_>) -> anyhow::Result<()>,
    {
        for (loaded, sink) in self.checks.iter_mut().zip(collected.iter_mut()) {
            let mut reporter = ViolationReporter::new(sink);
            callback(loaded, &mut reporter).map_err(|source| ValidationError::Check {
                check: loaded.name.clone(),
                phase,
                package: package.cloned(),
                source: source.into(),
            })?;
        }
        Ok(())
    }
}
