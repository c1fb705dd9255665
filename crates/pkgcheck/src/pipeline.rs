//! End-to-end validation run
//!
//! Registers the configured schema documents into a fresh in-memory
//! repository, builds the check pipeline, scans the package descriptors and
//! folds registration failures into the resulting report.

use anyhow::{Context, Result, bail};
use pkgcheck_domain::{SchemaDocumentRef, Severity};
use pkgcheck_infrastructure::discovery::discover_schema_documents;
use pkgcheck_infrastructure::packages::load_package_descriptors;
use pkgcheck_infrastructure::{AppConfig, ReportFormat};
use pkgcheck_providers::{FileDocumentSource, InMemoryRepository};
use pkgcheck_validate::{
    CheckRegistry, DefaultErrorListener, Reporter, ScanReport, SchemaRegistrar, ValidationSession,
};
use std::path::PathBuf;
use tracing::info;

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub report: ScanReport,
    /// Severity at which the run counts as failed
    pub threshold: Severity,
}

impl RunOutcome {
    /// Whether the report reaches the failure threshold
    pub fn failed(&self) -> bool {
        self.report.fails_on(self.threshold)
    }

    /// Render the report in `format`
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Human => Reporter::to_human_readable(&self.report),
            ReportFormat::Json => Reporter::to_json(&self.report),
        }
    }
}

/// Run schema registration and the check pipeline over `package_files`
///
/// Errors are returned only for conditions that prevent a meaningful report:
/// unreadable configuration values, missing inputs, checks that cannot be
/// loaded, and check callbacks that fail.
pub fn run(config: &AppConfig, package_files: &[PathBuf]) -> Result<RunOutcome> {
    let threshold = config.report.fail_on_severity()?;

    let mut main = config.schema.document_refs()?;
    main.extend(discover_schema_documents(config.schema.directories.as_slice())?);
    let post_install: Vec<SchemaDocumentRef> = config.schema.post_install_refs()?;

    let mut repository = InMemoryRepository::new();
    let source = FileDocumentSource::new();
    let mut listener = DefaultErrorListener::new();
    let registration = SchemaRegistrar::new(&source).register(
        &mut repository,
        &mut listener,
        &main,
        &post_install,
    );
    info!(
        registered = registration.registered().count(),
        failed = registration.failures().count(),
        passes = registration.passes,
        "Schema registration finished"
    );

    let loaded = ValidationSession::from_specs(&CheckRegistry::standard(), &config.checks);
    if !loaded.failures.is_empty() {
        let messages: Vec<String> = loaded.failures.iter().map(ToString::to_string).collect();
        bail!(
            "{} check(s) could not be loaded:\n  {}",
            messages.len(),
            messages.join("\n  ")
        );
    }
    let mut session = loaded.session;

    let packages = load_package_descriptors(package_files)?;
    let mut report = session
        .scan(&packages)
        .context("package scan aborted")?;
    if !listener.is_empty() {
        report = report.with_report(listener.to_report());
    }

    Ok(RunOutcome { report, threshold })
}
