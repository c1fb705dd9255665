//! Default error listener
//!
//! Logs terminal schema registration failures and keeps them so they can be
//! folded into the scan report as SEVERE violations.

use crate::reporter::CheckReport;
use pkgcheck_domain::{Error, ErrorListener, SchemaDocumentRef, Severity, Violation};
use tracing::error;

/// Report name used for registration failures
pub const SCHEMA_REGISTRATION_REPORT: &str = "schema_registration";

/// A terminal failure captured by [`DefaultErrorListener`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedError {
    pub reference: SchemaDocumentRef,
    pub message: String,
}

/// Error listener that logs and records every reported failure
#[derive(Debug, Default)]
pub struct DefaultErrorListener {
    errors: Vec<RecordedError>,
}

impl DefaultErrorListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures recorded so far
    pub fn errors(&self) -> &[RecordedError] {
        &self.errors
    }

    /// Whether no failure was reported
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded failures as SEVERE violations
    pub fn violations(&self) -> Vec<Violation> {
        self.errors
            .iter()
            .map(|recorded| {
                Violation::unscoped(
                    Severity::Severe,
                    format!(
                        "Schema document {} could not be registered: {}",
                        recorded.reference, recorded.message
                    ),
                )
            })
            .collect()
    }

    /// Recorded failures as a check report
    pub fn to_report(&self) -> CheckReport {
        CheckReport::new(SCHEMA_REGISTRATION_REPORT, self.violations())
    }
}

impl ErrorListener for DefaultErrorListener {
    fn on_schema_registration_error(&mut self, error: &Error, reference: &SchemaDocumentRef) {
        error!(document = %reference, error = %error, "Schema document registration failed");
        self.errors.push(RecordedError {
            reference: reference.clone(),
            message: error.to_string(),
        });
    }
}
