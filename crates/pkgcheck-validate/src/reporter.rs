//! Scan Report Generation
//!
//! Generates reports in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output

use pkgcheck_domain::{PackageId, Severity, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Violations reported by one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Name the check reports under
    pub check_name: String,
    /// Violations in reporting order
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new(check_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            check_name: check_name.into(),
            violations,
        }
    }

    /// Most severe violation of this check
    pub fn highest_severity(&self) -> Option<Severity> {
        self.violations.iter().map(Violation::severity).max()
    }
}

/// Summary of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of top-level packages scanned
    pub packages_scanned: usize,
    /// Total number of violations
    pub total_violations: usize,
    /// Number of MINOR violations
    pub minor_count: usize,
    /// Number of MAJOR violations
    pub major_count: usize,
    /// Number of SEVERE violations
    pub severe_count: usize,
    /// Most severe violation reported, if any
    pub highest_severity: Option<Severity>,
}

impl ScanSummary {
    fn compute(packages_scanned: usize, reports: &[CheckReport]) -> Self {
        let mut summary = Self {
            packages_scanned,
            ..Self::default()
        };
        for violation in reports.iter().flat_map(|r| &r.violations) {
            summary.total_violations += 1;
            match violation.severity() {
                Severity::Minor => summary.minor_count += 1,
                Severity::Major => summary.major_count += 1,
                Severity::Severe => summary.severe_count += 1,
            }
            summary.highest_severity = summary.highest_severity.max(Some(violation.severity()));
        }
        summary
    }
}

/// Report of a validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Timestamp of the run
    pub timestamp: String,
    /// Top-level packages scanned, in scan order
    pub packages: Vec<PackageId>,
    /// Summary statistics
    pub summary: ScanSummary,
    /// Per-check violations, in pipeline order
    pub reports: Vec<CheckReport>,
}

impl ScanReport {
    /// Build a report stamped with the current time
    pub fn new(packages: Vec<PackageId>, reports: Vec<CheckReport>) -> Self {
        let summary = ScanSummary::compute(packages.len(), &reports);
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            packages,
            summary,
            reports,
        }
    }

    /// Add another check's violations (builder pattern)
    ///
    /// Used to fold violations from outside the check pipeline, such as
    /// schema registration failures, into the report.
    pub fn with_report(mut self, report: CheckReport) -> Self {
        self.reports.push(report);
        self.summary = ScanSummary::compute(self.packages.len(), &self.reports);
        self
    }

    /// Every violation, in pipeline order
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.reports.iter().flat_map(|r| r.violations.iter())
    }

    /// Violations at or above `threshold`
    pub fn violations_at_least(&self, threshold: Severity) -> Vec<&Violation> {
        self.violations()
            .filter(|v| v.severity().meets_minimum(threshold))
            .collect()
    }

    /// Most severe violation reported
    pub fn highest_severity(&self) -> Option<Severity> {
        self.summary.highest_severity
    }

    /// Whether any violation reaches `threshold`
    pub fn fails_on(&self, threshold: Severity) -> bool {
        self.highest_severity()
            .is_some_and(|highest| highest.meets_minimum(threshold))
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &ScanReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &ScanReport) -> String {
        report.to_string()
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Package Validation Report ===\n")?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "Packages:  {}\n", self.summary.packages_scanned)?;

        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Total Violations: {}", self.summary.total_violations)?;
        writeln!(f, "  SEVERE: {}", self.summary.severe_count)?;
        writeln!(f, "  MAJOR:  {}", self.summary.major_count)?;
        writeln!(f, "  MINOR:  {}\n", self.summary.minor_count)?;

        for check in &self.reports {
            writeln!(f, "--- {} ({}) ---", check.check_name, check.violations.len())?;
            if check.violations.is_empty() {
                writeln!(f, "  no violations")?;
            }
            for violation in &check.violations {
                writeln!(f, "  {violation}")?;
            }
            writeln!(f)?;
        }

        match self.highest_severity() {
            Some(severity) => writeln!(f, "Result: {severity} violations found"),
            None => writeln!(f, "Result: PASSED"),
        }
    }
}
