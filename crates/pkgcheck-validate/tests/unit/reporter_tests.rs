//! Tests for scan report generation

use crate::test_utils::package_id;
use pkgcheck_domain::{Severity, Violation};
use pkgcheck_validate::{CheckReport, Reporter, ScanReport};

fn sample_report() -> ScanReport {
    let site = package_id("acme:site:1.0");
    ScanReport::new(
        vec![site.clone()],
        vec![
            CheckReport::new(
                "ac_handling",
                vec![
                    Violation::new(Severity::Major, "mode clear is forbidden", [site]),
                    Violation::unscoped(Severity::Minor, "advisory"),
                ],
            ),
            CheckReport::new("quiet", Vec::new()),
        ],
    )
}

#[test]
fn test_summary_counts_by_severity() {
    let report = sample_report();
    assert_eq!(report.summary.packages_scanned, 1);
    assert_eq!(report.summary.total_violations, 2);
    assert_eq!(report.summary.major_count, 1);
    assert_eq!(report.summary.minor_count, 1);
    assert_eq!(report.summary.severe_count, 0);
    assert_eq!(report.highest_severity(), Some(Severity::Major));
}

#[test]
fn test_fail_threshold() {
    let report = sample_report();
    assert!(report.fails_on(Severity::Minor));
    assert!(report.fails_on(Severity::Major));
    assert!(!report.fails_on(Severity::Severe));
    assert_eq!(report.violations_at_least(Severity::Major).len(), 1);

    let clean = ScanReport::new(Vec::new(), Vec::new());
    assert!(!clean.fails_on(Severity::Minor));
}

#[test]
fn test_folded_report_updates_summary() {
    let report = sample_report().with_report(CheckReport::new(
        "schema_registration",
        vec![Violation::unscoped(Severity::Severe, "broken document")],
    ));
    assert_eq!(report.summary.total_violations, 3);
    assert_eq!(report.highest_severity(), Some(Severity::Severe));
    assert_eq!(report.reports.last().unwrap().check_name, "schema_registration");
}

#[test]
fn test_json_output_is_parseable() {
    let json = Reporter::to_json(&sample_report());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["total_violations"], 2);
    assert_eq!(value["packages"][0], "acme:site:1.0");
    assert_eq!(value["reports"][0]["violations"][0]["severity"], "MAJOR");
}

#[test]
fn test_human_output_lists_checks_and_result() {
    let text = Reporter::to_human_readable(&sample_report());
    assert!(text.starts_with("=== Package Validation Report ==="));
    assert!(text.contains("--- ac_handling (2) ---"));
    assert!(text.contains("  [MAJOR] mode clear is forbidden (acme:site:1.0)"));
    assert!(text.contains("--- quiet (0) ---\n  no violations"));
    assert!(text.ends_with("Result: MAJOR violations found\n"));

    let clean = Reporter::to_human_readable(&ScanReport::new(Vec::new(), Vec::new()));
    assert!(clean.ends_with("Result: PASSED\n"));
}

#[test]
fn test_display_matches_human_output() {
    let report = sample_report();
    let text = report.to_string();
    assert_eq!(text, Reporter::to_human_readable(&report));
    assert!(text.contains("--- Summary ---\nTotal Violations: 2\n  SEVERE: 0\n  MAJOR:  1\n  MINOR:  1\n\n"));
}
