//! Unit tests for violation value objects

use pkgcheck_domain::{PackageId, Severity, Violation};

#[test]
fn test_severity_ordering() {
    assert!(Severity::Minor < Severity::Major);
    assert!(Severity::Major < Severity::Severe);
    assert!(Severity::Severe.meets_minimum(Severity::Major));
    assert!(!Severity::Minor.meets_minimum(Severity::Major));
}

#[test]
fn test_severity_parse() {
    assert_eq!("major".parse::<Severity>().unwrap(), Severity::Major);
    assert_eq!(" SEVERE ".parse::<Severity>().unwrap(), Severity::Severe);
    assert!("critical".parse::<Severity>().is_err());
}

#[test]
fn test_violation_keeps_package_order() {
    let first: PackageId = "acme:a:1".parse().unwrap();
    let second: PackageId = "acme:b:1".parse().unwrap();
    let violation = Violation::new(
        Severity::Major,
        "conflicting filters",
        [first.clone(), second.clone()],
    );

    assert_eq!(violation.severity(), Severity::Major);
    assert_eq!(violation.description(), "conflicting filters");
    assert_eq!(violation.packages(), &[first, second]);
}

#[test]
fn test_violation_display() {
    let id: PackageId = "acme:a:1".parse().unwrap();
    let violation = Violation::new(Severity::Minor, "heads up", [id]);
    assert_eq!(violation.to_string(), "[MINOR] heads up (acme:a:1)");

    let unscoped = Violation::unscoped(Severity::Severe, "broken");
    assert_eq!(unscoped.to_string(), "[SEVERE] broken");
}

#[test]
fn test_violation_serializes_severity_uppercase() {
    let violation = Violation::unscoped(Severity::Major, "x");
    let json = serde_json::to_value(&violation).unwrap();
    assert_eq!(json["severity"], "MAJOR");
}
