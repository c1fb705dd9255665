//! Tests for package descriptor loading

use pkgcheck_domain::AcHandling;
use pkgcheck_infrastructure::packages::{load_package_descriptors, read_package_descriptors};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_loads_descriptors_from_several_files_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    fs::write(
        &first,
        r#"{
            "id": "acme:site:1.0",
            "properties": { "acHandling": "merge" },
            "metaInf": { "filterRoots": ["/content/site"] },
            "subpackages": ["acme:site-config:1.0"]
        }"#,
    )
    .unwrap();
    fs::write(&second, r#"[{ "id": "acme:a" }, { "id": "acme:b" }]"#).unwrap();

    let packages = load_package_descriptors(&[&first, &second]).unwrap();

    let ids: Vec<String> = packages.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["acme:site:1.0", "acme:a", "acme:b"]);
    assert_eq!(
        packages[0].properties.ac_handling().unwrap(),
        Some(AcHandling::Merge)
    );
    assert_eq!(packages[0].meta_inf.filter_roots, vec!["/content/site"]);
    assert_eq!(packages[0].subpackages.len(), 1);
}

#[test]
fn test_unreadable_and_invalid_files_are_errors() {
    let dir = TempDir::new().unwrap();
    assert!(read_package_descriptors(&dir.path().join("missing.json")).is_err());

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, "{ not json").unwrap();
    let err = read_package_descriptors(&invalid).unwrap_err();
    assert!(err.to_string().contains("invalid package descriptor"));
}
