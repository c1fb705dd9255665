//! Tests for the in-memory namespace registry

use pkgcheck_domain::NamespaceRegistry;
use pkgcheck_domain::constants::NAMESPACE_NT;
use pkgcheck_providers::InMemoryNamespaceRegistry;

#[test]
fn test_builtin_namespaces_are_registered() {
    let registry = InMemoryNamespaceRegistry::new();
    assert_eq!(registry.uri("nt").as_deref(), Some(NAMESPACE_NT));
    assert_eq!(registry.prefix(NAMESPACE_NT).as_deref(), Some("nt"));
    assert_eq!(
        registry.prefixes().collect::<Vec<_>>(),
        vec!["jcr", "mix", "nt", "xml"]
    );
}

#[test]
fn test_register_identical_mapping_is_noop() {
    let mut registry = InMemoryNamespaceRegistry::new();
    registry
        .register_namespace("acme", "http://acme.example/1.0")
        .unwrap();
    registry
        .register_namespace("acme", "http://acme.example/1.0")
        .unwrap();
    assert_eq!(registry.uri("acme").as_deref(), Some("http://acme.example/1.0"));
}

#[test]
fn test_remapping_prefix_fails() {
    let mut registry = InMemoryNamespaceRegistry::new();
    registry
        .register_namespace("acme", "http://acme.example/1.0")
        .unwrap();
    let err = registry
        .register_namespace("acme", "http://other.example/1.0")
        .unwrap_err();
    assert!(err.to_string().contains("already mapped"));
}

#[test]
fn test_uri_registered_twice_fails() {
    let mut registry = InMemoryNamespaceRegistry::new();
    let err = registry
        .register_namespace("nodes", NAMESPACE_NT)
        .unwrap_err();
    assert!(err.to_string().contains("already registered with prefix 'nt'"));
}

#[test]
fn test_reserved_prefix_is_rejected() {
    let mut registry = InMemoryNamespaceRegistry::new();
    assert!(
        registry
            .register_namespace("XmlStuff", "http://xml.example/")
            .is_err()
    );
    assert!(registry.register_namespace("", "http://empty.example/").is_err());
}
