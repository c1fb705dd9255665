//! Tests for the check registry

use pkgcheck_validate::{
    CheckConfig, CheckFactory, CheckRegistry, CheckSpec, ConfigurationError, FnCheckFactory,
    PackageCheck, ValidationError,
};
use serde_json::json;

struct NoopCheck;

impl PackageCheck for NoopCheck {}

fn noop_factory(name: &str) -> Box<dyn CheckFactory> {
    Box::new(FnCheckFactory::new(name, |_config: &CheckConfig| {
        Ok(Box::new(NoopCheck) as Box<dyn PackageCheck>)
    }))
}

#[test]
fn test_standard_registry_provides_ac_handling() {
    let registry = CheckRegistry::standard();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ac_handling"]);
    assert!(!registry.get("ac_handling").unwrap().description().is_empty());
}

#[test]
fn test_instantiate_uses_spec_name_or_check_name() {
    let registry = CheckRegistry::standard().with_factory(noop_factory("noop"));

    let named = registry
        .instantiate(&CheckSpec::new("ac_handling").with_name("acl-policy"))
        .unwrap();
    assert_eq!(named.name(), "acl-policy");

    let unnamed = registry.instantiate(&CheckSpec::new("ac_handling")).unwrap();
    assert_eq!(unnamed.name(), "ac_handling");

    let defaulted = registry.instantiate(&CheckSpec::new("noop")).unwrap();
    assert_eq!(defaulted.name(), "NoopCheck");
}

#[test]
fn test_unknown_implementation_is_an_error() {
    let registry = CheckRegistry::standard();
    let err = registry.instantiate(&CheckSpec::new("missing")).unwrap_err();
    assert!(matches!(err, ValidationError::UnknownCheck(ref name) if name == "missing"));
}

#[test]
fn test_configuration_errors_name_the_check() {
    let registry = CheckRegistry::standard();

    let err = registry
        .instantiate(
            &CheckSpec::new("ac_handling")
                .with_name("acl")
                .with_config(json!({ "levelSet": "bogus" })),
        )
        .unwrap_err();
    assert_eq!(err.check_name(), Some("acl"));
    assert!(matches!(err, ValidationError::Configuration { .. }));

    let err = registry
        .instantiate(&CheckSpec::new("ac_handling").with_config(json!("no_clear")))
        .unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Configuration {
            source: ConfigurationError::NotAnObject { .. },
            ..
        }
    ));
}

#[test]
fn test_registering_twice_replaces_the_factory() {
    let mut registry = CheckRegistry::new();
    registry.register(noop_factory("dup"));
    registry.register(Box::new(
        FnCheckFactory::new("dup", |_config: &CheckConfig| {
            Err(ConfigurationError::invalid_value("x", "always fails"))
        })
        .with_description("replacement"),
    ));

    assert_eq!(registry.names().count(), 1);
    assert_eq!(registry.get("dup").unwrap().description(), "replacement");
    assert!(registry.instantiate(&CheckSpec::new("dup")).is_err());
}

#[test]
fn test_spec_deserializes_from_json() {
    let spec: CheckSpec = serde_json::from_value(json!({
        "name": "acl",
        "impl": "ac_handling",
        "config": { "levelSet": "no_clear" },
    }))
    .unwrap();
    assert_eq!(spec.implementation, "ac_handling");
    assert_eq!(spec.label(), "acl");
    assert!(!spec.skip);
}
