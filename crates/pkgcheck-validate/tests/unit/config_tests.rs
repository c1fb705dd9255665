//! Tests for typed check configuration access

use pkgcheck_validate::{CheckConfig, ConfigurationError};
use serde_json::json;

#[test]
fn test_null_is_an_empty_configuration() {
    let config = CheckConfig::from_value(serde_json::Value::Null).unwrap();
    assert_eq!(config.keys().count(), 0);
}

#[test]
fn test_non_object_is_rejected() {
    let err = CheckConfig::try_from(json!(["a"])).unwrap_err();
    assert_eq!(err, ConfigurationError::NotAnObject { found: "an array" });
}

#[test]
fn test_typed_accessors() {
    let config = CheckConfig::from_value(json!({
        "name": "x",
        "list": ["a", "b"],
        "flag": true,
        "unset": null,
    }))
    .unwrap();

    assert_eq!(config.string("name").unwrap(), Some("x"));
    assert_eq!(
        config.string_list("list").unwrap(),
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(config.boolean("flag").unwrap(), Some(true));
    assert_eq!(config.string("unset").unwrap(), None);
    assert_eq!(config.string("missing").unwrap(), None);
    assert!(!config.has("unset"));
    assert!(config.has("flag"));
}

#[test]
fn test_wrong_types_are_reported() {
    let config = CheckConfig::new().with("list", json!(["a", 1])).with("name", 5);

    assert_eq!(
        config.string_list("list").unwrap_err(),
        ConfigurationError::WrongType {
            key: "list".to_string(),
            expected: "an array of strings",
            found: "a number",
        }
    );
    assert!(config.string("name").is_err());
    assert!(config.boolean("name").is_err());
}

#[test]
fn test_unknown_keys_are_denied() {
    let config = CheckConfig::new().with("known", 1).with("typo", 2);
    let err = config.deny_unknown_keys(&["known"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown configuration key 'typo' (expected one of: known)");
    assert!(config.deny_unknown_keys(&["known", "typo"]).is_ok());
}
