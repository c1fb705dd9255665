//! Tests for the standard value factory

use pkgcheck_domain::{PropertyType, Value, ValueFactory};
use pkgcheck_providers::StandardValueFactory;

#[test]
fn test_typed_conversions() {
    let factory = StandardValueFactory;
    assert_eq!(
        factory.create_value("42", PropertyType::Long).unwrap(),
        Value::Long(42)
    );
    assert_eq!(
        factory.create_value("TRUE", PropertyType::Boolean).unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(
        factory.create_value("1.50", PropertyType::Decimal).unwrap(),
        Value::Decimal("1.50".to_string())
    );
    assert_eq!(
        factory.create_value("x", PropertyType::Undefined).unwrap(),
        Value::String("x".to_string())
    );
    let date = factory
        .create_value("2024-03-01T10:00:00.000+01:00", PropertyType::Date)
        .unwrap();
    assert_eq!(date.property_type(), PropertyType::Date);
}

#[test]
fn test_malformed_values_are_rejected() {
    let factory = StandardValueFactory;
    assert!(factory.create_value("ten", PropertyType::Long).is_err());
    assert!(factory.create_value("yes", PropertyType::Boolean).is_err());
    assert!(factory.create_value("yesterday", PropertyType::Date).is_err());
    assert!(factory.create_value("not a uri", PropertyType::Uri).is_err());
    assert!(factory.create_value("  ", PropertyType::Name).is_err());
}
