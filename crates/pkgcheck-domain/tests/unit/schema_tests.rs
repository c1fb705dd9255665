//! Unit tests for schema value objects

use pkgcheck_domain::{
    ChildNodeDefinition, NodeTypeDefinition, PropertyType, SchemaDocumentRef, Value,
};

#[test]
fn test_schema_ref_parses_url() {
    let reference = SchemaDocumentRef::parse("file:///schemas/base.cnd").unwrap();
    assert_eq!(reference.url().scheme(), "file");
    assert_eq!(reference.as_str(), "file:///schemas/base.cnd");
}

#[test]
fn test_schema_ref_accepts_relative_path() {
    let reference = SchemaDocumentRef::parse("schemas/base.cnd").unwrap();
    assert_eq!(reference.url().scheme(), "file");
    assert!(reference.as_str().ends_with("/schemas/base.cnd"));
}

#[test]
fn test_schema_refs_compare_by_locator() {
    let a = SchemaDocumentRef::parse("memory:/a.cnd").unwrap();
    let b = SchemaDocumentRef::parse("memory:/a.cnd").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_property_type_parse() {
    assert_eq!("string".parse::<PropertyType>().unwrap(), PropertyType::String);
    assert_eq!(
        "WeakReference".parse::<PropertyType>().unwrap(),
        PropertyType::WeakReference
    );
    assert_eq!("*".parse::<PropertyType>().unwrap(), PropertyType::Undefined);
    assert!("COLOR".parse::<PropertyType>().is_err());
}

#[test]
fn test_value_reports_its_type() {
    assert_eq!(Value::Long(3).property_type(), PropertyType::Long);
    assert_eq!(Value::Boolean(true).to_string(), "true");
}

#[test]
fn test_referenced_types_deduplicates_and_skips_self() {
    let mut def = NodeTypeDefinition::new("acme:Folder").with_supertypes(["nt:folder", "mix:title"]);
    let mut child = ChildNodeDefinition::new(
        "*",
        vec!["acme:Folder".to_string(), "nt:folder".to_string()],
    );
    child.default_primary_type = Some("acme:Page".to_string());
    def.child_node_definitions.push(child);

    assert_eq!(
        def.referenced_types(),
        vec!["nt:folder", "mix:title", "acme:Page"]
    );
}
