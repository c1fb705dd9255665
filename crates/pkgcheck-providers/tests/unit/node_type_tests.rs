//! Tests for the in-memory node type manager

use pkgcheck_domain::{ChildNodeDefinition, NodeTypeDefinition, NodeTypeManager};
use pkgcheck_providers::InMemoryNodeTypeManager;

fn mixin(name: &str) -> NodeTypeDefinition {
    let mut definition = NodeTypeDefinition::new(name);
    definition.is_mixin = true;
    definition
}

#[test]
fn test_builtin_types_are_present() {
    let manager = InMemoryNodeTypeManager::new();
    for name in ["nt:base", "nt:unstructured", "nt:folder", "nt:file", "mix:title"] {
        assert!(manager.has_node_type(name), "{name} should be built in");
    }
    assert!(manager.node_type("nt:base").unwrap().is_abstract);
}

#[test]
fn test_batch_may_reference_its_own_members() {
    let mut manager = InMemoryNodeTypeManager::new();
    let page = NodeTypeDefinition::new("acme:Page").with_supertypes(["acme:Base"]);
    let base = NodeTypeDefinition::new("acme:Base").with_supertypes(["nt:base"]);

    let names = manager.register_node_types(vec![page, base], false).unwrap();

    assert_eq!(names, vec!["acme:Page", "acme:Base"]);
    assert!(manager.has_node_type("acme:Page"));
}

#[test]
fn test_unresolved_reference_rejects_whole_batch() {
    let mut manager = InMemoryNodeTypeManager::new();
    let before = manager.len();
    let ok = NodeTypeDefinition::new("acme:Ok").with_supertypes(["nt:base"]);
    let mut broken = NodeTypeDefinition::new("acme:Broken");
    broken.child_node_definitions = vec![ChildNodeDefinition::new(
        "item",
        vec!["acme:Missing".to_string()],
    )];

    let err = manager
        .register_node_types(vec![ok, broken], false)
        .unwrap_err();

    assert!(err.to_string().contains("acme:Missing"));
    assert_eq!(manager.len(), before);
    assert!(!manager.has_node_type("acme:Ok"));
}

#[test]
fn test_existing_type_fails_without_update() {
    let mut manager = InMemoryNodeTypeManager::new();
    let err = manager
        .register_node_types(vec![NodeTypeDefinition::new("nt:folder")], false)
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));

    manager
        .register_node_types(
            vec![NodeTypeDefinition::new("nt:folder").with_supertypes(["nt:base"])],
            true,
        )
        .unwrap();
    assert_eq!(
        manager.node_type("nt:folder").unwrap().supertypes,
        vec!["nt:base"]
    );
}

#[test]
fn test_supertype_cycle_is_rejected() {
    let mut manager = InMemoryNodeTypeManager::new();
    let a = NodeTypeDefinition::new("acme:A").with_supertypes(["acme:B"]);
    let b = NodeTypeDefinition::new("acme:B").with_supertypes(["acme:A"]);

    let err = manager.register_node_types(vec![a, b], false).unwrap_err();

    assert!(err.to_string().contains("cycle"));
}

#[test]
fn test_mixin_cannot_extend_primary_type() {
    let mut manager = InMemoryNodeTypeManager::new();
    let err = manager
        .register_node_types(
            vec![mixin("acme:Tagged").with_supertypes(["nt:unstructured"])],
            false,
        )
        .unwrap_err();
    assert!(err.to_string().contains("mixin cannot extend"));

    manager
        .register_node_types(
            vec![mixin("acme:Titled").with_supertypes(["mix:title"])],
            false,
        )
        .unwrap();
}
