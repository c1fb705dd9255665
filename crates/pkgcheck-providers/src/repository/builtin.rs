//! Built-in namespaces and node types every repository starts with

use crate::constants::{PREFIX_JCR, PREFIX_MIX, PREFIX_NT, PREFIX_XML};
use pkgcheck_domain::constants::{
    NAMESPACE_JCR, NAMESPACE_MIX, NAMESPACE_NT, NAMESPACE_XML, NT_BASE,
};
use pkgcheck_domain::{ChildNodeDefinition, NodeTypeDefinition, PropertyDefinition, PropertyType};

pub(super) const NAMESPACES: [(&str, &str); 4] = [
    (PREFIX_JCR, NAMESPACE_JCR),
    (PREFIX_NT, NAMESPACE_NT),
    (PREFIX_MIX, NAMESPACE_MIX),
    (PREFIX_XML, NAMESPACE_XML),
];

fn property(name: &str, required_type: PropertyType) -> PropertyDefinition {
    PropertyDefinition::new(name, required_type)
}

fn protected(mut definition: PropertyDefinition) -> PropertyDefinition {
    definition.protected = true;
    definition.autocreated = true;
    definition
}

fn child(name: &str, required: &str) -> ChildNodeDefinition {
    ChildNodeDefinition::new(name, vec![required.to_string()])
}

fn mixin(name: &str) -> NodeTypeDefinition {
    let mut definition = NodeTypeDefinition::new(name);
    definition.is_mixin = true;
    definition
}

pub(super) fn node_types() -> Vec<NodeTypeDefinition> {
    let mut base = NodeTypeDefinition::new(NT_BASE);
    base.is_abstract = true;
    let mut primary_type = protected(property("jcr:primaryType", PropertyType::Name));
    primary_type.mandatory = true;
    let mut mixin_types = property("jcr:mixinTypes", PropertyType::Name);
    mixin_types.protected = true;
    mixin_types.multiple = true;
    base.property_definitions = vec![primary_type, mixin_types];

    let mut created = mixin("mix:created");
    created.property_definitions = vec![
        protected(property("jcr:created", PropertyType::Date)),
        protected(property("jcr:createdBy", PropertyType::String)),
    ];

    let mut last_modified = mixin("mix:lastModified");
    last_modified.property_definitions = vec![
        property("jcr:lastModified", PropertyType::Date),
        property("jcr:lastModifiedBy", PropertyType::String),
    ];

    let mut title = mixin("mix:title");
    title.property_definitions = vec![
        property("jcr:title", PropertyType::String),
        property("jcr:description", PropertyType::String),
    ];

    let mut mime_type = mixin("mix:mimeType");
    mime_type.property_definitions = vec![
        property("jcr:mimeType", PropertyType::String),
        property("jcr:encoding", PropertyType::String),
    ];

    let mut referenceable = mixin("mix:referenceable");
    referenceable.property_definitions =
        vec![protected(property("jcr:uuid", PropertyType::String))];

    let mut unstructured = NodeTypeDefinition::new("nt:unstructured").with_supertypes([NT_BASE]);
    unstructured.orderable_child_nodes = true;
    let residual_single = property("*", PropertyType::Undefined);
    let mut residual_multiple = property("*", PropertyType::Undefined);
    residual_multiple.multiple = true;
    unstructured.property_definitions = vec![residual_single, residual_multiple];
    let mut residual_child = child("*", NT_BASE);
    residual_child.default_primary_type = Some("nt:unstructured".to_string());
    residual_child.same_name_siblings = true;
    unstructured.child_node_definitions = vec![residual_child];

    let mut hierarchy =
        NodeTypeDefinition::new("nt:hierarchyNode").with_supertypes([NT_BASE, "mix:created"]);
    hierarchy.is_abstract = true;

    let mut folder = NodeTypeDefinition::new("nt:folder").with_supertypes(["nt:hierarchyNode"]);
    folder.child_node_definitions = vec![child("*", "nt:hierarchyNode")];

    let mut file = NodeTypeDefinition::new("nt:file").with_supertypes(["nt:hierarchyNode"]);
    let mut content = child("jcr:content", NT_BASE);
    content.mandatory = true;
    file.child_node_definitions = vec![content];
    file.primary_item_name = Some("jcr:content".to_string());

    let mut resource = NodeTypeDefinition::new("nt:resource")
        .with_supertypes([NT_BASE, "mix:mimeType", "mix:lastModified"]);
    let mut data = property("jcr:data", PropertyType::Binary);
    data.mandatory = true;
    resource.property_definitions = vec![data];
    resource.primary_item_name = Some("jcr:data".to_string());

    vec![
        base,
        created,
        last_modified,
        title,
        mime_type,
        referenceable,
        unstructured,
        hierarchy,
        folder,
        file,
        resource,
    ]
}
