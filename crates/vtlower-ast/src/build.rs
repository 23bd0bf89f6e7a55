//! Constructors for the fixed-arity declaration nodes.
//!
//! Each helper fills every positional slot its kind defines, using
//! [`Child::Absent`] for the unused ones.

use crate::node::{Child, Node};
use smol_str::SmolStr;

const PRIMITIVES: &[&str] = &[
    "byte", "short", "int", "long", "char", "boolean", "float", "double",
];

/// `Type(base, dimensions)` for a Java type name with `dims` array dimensions.
///
/// Primitive names become `PrimitiveType`, `void` becomes `VoidType`, anything
/// else a `QualifiedIdentifier` split on `.`.
pub fn type_node(name: &str, dims: usize) -> Node {
    if name == "void" {
        return Node::new("VoidType");
    }

    let base = if PRIMITIVES.contains(&name) {
        Node::leaf("PrimitiveType", name)
    } else {
        Node::with("QualifiedIdentifier", name.split('.').map(Child::from).collect())
    };

    let dimensions = (dims > 0).then(|| {
        Node::with("Dimensions", (0..dims).map(|_| Child::from("[")).collect())
    });

    Node::with("Type", vec![base.into(), dimensions.into()])
}

/// `Modifiers` holding one `Modifier` per name.
pub fn modifiers<'a>(names: impl IntoIterator<Item = &'a str>) -> Node {
    Node::with_nodes("Modifiers", names.into_iter().map(|name| Node::leaf("Modifier", name)))
}

/// `Declarator(name, dimensions, initializer)` without dimensions.
pub fn declarator(name: impl Into<SmolStr>, initializer: Option<Node>) -> Node {
    Node::with(
        "Declarator",
        vec![Child::Text(name.into()), Child::Absent, initializer.into()],
    )
}

/// `FieldDeclaration(modifiers, type, declarators)`.
pub fn field_declaration<'a>(
    modifier_names: impl IntoIterator<Item = &'a str>,
    field_type: Node,
    names: impl IntoIterator<Item = SmolStr>,
) -> Node {
    let declarators = Node::with_nodes("Declarators", names.into_iter().map(|n| declarator(n, None)));
    Node::with(
        "FieldDeclaration",
        vec![modifiers(modifier_names).into(), field_type.into(), declarators.into()],
    )
}

/// `FormalParameter(modifiers, type, dimensions, name, ellipsis)`.
pub fn formal_parameter(param_type: Node, name: impl Into<SmolStr>) -> Node {
    Node::with(
        "FormalParameter",
        vec![
            modifiers([]).into(),
            param_type.into(),
            Child::Absent,
            Child::Text(name.into()),
            Child::Absent,
        ],
    )
}

/// `FormalParameters` from `(type, name)` pairs.
pub fn formal_parameters(params: impl IntoIterator<Item = (Node, SmolStr)>) -> Node {
    Node::with_nodes(
        "FormalParameters",
        params.into_iter().map(|(ty, name)| formal_parameter(ty, name)),
    )
}
