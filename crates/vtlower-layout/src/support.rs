//! Runtime support nodes appended to the implementation and entry-point units.

use vtlower_ast::{ClassSignature, Node};

/// `pkg.sub.Name` for a class declared under `packages`.
pub fn qualified_name(packages: &[String], class_name: &str, separator: &str) -> String {
    packages
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(class_name))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `ClassMethodDefinition(qualified name, parent name)`.
///
/// Printed as the out-of-line `__class()` accessor and the storage of the
/// class's static vtable.
pub fn class_support(class: &ClassSignature, packages: &[String]) -> Node {
    Node::with(
        "ClassMethodDefinition",
        vec![
            qualified_name(packages, &class.class_name, ".").into(),
            class.parent_class_name.clone().into(),
        ],
    )
}

/// `CompilationUnit` holding the `main` wrapper that forwards to
/// `main_class`'s static `main`.
pub fn entry_point_ast(main_class: &str, packages: &[String]) -> Node {
    Node::with_nodes(
        "CompilationUnit",
        [Node::leaf(
            "MainMethodDefinition",
            qualified_name(packages, main_class, "::"),
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_support_names() {
        let packages = vec!["inputs".to_string(), "test001".to_string()];
        let node = class_support(&ClassSignature::new("Circle", "Shape"), &packages);
        assert_eq!(node.text(0, "name").unwrap(), "inputs.test001.Circle");
        assert_eq!(node.text(1, "parent").unwrap(), "Shape");

        let root = class_support(&ClassSignature::root("Shape"), &[]);
        assert_eq!(root.text(0, "name").unwrap(), "Shape");
        assert_eq!(root.text(1, "parent").unwrap(), "null");
    }

    #[test]
    fn test_entry_point_location() {
        let unit = entry_point_ast("Test001", &["inputs".to_string()]);
        let main = unit.node(0, "main").unwrap();
        assert_eq!(main.text(0, "location").unwrap(), "inputs::Test001");
    }
}
