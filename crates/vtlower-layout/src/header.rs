//! Assembly of the header compilation unit.

use crate::ancestry::hierarchy_order;
use crate::data_layout::DataLayout;
use crate::vtable::VTableLayout;
use crate::{struct_name, vtable_name};
use vtlower_ast::{Hierarchy, Node};
use vtlower_common::Result;

/// Builds the declarations of every class of a hierarchy.
pub struct HeaderBuilder<'a> {
    hierarchy: &'a Hierarchy,
}

impl<'a> HeaderBuilder<'a> {
    pub fn new(hierarchy: &'a Hierarchy) -> Self {
        Self { hierarchy }
    }

    /// `CompilationUnit` holding the package namespaces and, innermost,
    /// forward declarations, typedefs, then each class followed by its vtable.
    pub fn build(&self) -> Result<Node> {
        let classes = &self.hierarchy.classes;
        let ordered = hierarchy_order(classes)?;

        let mut forward = Node::new("ForwardDeclarations");
        let mut typedefs = Node::new("TypeSpecifiers");
        for class in &ordered {
            forward.push(forward_declaration(&struct_name(&class.class_name)));
            forward.push(forward_declaration(&vtable_name(&class.class_name)));
            typedefs.push(Node::with(
                "TypeSpecifier",
                vec![
                    "typedef".into(),
                    format!("{}*", struct_name(&class.class_name)).into(),
                    class.class_name.clone().into(),
                ],
            ));
        }

        let mut declarations = vec![forward, typedefs];
        for class in &ordered {
            declarations.push(DataLayout::new(class, classes)?.make_data_layout());
            declarations.push(VTableLayout::new(class, classes)?.make_vtable());
        }
        tracing::debug!(classes = ordered.len(), "assembled header declarations");

        Ok(Node::with_nodes(
            "CompilationUnit",
            wrap_in_namespaces(&self.hierarchy.packages, declarations),
        ))
    }
}

fn forward_declaration(name: &str) -> Node {
    Node::with("ForwardDeclaration", vec!["struct".into(), name.into()])
}

/// Nest `members` inside one `NamespaceDeclaration` per package segment.
pub fn wrap_in_namespaces(packages: &[String], members: Vec<Node>) -> Vec<Node> {
    packages.iter().rev().fold(members, |inner, package| {
        let mut namespace = Node::with("NamespaceDeclaration", vec![package.as_str().into()]);
        for member in inner {
            namespace.push(member);
        }
        vec![namespace]
    })
}
