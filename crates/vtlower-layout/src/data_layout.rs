//! Instance layout and member declarations of one lowered class.

use crate::ancestry::ancestry;
use crate::vtable_name;
use smol_str::SmolStr;
use vtlower_ast::{
    field_declaration, formal_parameters, modifiers, type_node, Child, ClassMap, ClassSignature,
    ConstructorSignature, FieldSignature, MethodSignature, Node,
};
use vtlower_common::{Result, SELF_IDENT};

/// Synthesized member names.
const VPTR: &str = "__vptr";
const VTABLE: &str = "__vtable";
const INIT: &str = "__init";
const CLASS_ACCESSOR: &str = "__class";
const CLASS_TYPE: &str = "Class";

/// Lowered declaration of one class.
///
/// The field list is the single-inheritance instance layout: fields of the
/// root ancestor first, then each descendant's, ending with the class's own.
/// Ancestors contribute only instance fields; static fields stay with the
/// class that declares them.
#[derive(Debug)]
pub struct DataLayout<'a> {
    class: &'a ClassSignature,
    fields: Vec<&'a FieldSignature>,
}

/// Lowered `ClassDeclaration` of `class`.
pub fn synthesize(class: &ClassSignature, classes: &ClassMap) -> Result<Node> {
    let layout = DataLayout::new(class, classes)?;
    tracing::debug!(
        class = %class.class_name,
        fields = layout.fields().len(),
        constructors = class.constructors.len(),
        methods = class.methods.len(),
        "synthesized data layout"
    );
    Ok(layout.make_data_layout())
}

impl<'a> DataLayout<'a> {
    pub fn new(class: &'a ClassSignature, classes: &'a ClassMap) -> Result<Self> {
        let chain = ancestry(class, classes)?;
        let ancestors = chain.split_last().map_or(&[][..], |(_, rest)| rest);

        let mut fields: Vec<&FieldSignature> = ancestors
            .iter()
            .copied()
            .flat_map(|ancestor| ancestor.fields.iter())
            .filter(|field| !field.is_static())
            .collect();
        fields.extend(class.fields.iter());

        Ok(Self { class, fields })
    }

    /// Instance layout in declaration order, excluding the synthesized vptr.
    pub fn fields(&self) -> &[&'a FieldSignature] {
        &self.fields
    }

    /// Build the `ClassDeclaration` node.
    pub fn make_data_layout(&self) -> Node {
        let mut body = Node::new("ClassBody");

        body.push(self.make_vptr_field());
        for field in &self.fields {
            body.push(make_field_declaration(field));
        }
        body.push(self.make_default_constructor());
        for constructor in &self.class.constructors {
            body.push(self.make_init_method(constructor));
        }
        for method in &self.class.methods {
            body.push(self.make_method_declaration(method));
        }
        body.push(self.make_class_accessor());
        body.push(self.make_vtable_field());

        Node::with(
            "ClassDeclaration",
            vec![
                Child::Absent,
                Child::Text(self.class.class_name.clone()),
                Child::Absent,
                Child::Absent,
                Child::Absent,
                body.into(),
            ],
        )
    }

    fn self_type(&self) -> Node {
        type_node(&self.class.class_name, 0)
    }

    fn make_vptr_field(&self) -> Node {
        let ty = type_node(&format!("{}*", vtable_name(&self.class.class_name)), 0);
        field_declaration([], ty, [SmolStr::new(VPTR)])
    }

    fn make_vtable_field(&self) -> Node {
        let ty = type_node(&vtable_name(&self.class.class_name), 0);
        field_declaration(["static"], ty, [SmolStr::new(VTABLE)])
    }

    /// No-argument constructor binding the vptr to this class's table.
    fn make_default_constructor(&self) -> Node {
        let initializations = Node::with_nodes(
            "Initializations",
            [Node::with(
                "Initialization",
                vec![VPTR.into(), format!("&{VTABLE}").into()],
            )],
        );
        Node::with(
            "ConstructorDeclaration",
            vec![
                Child::Absent,
                Child::Absent,
                Child::Text(self.class.class_name.clone()),
                Child::Absent,
                initializations.into(),
                Node::new("Block").into(),
            ],
        )
    }

    /// Static `__init(__this, params...)` standing in for a source constructor.
    fn make_init_method(&self, constructor: &ConstructorSignature) -> Node {
        let params = std::iter::once((self.self_type(), SmolStr::new(SELF_IDENT))).chain(
            constructor
                .parameter_types
                .iter()
                .cloned()
                .zip(constructor.parameters.iter().cloned()),
        );
        make_method(self.self_type(), INIT, formal_parameters(params))
    }

    /// Instance methods receive the object explicitly as `__this`.
    fn make_method_declaration(&self, method: &MethodSignature) -> Node {
        let receiver = (!method.is_static()).then(|| (self.self_type(), SmolStr::new(SELF_IDENT)));
        let params = receiver.into_iter().chain(
            method
                .parameter_types
                .iter()
                .cloned()
                .zip(method.parameters.iter().cloned()),
        );
        make_method(method.return_type.clone(), &method.name, formal_parameters(params))
    }

    fn make_class_accessor(&self) -> Node {
        make_method(
            type_node(CLASS_TYPE, 0),
            CLASS_ACCESSOR,
            formal_parameters([]),
        )
    }
}

fn make_field_declaration(field: &FieldSignature) -> Node {
    let static_modifier = field.is_static().then_some("static");
    field_declaration(
        static_modifier,
        field.field_type.clone(),
        field.declarators.iter().cloned(),
    )
}

/// `MethodDeclaration` of a static member without body.
fn make_method(return_type: Node, name: &str, params: Node) -> Node {
    Node::with(
        "MethodDeclaration",
        vec![
            modifiers(["static"]).into(),
            Child::Absent,
            return_type.into(),
            name.into(),
            params.into(),
            Child::Absent,
            Child::Absent,
            Child::Absent,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtlower_ast::{Hierarchy, NodeKind};

    fn member_names(decl: &Node) -> Vec<String> {
        let body = decl.node(5, "body").unwrap();
        body.nodes()
            .map(|member| match member.kind() {
                NodeKind::FieldDeclaration => {
                    let declarators = member.node(2, "declarators").unwrap();
                    declarators.node(0, "declarator").unwrap().text(0, "name").unwrap().to_string()
                }
                NodeKind::MethodDeclaration => member.text(3, "name").unwrap().to_string(),
                NodeKind::ConstructorDeclaration => "<ctor>".to_string(),
                other => other.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_class_floor() {
        let hierarchy = Hierarchy::new([ClassSignature::root("Empty")], vec![]);
        let decl = synthesize(&hierarchy.classes["Empty"], &hierarchy.classes).unwrap();
        assert_eq!(decl.text(1, "name").unwrap(), "Empty");
        assert_eq!(member_names(&decl), ["__vptr", "<ctor>", "__class", "__vtable"]);
    }

    #[test]
    fn test_init_prefixes_receiver() {
        let shape = ClassSignature::root("Shape")
            .with_constructor(ConstructorSignature::new().with_param("id", type_node("int", 0)));
        let hierarchy = Hierarchy::new([shape], vec![]);
        let decl = synthesize(&hierarchy.classes["Shape"], &hierarchy.classes).unwrap();
        let body = decl.node(5, "body").unwrap();
        let init = body.nodes().find(|m| m.text(3, "name").ok() == Some("__init")).unwrap();

        assert_eq!(init.len(), 8);
        let params: Vec<_> = init
            .node(4, "parameters")
            .unwrap()
            .nodes()
            .map(|p| p.text(3, "name").unwrap().to_string())
            .collect();
        assert_eq!(params, [SELF_IDENT, "id"]);
        assert_eq!(init.node(2, "return type").unwrap(), &type_node("Shape", 0));
    }

    #[test]
    fn test_static_methods_take_no_receiver() {
        let class = ClassSignature::root("Util")
            .with_method(MethodSignature::new("twice", type_node("int", 0)).with_modifier("static").with_param("x", type_node("int", 0)))
            .with_method(MethodSignature::new("size", type_node("int", 0)));
        let hierarchy = Hierarchy::new([class], vec![]);
        let decl = synthesize(&hierarchy.classes["Util"], &hierarchy.classes).unwrap();
        let body = decl.node(5, "body").unwrap();

        let param_names = |name: &str| -> Vec<String> {
            let method = body.nodes().find(|m| m.text(3, "name").ok() == Some(name)).unwrap();
            method
                .node(4, "parameters")
                .unwrap()
                .nodes()
                .map(|p| p.text(3, "name").unwrap().to_string())
                .collect()
        };
        assert_eq!(param_names("twice"), ["x"]);
        assert_eq!(param_names("size"), [SELF_IDENT]);
    }
}
