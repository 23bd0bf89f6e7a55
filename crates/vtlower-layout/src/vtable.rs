//! Dispatch table synthesis.

use crate::ancestry::ancestry;
use smol_str::SmolStr;
use vtlower_ast::{type_node, Child, ClassMap, ClassSignature, MethodSignature, Node};
use vtlower_common::Result;

/// One function pointer of a dispatch table.
#[derive(Debug, Clone, PartialEq)]
pub struct VTableSlot {
    pub name: SmolStr,
    pub return_type: Node,
    /// Declared parameter types, excluding the receiver.
    pub parameter_types: Vec<Node>,
    /// Class whose definition the slot points at.
    pub implementor: SmolStr,
}

/// Dispatch table of one class.
///
/// Slots are inherited from the root down: a method whose name and parameter
/// types match an inherited slot takes that slot over, any other instance
/// method is appended. Static methods never occupy a slot.
#[derive(Debug)]
pub struct VTableLayout<'a> {
    class: &'a ClassSignature,
    slots: Vec<VTableSlot>,
}

impl VTableSlot {
    fn from_method(method: &MethodSignature, implementor: &SmolStr) -> Self {
        Self {
            name: method.name.clone(),
            return_type: method.return_type.clone(),
            parameter_types: method.parameter_types.clone(),
            implementor: implementor.clone(),
        }
    }

    fn overrides(&self, method: &MethodSignature) -> bool {
        self.name == method.name && self.parameter_types == method.parameter_types
    }
}

impl<'a> VTableLayout<'a> {
    pub fn new(class: &'a ClassSignature, classes: &'a ClassMap) -> Result<Self> {
        let mut slots: Vec<VTableSlot> = Vec::new();

        for ancestor in ancestry(class, classes)? {
            for method in ancestor.methods.iter().filter(|m| !m.is_static()) {
                let slot = VTableSlot::from_method(method, &ancestor.class_name);
                match slots.iter_mut().find(|existing| existing.overrides(method)) {
                    Some(existing) => *existing = slot,
                    None => slots.push(slot),
                }
            }
        }

        tracing::trace!(class = %class.class_name, slots = slots.len(), "built vtable");
        Ok(Self { class, slots })
    }

    pub fn slots(&self) -> &[VTableSlot] {
        &self.slots
    }

    /// `VTableDeclaration(class, VTableEntries)`.
    ///
    /// Every entry's parameter types start with the receiver type of the
    /// table's own class.
    pub fn make_vtable(&self) -> Node {
        let entries = Node::with_nodes(
            "VTableEntries",
            self.slots.iter().map(|slot| {
                let params = std::iter::once(type_node(&self.class.class_name, 0))
                    .chain(slot.parameter_types.iter().cloned());
                Node::with(
                    "VTableEntry",
                    vec![
                        slot.return_type.clone().into(),
                        Child::Text(slot.name.clone()),
                        Node::with_nodes("ParameterTypes", params).into(),
                        Child::Text(slot.implementor.clone()),
                    ],
                )
            }),
        );

        Node::with(
            "VTableDeclaration",
            vec![Child::Text(self.class.class_name.clone()), entries.into()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtlower_ast::Hierarchy;

    fn shapes() -> Hierarchy {
        let int = || type_node("int", 0);
        Hierarchy::new(
            [
                ClassSignature::root("Shape")
                    .with_method(MethodSignature::new("area", int()))
                    .with_method(MethodSignature::new("id", int()))
                    .with_method(MethodSignature::new("count", int()).with_modifier("static")),
                ClassSignature::new("Circle", "Shape")
                    .with_method(MethodSignature::new("area", int()))
                    .with_method(MethodSignature::new("scale", type_node("void", 0)).with_param("k", int())),
            ],
            vec![],
        )
    }

    #[test]
    fn test_override_keeps_slot_position() {
        let hierarchy = shapes();
        let layout = VTableLayout::new(&hierarchy.classes["Circle"], &hierarchy.classes).unwrap();
        let slots: Vec<_> = layout
            .slots()
            .iter()
            .map(|s| (s.name.as_str(), s.implementor.as_str()))
            .collect();
        assert_eq!(slots, [("area", "Circle"), ("id", "Shape"), ("scale", "Circle")]);
    }

    #[test]
    fn test_overload_gets_new_slot() {
        let hierarchy = Hierarchy::new(
            [
                ClassSignature::root("A").with_method(MethodSignature::new("f", type_node("void", 0))),
                ClassSignature::new("B", "A").with_method(
                    MethodSignature::new("f", type_node("void", 0)).with_param("x", type_node("int", 0)),
                ),
            ],
            vec![],
        );
        let layout = VTableLayout::new(&hierarchy.classes["B"], &hierarchy.classes).unwrap();
        assert_eq!(layout.slots().len(), 2);
        assert_eq!(layout.slots()[0].implementor, "A");
    }

    #[test]
    fn test_entries_take_receiver_first() {
        let hierarchy = shapes();
        let table = VTableLayout::new(&hierarchy.classes["Circle"], &hierarchy.classes)
            .unwrap()
            .make_vtable();
        assert_eq!(table.text(0, "class").unwrap(), "Circle");

        let entries = table.node(1, "entries").unwrap();
        let scale = entries.node(2, "entry").unwrap();
        assert_eq!(scale.len(), 4);
        assert_eq!(scale.text(1, "name").unwrap(), "scale");
        let params = scale.node(2, "parameter types").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.node(0, "receiver").unwrap(), &type_node("Circle", 0));
    }
}
