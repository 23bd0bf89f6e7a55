//! Class signature model consumed by layout synthesis.

use crate::node::Node;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::BTreeSet;
use vtlower_common::ROOT_SENTINEL;

/// Class name to signature, in registration order.
pub type ClassMap = IndexMap<SmolStr, ClassSignature>;

/// One class as seen by the hierarchy builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSignature {
    pub class_name: SmolStr,
    /// Parent class name, or `"null"` for a root class.
    pub parent_class_name: SmolStr,
    #[serde(default)]
    pub fields: Vec<FieldSignature>,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
    #[serde(default)]
    pub constructors: Vec<ConstructorSignature>,
}

/// A field declaration; one signature may declare several names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSignature {
    #[serde(default)]
    pub modifiers: BTreeSet<SmolStr>,
    pub field_type: Node,
    pub declarators: Vec<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    #[serde(default)]
    pub modifiers: BTreeSet<SmolStr>,
    pub return_type: Node,
    pub name: SmolStr,
    #[serde(default)]
    pub parameters: Vec<SmolStr>,
    #[serde(default)]
    pub parameter_types: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorSignature {
    #[serde(default)]
    pub modifiers: BTreeSet<SmolStr>,
    #[serde(default)]
    pub parameters: Vec<SmolStr>,
    #[serde(default)]
    pub parameter_types: Vec<Node>,
}

/// Hierarchy builder output: the class map plus the package path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub classes: ClassMap,
    /// Package segments, outermost first; they become nested namespaces.
    #[serde(default)]
    pub packages: Vec<String>,
}

fn has_static(modifiers: &BTreeSet<SmolStr>) -> bool {
    modifiers.contains("static")
}

impl ClassSignature {
    pub fn new(class_name: impl Into<SmolStr>, parent_class_name: impl Into<SmolStr>) -> Self {
        Self {
            class_name: class_name.into(),
            parent_class_name: parent_class_name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// A class with no parent.
    pub fn root(class_name: impl Into<SmolStr>) -> Self {
        Self::new(class_name, ROOT_SENTINEL)
    }

    /// Parent name, unless this is a root class.
    pub fn parent(&self) -> Option<&str> {
        if self.parent_class_name == ROOT_SENTINEL {
            None
        } else {
            Some(self.parent_class_name.as_str())
        }
    }

    pub fn with_field(mut self, field: FieldSignature) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorSignature) -> Self {
        self.constructors.push(constructor);
        self
    }
}

impl FieldSignature {
    pub fn new(field_type: Node, declarators: impl IntoIterator<Item = impl Into<SmolStr>>) -> Self {
        Self {
            modifiers: BTreeSet::new(),
            field_type,
            declarators: declarators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<SmolStr>) -> Self {
        self.modifiers.insert(modifier.into());
        self
    }

    pub fn is_static(&self) -> bool {
        has_static(&self.modifiers)
    }
}

impl MethodSignature {
    pub fn new(name: impl Into<SmolStr>, return_type: Node) -> Self {
        Self {
            modifiers: BTreeSet::new(),
            return_type,
            name: name.into(),
            parameters: Vec::new(),
            parameter_types: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<SmolStr>) -> Self {
        self.modifiers.insert(modifier.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<SmolStr>, ty: Node) -> Self {
        self.parameters.push(name.into());
        self.parameter_types.push(ty);
        self
    }

    pub fn is_static(&self) -> bool {
        has_static(&self.modifiers)
    }
}

impl ConstructorSignature {
    pub fn new() -> Self {
        Self {
            modifiers: BTreeSet::new(),
            parameters: Vec::new(),
            parameter_types: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<SmolStr>, ty: Node) -> Self {
        self.parameters.push(name.into());
        self.parameter_types.push(ty);
        self
    }
}

impl Default for ConstructorSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub fn new(classes: impl IntoIterator<Item = ClassSignature>, packages: Vec<String>) -> Self {
        Self {
            classes: classes
                .into_iter()
                .map(|class| (class.class_name.clone(), class))
                .collect(),
            packages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_node;

    #[test]
    fn test_root_and_parent() {
        let shape = ClassSignature::root("Shape");
        let circle = ClassSignature::new("Circle", "Shape");
        assert_eq!(shape.parent(), None);
        assert_eq!(circle.parent(), Some("Shape"));
    }

    #[test]
    fn test_static_modifier() {
        let count = FieldSignature::new(type_node("int", 0), ["count"]).with_modifier("static");
        let id = FieldSignature::new(type_node("int", 0), ["id"]).with_modifier("final");
        assert!(count.is_static());
        assert!(!id.is_static());
    }

    #[test]
    fn test_hierarchy_keys_by_class_name() {
        let hierarchy = Hierarchy::new(
            [ClassSignature::root("Shape"), ClassSignature::new("Circle", "Shape")],
            vec!["shapes".to_string()],
        );
        let names: Vec<_> = hierarchy.classes.keys().map(SmolStr::as_str).collect();
        assert_eq!(names, ["Shape", "Circle"]);
    }
}
