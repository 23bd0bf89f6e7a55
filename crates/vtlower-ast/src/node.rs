//! The generic tagged tree node.

use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use vtlower_common::{Result, TranslateError};

/// A node in a tagged AST.
///
/// A node is its kind name plus ordered positional slots. Slot meaning and
/// arity are fixed per kind; an unused optional slot holds [`Child::Absent`]
/// rather than being left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Kind tag
    pub name: SmolStr,
    /// Positional slots
    #[serde(default)]
    pub children: Vec<Child>,
}

/// One positional slot of a [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// An unused slot (`null` in JSON).
    Absent,
    /// A scalar: identifier, operator, literal text.
    Text(SmolStr),
    /// A nested node.
    Node(Node),
}

impl Node {
    /// Create a node with no slots.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with the given slots.
    pub fn with(name: impl Into<SmolStr>, children: Vec<Child>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Create a node whose slots are all nodes.
    pub fn with_nodes(name: impl Into<SmolStr>, nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: name.into(),
            children: nodes.into_iter().map(Child::Node).collect(),
        }
    }

    /// Create a node whose single slot is a scalar.
    pub fn leaf(name: impl Into<SmolStr>, text: impl Into<SmolStr>) -> Self {
        Self::with(name, vec![Child::Text(text.into())])
    }

    /// Decoded kind tag.
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_name(&self.name)
    }

    /// Whether this node's tag decodes to `kind`.
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    /// Append a slot.
    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Nested nodes in slot order, skipping scalars and absent slots.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Slot `index`, failing if the node is too short for it.
    pub fn slot(&self, index: usize, what: &'static str) -> Result<&Child> {
        self.children
            .get(index)
            .ok_or_else(|| TranslateError::arity(self.name.as_str(), index, what))
    }

    /// Slot `index` as an optional node; a scalar there is a shape error.
    pub fn opt_node(&self, index: usize, what: &'static str) -> Result<Option<&Node>> {
        match self.slot(index, what)? {
            Child::Absent => Ok(None),
            Child::Node(node) => Ok(Some(node)),
            Child::Text(_) => Err(TranslateError::slot_mismatch(
                self.name.as_str(),
                index,
                "a node",
            )),
        }
    }

    /// Slot `index` as a required node.
    pub fn node(&self, index: usize, what: &'static str) -> Result<&Node> {
        self.opt_node(index, what)?
            .ok_or_else(|| TranslateError::arity(self.name.as_str(), index, what))
    }

    /// Slot `index` as a required scalar.
    pub fn text(&self, index: usize, what: &'static str) -> Result<&str> {
        match self.slot(index, what)? {
            Child::Text(text) => Ok(text.as_str()),
            Child::Absent => Err(TranslateError::arity(self.name.as_str(), index, what)),
            Child::Node(_) => Err(TranslateError::slot_mismatch(
                self.name.as_str(),
                index,
                "a scalar",
            )),
        }
    }

    /// Slot `index` as an optional scalar.
    pub fn opt_text(&self, index: usize, what: &'static str) -> Result<Option<&str>> {
        match self.children.get(index) {
            None | Some(Child::Absent) => Ok(None),
            Some(Child::Text(text)) => Ok(Some(text.as_str())),
            Some(Child::Node(_)) => Err(TranslateError::slot_mismatch(
                self.name.as_str(),
                index,
                "a scalar",
            )),
        }
    }
}

impl Child {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Child::Absent)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Option<Node>> for Child {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Child::Absent, Child::Node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.into())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text.into())
    }
}

impl From<SmolStr> for Child {
    fn from(text: SmolStr) -> Self {
        Child::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method_stub() -> Node {
        Node::with(
            "MethodDeclaration",
            vec![
                Node::new("Modifiers").into(),
                Child::Absent,
                Node::new("VoidType").into(),
                "run".into(),
            ],
        )
    }

    #[test]
    fn test_slot_accessors() {
        let method = method_stub();
        assert_eq!(method.kind(), NodeKind::MethodDeclaration);
        assert_eq!(method.text(3, "name").unwrap(), "run");
        assert!(method.opt_node(1, "annotations").unwrap().is_none());
        assert!(method.node(2, "return type").unwrap().is(NodeKind::VoidType));
        assert_eq!(method.nodes().count(), 2);
    }

    #[test]
    fn test_short_node_is_arity_error() {
        let method = method_stub();
        let err = method.opt_node(7, "body").unwrap_err();
        assert!(matches!(err, TranslateError::Arity { index: 7, .. }));
    }

    #[test]
    fn test_wrong_shape_is_mismatch() {
        let method = method_stub();
        assert!(matches!(
            method.text(2, "return type"),
            Err(TranslateError::SlotMismatch { index: 2, .. })
        ));
        assert!(matches!(
            method.node(3, "name"),
            Err(TranslateError::SlotMismatch { index: 3, .. })
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"name":"Declarator","children":["x",null,{"name":"IntegerLiteral","children":["1"]}]}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.text(0, "name").unwrap(), "x");
        assert!(node.children[1].is_absent());
        assert!(node.node(2, "initializer").unwrap().is(NodeKind::IntegerLiteral));
        assert_eq!(serde_json::to_string(&node).unwrap(), json);
    }
}
