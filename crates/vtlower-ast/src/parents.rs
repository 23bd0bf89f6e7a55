//! Transient child-to-parent lookup.

use crate::node::Node;
use rustc_hash::FxHashMap;

/// Maps every node of one tree to its immediate parent.
///
/// Trees carry no back-references, so ancestor-sensitive consumers build
/// this index over the exact tree they are about to walk and drop it
/// afterwards. Keys are node addresses: the index borrows the tree, which
/// keeps those addresses stable for its whole lifetime.
#[derive(Debug, Default)]
pub struct ParentIndex<'a> {
    parents: FxHashMap<*const Node, &'a Node>,
}

impl<'a> ParentIndex<'a> {
    /// Index every node reachable from `root`.
    pub fn build(root: &'a Node) -> Self {
        let mut parents = FxHashMap::default();
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            for child in parent.nodes() {
                parents.insert(child as *const Node, parent);
                stack.push(child);
            }
        }
        Self { parents }
    }

    /// Parent of `node`, or `None` for the root and for nodes from another tree.
    pub fn parent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parents.get(&(node as *const Node)).copied()
    }

    /// Parent of the parent of `node`.
    pub fn grandparent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parent_of(node).and_then(|parent| self.parent_of(parent))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn test_parent_and_grandparent() {
        let tree = Node::with_nodes(
            "Block",
            [Node::with_nodes(
                "ExpressionStatement",
                [Node::with_nodes("CBlock", [])],
            )],
        );
        let index = ParentIndex::build(&tree);
        let statement = tree.nodes().next().unwrap();
        let cblock = statement.nodes().next().unwrap();

        assert_eq!(index.len(), 2);
        assert!(index.parent_of(&tree).is_none());
        assert!(index.parent_of(cblock).unwrap().is(NodeKind::ExpressionStatement));
        assert!(index.grandparent_of(cblock).unwrap().is(NodeKind::Block));
    }

    #[test]
    fn test_identity_not_equality() {
        // Two structurally equal leaves under different parents.
        let tree = Node::with_nodes(
            "CompilationUnit",
            [
                Node::with_nodes("Block", [Node::new("ThisExpression")]),
                Node::with_nodes("Arguments", [Node::new("ThisExpression")]),
            ],
        );
        let index = ParentIndex::build(&tree);
        let mut groups = tree.nodes();
        let in_block = groups.next().unwrap().nodes().next().unwrap();
        let in_args = groups.next().unwrap().nodes().next().unwrap();

        assert!(index.parent_of(in_block).unwrap().is(NodeKind::Block));
        assert!(index.parent_of(in_args).unwrap().is(NodeKind::Arguments));

        let copy = in_block.clone();
        assert!(index.parent_of(&copy).is_none());
    }
}
