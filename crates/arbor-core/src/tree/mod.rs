//! Arena-backed tree container
//!
//! A [`Tree`] owns every node in a single `Vec`. Children are stored in
//! insertion order as [`NodeId`] indices, and each node keeps a non-owning
//! back-reference to its parent. Trees are assembled bottom-up with
//! [`Tree::build`] (or [`TreeBuilder`] when the shape comes from data) and
//! are immutable afterwards.

mod builder;

pub use builder::TreeBuilder;

use std::fmt;
use std::ops::Index;

/// Identity of a node inside one [`Tree`].
///
/// Two nodes holding equal values are still distinct nodes. An id is only
/// meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its tree's arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node slot: value, parent link and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: vec![],
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Parent back-reference; `None` only for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Re-home this slot into an arena where it lands `offset` places later
    fn shifted(self, offset: usize) -> Self {
        Self {
            value: self.value,
            parent: self.parent.map(|id| NodeId(id.0 + offset)),
            children: self
                .children
                .into_iter()
                .map(|id| NodeId(id.0 + offset))
                .collect(),
        }
    }
}

/// An immutable, strictly hierarchical tree of values.
///
/// Every node has exactly one owner: child subtrees are moved into their
/// parent by [`Tree::build`], so a subtree can never be attached twice.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
    root: NodeId,
}

impl<T> Tree<T> {
    /// A single-node tree
    pub fn leaf(value: T) -> Self {
        Self::build(value, vec![])
    }

    /// Build a new root holding `value` over already-built child subtrees.
    ///
    /// Children keep the order they are supplied in, and each child's parent
    /// back-reference is set to the new root here, once.
    pub fn build(value: T, children: Vec<Tree<T>>) -> Self {
        let capacity = 1 + children.iter().map(Tree::node_count).sum::<usize>();
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(TreeNode::new(value));
        let root = NodeId(0);

        for child in children {
            let offset = nodes.len();
            let child_root = child.root.0 + offset;
            nodes.extend(child.nodes.into_iter().map(|node| node.shifted(offset)));
            nodes[child_root].parent = Some(root);
            nodes[root.0].children.push(NodeId(child_root));
        }

        Self { nodes, root }
    }

    pub(crate) fn from_parts(nodes: Vec<TreeNode<T>>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id.0)
    }

    /// Value held by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn value(&self, id: NodeId) -> &T {
        &self[id].value
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate the ancestor chain of `id`, nearest parent first, ending at the
    /// root. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self[id].parent,
        }
    }

    /// Number of edges between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = TreeNode<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator over a node's ancestors, see [`Tree::ancestors`]
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree[current].parent;
        Some(current)
    }
}

/// The demo tree:
///
/// ```text
///      1
///    /   \
///   3     2
///  / \   /|\
/// 4   5 6 7 10
///        / \
///       4   9
/// ```
pub fn reference_tree() -> Tree<i64> {
    Tree::build(
        1,
        vec![
            Tree::build(3, vec![Tree::leaf(4), Tree::leaf(5)]),
            Tree::build(
                2,
                vec![
                    Tree::leaf(6),
                    Tree::build(7, vec![Tree::leaf(4), Tree::leaf(9)]),
                    Tree::leaf(10),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_values(tree: &Tree<i64>, id: NodeId) -> Vec<i64> {
        tree[id]
            .children()
            .iter()
            .map(|child| *tree.value(*child))
            .collect()
    }

    #[test]
    fn test_leaf_has_no_parent_or_children() {
        let tree = Tree::leaf(5);
        assert_eq!(tree.node_count(), 1);
        assert!(tree[tree.root()].is_leaf());
        assert_eq!(tree[tree.root()].parent(), None);
    }

    #[test]
    fn test_build_preserves_child_order() {
        let tree = reference_tree();
        assert_eq!(tree.node_count(), 10);
        assert_eq!(child_values(&tree, tree.root()), vec![3, 2]);

        let two = tree[tree.root()].children()[1];
        assert_eq!(child_values(&tree, two), vec![6, 7, 10]);
    }

    #[test]
    fn test_build_sets_parent_links() {
        let tree = reference_tree();
        let root = tree.root();
        assert_eq!(tree[root].parent(), None);

        for id in (0..tree.node_count()).map(NodeId) {
            for child in tree[id].children() {
                assert_eq!(tree[*child].parent(), Some(id));
            }
        }
    }

    #[test]
    fn test_ancestors_and_depth() {
        let tree = reference_tree();
        let two = tree[tree.root()].children()[1];
        let seven = tree[two].children()[1];
        let four = tree[seven].children()[0];

        let chain: Vec<i64> = tree.ancestors(four).map(|id| *tree.value(id)).collect();
        assert_eq!(chain, vec![7, 2, 1]);
        assert_eq!(tree.depth(four), 3);
        assert_eq!(tree.depth(tree.root()), 0);
    }

    #[test]
    fn test_equal_values_are_distinct_nodes() {
        let tree = reference_tree();
        let fours: Vec<NodeId> = (0..tree.node_count())
            .map(NodeId)
            .filter(|id| *tree.value(*id) == 4)
            .collect();
        assert_eq!(fours.len(), 2);
        assert_ne!(tree[fours[0]].parent(), tree[fours[1]].parent());
    }

    #[test]
    fn test_get_out_of_range() {
        let tree = Tree::leaf(1);
        assert!(tree.get(NodeId(3)).is_none());
    }
}
