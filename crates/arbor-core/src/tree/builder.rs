//! Id-based tree assembly for shapes that come from data

use super::{NodeId, Tree, TreeNode};
use crate::bail_structural;
use crate::error::{ArborError, Result};

/// Assembles a [`Tree`] from loose nodes and parent/child links.
///
/// Unlike [`Tree::build`], nothing here is enforced by ownership, so every
/// link is checked: a node may gain at most one parent and may never become
/// its own ancestor.
#[derive(Debug)]
pub struct TreeBuilder<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeBuilder<T> {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    /// Add an unattached node and return its id
    pub fn add(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(value));
        id
    }

    /// Append `child` to `parent`'s children.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;

        if parent == child {
            bail_structural!("node {} cannot be its own child", child);
        }
        if let Some(existing) = self.nodes[child.0].parent {
            bail_structural!(
                "node {} already has parent {}, cannot attach to {}",
                child,
                existing,
                parent
            );
        }
        if self.is_ancestor(child, parent) {
            bail_structural!(
                "attaching {} under {} would create a cycle",
                child,
                parent
            );
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Freeze the builder into a tree rooted at `root`.
    ///
    /// Fails if `root` is attached under another node or if any added node is
    /// not reachable from `root`.
    pub fn finish(self, root: NodeId) -> Result<Tree<T>> {
        self.check(root)?;

        if let Some(parent) = self.nodes[root.0].parent {
            bail_structural!("root {} is attached under {}", root, parent);
        }

        let reachable = self.count_reachable(root);
        if reachable != self.nodes.len() {
            bail_structural!(
                "{} of {} nodes are not reachable from root {}",
                self.nodes.len() - reachable,
                self.nodes.len(),
                root
            );
        }

        tracing::trace!(nodes = self.nodes.len(), root = %root, "tree_built");
        Ok(Tree::from_parts(self.nodes, root))
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ArborError::UnknownNode { id: id.0 })
        }
    }

    /// Whether `candidate` is `id` or one of its ancestors
    fn is_ancestor(&self, candidate: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == candidate {
                return true;
            }
            current = self.nodes[node.0].parent;
        }
        false
    }

    fn count_reachable(&self, root: NodeId) -> usize {
        let mut stack = vec![root];
        let mut count = 0;
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend_from_slice(&self.nodes[id.0].children);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assembles_tree() {
        let mut builder = TreeBuilder::new();
        let root = builder.add("root");
        let left = builder.add("left");
        let right = builder.add("right");
        builder.attach(root, left).unwrap();
        builder.attach(root, right).unwrap();

        let tree = builder.finish(root).unwrap();
        assert_eq!(tree.root(), root);
        assert_eq!(tree[root].children(), &[left, right]);
        assert_eq!(tree[right].parent(), Some(root));
    }

    #[test]
    fn test_second_parent_is_rejected() {
        let mut builder = TreeBuilder::new();
        let a = builder.add(1);
        let b = builder.add(2);
        let shared = builder.add(3);
        builder.attach(a, shared).unwrap();

        let err = builder.attach(b, shared).unwrap_err();
        assert!(matches!(err, ArborError::StructuralViolation { .. }));
        assert!(err.to_string().contains("already has parent"));
    }

    #[test]
    fn test_self_attachment_is_rejected() {
        let mut builder = TreeBuilder::new();
        let a = builder.add(1);
        let err = builder.attach(a, a).unwrap_err();
        assert!(matches!(err, ArborError::StructuralViolation { .. }));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let mut builder = TreeBuilder::new();
        let a = builder.add(1);
        let b = builder.add(2);
        let c = builder.add(3);
        builder.attach(a, b).unwrap();
        builder.attach(b, c).unwrap();

        let err = builder.attach(c, a).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_unknown_node_is_rejected() {
        let mut builder = TreeBuilder::new();
        let a = builder.add(1);
        let err = builder.attach(a, NodeId(7)).unwrap_err();
        assert!(matches!(err, ArborError::UnknownNode { id: 7 }));
    }

    #[test]
    fn test_unreachable_nodes_are_rejected() {
        let mut builder = TreeBuilder::new();
        let root = builder.add(1);
        let _stray = builder.add(2);

        let err = builder.finish(root).unwrap_err();
        assert!(err.to_string().contains("not reachable"));
    }

    #[test]
    fn test_attached_root_is_rejected() {
        let mut builder = TreeBuilder::new();
        let a = builder.add(1);
        let b = builder.add(2);
        builder.attach(a, b).unwrap();

        let err = builder.finish(b).unwrap_err();
        assert!(err.to_string().contains("attached under"));
    }
}
