//! Depth-first (preorder) and breadth-first (level order) traversal
//!
//! Both walks visit every node of the subtree exactly once, run to
//! completion before returning, and produce the same order on every call.
//! The visitor only ever sees shared references, so it cannot alter the tree
//! it is walking.

use std::collections::VecDeque;

use crate::tree::{NodeId, Tree};

/// Receives each visited value in traversal order.
///
/// Any `FnMut(&T)` closure is a visitor. Implement this directly for sinks
/// that need to carry state of their own.
pub trait Visitor<T> {
    fn visit(&mut self, value: &T);
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, value: &T) {
        self(value)
    }
}

impl<T> Tree<T> {
    /// Preorder walk from the root
    pub fn depth_first<V: Visitor<T>>(&self, visitor: &mut V) {
        self.depth_first_from(self.root(), visitor);
    }

    /// Preorder walk of the subtree under `start`: a node is visited before
    /// its descendants, and children in insertion order.
    pub fn depth_first_from<V: Visitor<T>>(&self, start: NodeId, visitor: &mut V) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self[id];
            visitor.visit(node.value());
            // Reversed so the first child is popped next
            stack.extend(node.children().iter().rev());
        }
    }

    /// Level-order walk from the root
    pub fn breadth_first<V: Visitor<T>>(&self, visitor: &mut V) {
        self.breadth_first_from(self.root(), visitor);
    }

    /// Level-order walk of the subtree under `start`: every node at depth `d`
    /// is visited before any node at depth `d + 1`.
    pub fn breadth_first_from<V: Visitor<T>>(&self, start: NodeId, visitor: &mut V) {
        visitor.visit(self.value(start));

        let mut queue: VecDeque<NodeId> = self[start].children().iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self[id];
            visitor.visit(node.value());
            queue.extend(node.children().iter().copied());
        }
    }
}
