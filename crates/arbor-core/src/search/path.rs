//! Path reconstruction through parent back-references

use crate::tree::{NodeId, Tree};

impl<T> Tree<T> {
    /// Node ids from the root down to `id`, both inclusive
    pub fn root_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = std::iter::once(id).chain(self.ancestors(id)).collect();
        path.reverse();
        path
    }

    /// Clone the values held along `path`
    pub fn path_values(&self, path: &[NodeId]) -> Vec<T>
    where
        T: Clone,
    {
        path.iter().map(|id| self.value(*id).clone()).collect()
    }
}
