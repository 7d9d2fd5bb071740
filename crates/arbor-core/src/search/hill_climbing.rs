//! Hill-climbing leaf search over a stack of sorted sibling groups

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{sort_ascending, SearchStats};
use crate::tree::{NodeId, Tree};

fn sorted_children<T, E, F>(tree: &Tree<T>, id: NodeId, cmp: &mut F) -> Result<VecDeque<NodeId>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut group: Vec<NodeId> = tree[id].children().to_vec();
    sort_ascending(tree, &mut group, cmp)?;
    Ok(group.into())
}

/// Descend greedily into the smallest unvisited child.
///
/// Each group on the stack holds one node's children in ascending order. The
/// top group is consumed front first; expanding a node pushes its own sorted
/// children, which are exhausted before any remaining sibling lower in the
/// stack is considered.
pub(super) fn run<T, E, F>(
    tree: &Tree<T>,
    target: &T,
    cmp: &mut F,
    stats: &mut SearchStats,
) -> Result<Option<NodeId>, E>
where
    T: PartialEq,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut groups = vec![sorted_children(tree, tree.root(), cmp)?];
    stats.observe_frontier(groups[0].len());

    while let Some(group) = groups.last_mut() {
        let Some(current) = group.pop_front() else {
            groups.pop();
            continue;
        };
        if group.is_empty() {
            groups.pop();
        }

        let node = &tree[current];
        if !node.is_leaf() {
            stats.expanded += 1;
            groups.push(sorted_children(tree, current, cmp)?);
            stats.observe_frontier(groups.iter().map(VecDeque::len).sum());
        } else if node.value() == target {
            tracing::trace!(leaf = %current, "leaf_matched");
            return Ok(Some(current));
        } else {
            stats.discarded += 1;
        }
    }

    Ok(None)
}
