//! Best-first leaf search over a single globally sorted frontier

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{sort_ascending, SearchStats};
use crate::tree::{NodeId, Tree};

/// Pop the smallest node from the frontier until a matching leaf turns up.
///
/// The frontier starts as the root's children and is stably re-sorted before
/// every pop, so equal values keep their insertion order. Internal nodes are
/// replaced by their children; non-matching leaves are dropped.
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
    let mut frontier: VecDeque<NodeId> = tree[tree.root()].children().iter().copied().collect();

    loop {
        stats.observe_frontier(frontier.len());
        sort_ascending(tree, frontier.make_contiguous(), cmp)?;

        let Some(current) = frontier.pop_front() else {
            return Ok(None);
        };
        let node = &tree[current];

        if !node.is_leaf() {
            stats.expanded += 1;
            frontier.extend(node.children().iter().copied());
        } else if node.value() == target {
            tracing::trace!(leaf = %current, "leaf_matched");
            return Ok(Some(current));
        } else {
            stats.discarded += 1;
        }
    }
}
