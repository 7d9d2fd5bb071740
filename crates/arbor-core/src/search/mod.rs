//! Heuristic leaf search
//!
//! Two strategies locate a leaf whose value equals a target and return the
//! root-to-leaf path:
//! - `best_first`: one frontier, re-sorted ascending before every pop
//! - `hill_climbing`: a stack of sorted sibling groups, descending into the
//!   smallest child before backtracking
//!
//! Only leaves are compared against the target. An internal node holding
//! the target value is expanded, never matched, so a search for an interior
//! value finds nothing unless some leaf also holds it. This is long-standing
//! observable behavior; do not change it to match interior nodes.
//!
//! Ordering comes from a caller-supplied comparator. The `try_*` variants
//! accept a partial comparator and report `OrderingUnsupported` on the first
//! pair it cannot order. Finding no match is not an error: the path is empty.

mod best_first;
mod hill_climbing;
mod path;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArborError, Result};
use crate::tree::{NodeId, Tree};

/// Frontier discipline used by [`Tree::search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Global priority order over the whole frontier
    #[default]
    BestFirst,
    /// Greedy depth-first descent through sorted sibling groups
    HillClimbing,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BestFirst, Strategy::HillClimbing];
}

impl FromStr for Strategy {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "best-first" | "best" => Ok(Strategy::BestFirst),
            "hill-climbing" | "hill" => Ok(Strategy::HillClimbing),
            other => Err(ArborError::invalid_value("strategy", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BestFirst => write!(f, "best-first"),
            Strategy::HillClimbing => write!(f, "hill-climbing"),
        }
    }
}

/// Counters gathered during one search, logged when it finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Internal nodes whose children were added to the frontier
    pub expanded: usize,
    /// Leaves popped that did not match
    pub discarded: usize,
    /// Largest frontier size seen
    pub peak_frontier: usize,
}

impl SearchStats {
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

/// Stable ascending sort of `ids` by value. Stops consulting `cmp` after its
/// first failure and returns that failure.
pub(crate) fn sort_ascending<T, E, F>(
    tree: &Tree<T>,
    ids: &mut [NodeId],
    cmp: &mut F,
) -> std::result::Result<(), E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let mut failure = None;
    ids.sort_by(|a, b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        match cmp(tree.value(*a), tree.value(*b)) {
            Ok(ordering) => ordering,
            Err(err) => {
                failure = Some(err);
                Ordering::Equal
            }
        }
    });
    failure.map_or(Ok(()), Err)
}

fn into_ok<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<T: PartialEq> Tree<T> {
    /// Locate the matching leaf, if any.
    ///
    /// A tree that is a single leaf matches itself when its value equals
    /// `target`; no comparison is made in that case.
    #[tracing::instrument(skip_all, fields(strategy = %strategy, nodes = self.node_count()))]
    fn find_leaf<E, F>(
        &self,
        strategy: Strategy,
        target: &T,
        mut cmp: F,
    ) -> std::result::Result<Option<NodeId>, E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        let root = self.root();
        let mut stats = SearchStats::default();

        let found = if self[root].is_leaf() {
            (self.value(root) == target).then_some(root)
        } else {
            match strategy {
                Strategy::BestFirst => best_first::run(self, target, &mut cmp, &mut stats)?,
                Strategy::HillClimbing => hill_climbing::run(self, target, &mut cmp, &mut stats)?,
            }
        };

        tracing::debug!(
            found = found.is_some(),
            expanded = stats.expanded,
            discarded = stats.discarded,
            peak_frontier = stats.peak_frontier,
            "search_finished"
        );
        Ok(found)
    }

    /// Root-to-leaf node ids of the match, or `None` when no leaf matches
    pub fn find_path_by<F>(&self, strategy: Strategy, target: &T, mut cmp: F) -> Option<Vec<NodeId>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        into_ok(self.find_leaf(strategy, target, |a: &T, b: &T| Ok(cmp(a, b))))
            .map(|leaf| self.root_path(leaf))
    }

    /// Like [`Tree::find_path_by`] with a partial comparator; `None` from
    /// `cmp` fails the search with `OrderingUnsupported`.
    pub fn try_find_path_by<F>(
        &self,
        strategy: Strategy,
        target: &T,
        mut cmp: F,
    ) -> Result<Option<Vec<NodeId>>>
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        let leaf = self.find_leaf(strategy, target, |a: &T, b: &T| {
            cmp(a, b).ok_or_else(|| {
                ArborError::ordering_unsupported(format!(
                    "{} comparator returned no ordering",
                    strategy
                ))
            })
        })?;
        Ok(leaf.map(|leaf| self.root_path(leaf)))
    }
}

impl<T: PartialEq + Clone> Tree<T> {
    /// Values along the path to the matching leaf; empty when nothing matches
    pub fn search_by<F>(&self, strategy: Strategy, target: &T, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.find_path_by(strategy, target, cmp)
            .map(|path| self.path_values(&path))
            .unwrap_or_default()
    }

    pub fn try_search_by<F>(&self, strategy: Strategy, target: &T, cmp: F) -> Result<Vec<T>>
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        Ok(self
            .try_find_path_by(strategy, target, cmp)?
            .map(|path| self.path_values(&path))
            .unwrap_or_default())
    }

    pub fn best_first_search_by<F>(&self, target: &T, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.search_by(Strategy::BestFirst, target, cmp)
    }

    pub fn hill_climbing_search_by<F>(&self, target: &T, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.search_by(Strategy::HillClimbing, target, cmp)
    }

    pub fn try_best_first_search_by<F>(&self, target: &T, cmp: F) -> Result<Vec<T>>
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        self.try_search_by(Strategy::BestFirst, target, cmp)
    }

    pub fn try_hill_climbing_search_by<F>(&self, target: &T, cmp: F) -> Result<Vec<T>>
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        self.try_search_by(Strategy::HillClimbing, target, cmp)
    }
}

impl<T: PartialOrd + Clone> Tree<T> {
    /// Search using the values' own partial order, e.g. for `f64` trees
    pub fn try_search_partial(&self, strategy: Strategy, target: &T) -> Result<Vec<T>> {
        self.try_search_by(strategy, target, T::partial_cmp)
    }
}

impl<T: Ord + Clone> Tree<T> {
    pub fn search(&self, strategy: Strategy, target: &T) -> Vec<T> {
        self.search_by(strategy, target, T::cmp)
    }

    /// Path to the first matching leaf in ascending-value priority order.
    ///
    /// Children of expanded nodes join one shared frontier that is stably
    /// re-sorted before every pop, so lower-valued subtrees are explored
    /// first regardless of depth.
    pub fn best_first_search(&self, target: &T) -> Vec<T> {
        self.search(Strategy::BestFirst, target)
    }

    /// Path to the first matching leaf in greedy smallest-child-first
    /// depth-first order.
    pub fn hill_climbing_search(&self, target: &T) -> Vec<T> {
        self.search(Strategy::HillClimbing, target)
    }
}
