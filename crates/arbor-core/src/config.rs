//! Tree description files
//!
//! A tree can be described in TOML (or JSON, chosen by the `.json`
//! extension) as a root id plus a table of nodes keyed by id:
//!
//! ```toml
//! root = "a"
//!
//! [nodes.a]
//! value = 1
//! children = ["b", "c"]
//!
//! [nodes.b]
//! value = 3
//!
//! [nodes.c]
//! value = 2
//! ```
//!
//! Nodes without `children` are leaves. A child listed under two parents, a
//! cycle, or a node unreachable from the root is a structural violation.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArborError, Result};
use crate::tree::{NodeId, Tree, TreeBuilder};

/// On-disk tree description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeFile {
    /// Id of the root node
    pub root: String,

    /// Nodes keyed by id
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeEntry>,
}

/// A single node in a tree description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub value: i64,

    /// Child ids in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl TreeFile {
    /// Load a description, parsing JSON for `.json` files and TOML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "load_tree_file");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ArborError::Other(e.to_string()))
    }

    /// Assemble the described tree
    pub fn to_tree(&self) -> Result<Tree<i64>> {
        let mut builder = TreeBuilder::new();
        let ids: HashMap<&str, NodeId> = self
            .nodes
            .iter()
            .map(|(key, entry)| (key.as_str(), builder.add(entry.value)))
            .collect();

        let lookup = |key: &str, context: &str| {
            ids.get(key)
                .copied()
                .ok_or_else(|| ArborError::not_found(context, key))
        };

        for (key, entry) in &self.nodes {
            let parent = lookup(key.as_str(), "node")?;
            for child in &entry.children {
                let child_id = lookup(child.as_str(), "child node")?;
                builder.attach(parent, child_id).map_err(|err| match err {
                    ArborError::StructuralViolation { reason } => ArborError::StructuralViolation {
                        reason: format!("{reason} (nodes '{key}' -> '{child}')"),
                    },
                    other => other,
                })?;
            }
        }

        let root = lookup(self.root.as_str(), "root node")?;
        builder.finish(root)
    }

    /// Describe an existing tree, naming nodes `n0`, `n1`, ... by arena index
    pub fn from_tree(tree: &Tree<i64>) -> Self {
        let key = |id: NodeId| format!("n{}", id.index());
        let mut nodes = BTreeMap::new();
        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            let node = &tree[id];
            nodes.insert(
                key(id),
                NodeEntry {
                    value: *node.value(),
                    children: node.children().iter().map(|child| key(*child)).collect(),
                },
            );
            stack.extend_from_slice(node.children());
        }

        Self {
            root: key(tree.root()),
            nodes,
        }
    }
}
