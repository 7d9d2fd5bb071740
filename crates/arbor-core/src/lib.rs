//! Arbor Core Library
//!
//! An immutable arena tree with preorder and level-order traversal, plus
//! best-first and hill-climbing leaf search that returns the root-to-leaf
//! path of the first matching leaf.
//!
//! ```
//! use arbor_core::tree::Tree;
//!
//! let tree = Tree::build(1, vec![
//!     Tree::build(3, vec![Tree::leaf(4), Tree::leaf(5)]),
//!     Tree::build(2, vec![Tree::leaf(6), Tree::leaf(4)]),
//! ]);
//!
//! let mut seen = vec![];
//! tree.depth_first(&mut |v: &i32| seen.push(*v));
//! assert_eq!(seen, vec![1, 3, 4, 5, 2, 6, 4]);
//! assert_eq!(tree.best_first_search(&4), vec![1, 2, 4]);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod search;
pub mod traversal;
pub mod tree;

pub use error::{ArborError, Result};
pub use search::Strategy;
pub use traversal::Visitor;
pub use tree::{NodeId, Tree, TreeBuilder, TreeNode};
