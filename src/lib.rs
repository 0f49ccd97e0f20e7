//! A self-balancing binary search tree (AVL tree) of unique keys.
//!
//! The heights of the two subtrees of every node differ by at most one,
//! which keeps insertion and lookup at O(log n). Inserting a key that is
//! already present leaves the tree unchanged.
//!
//! ```
//! use avltree::AvlTree;
//! let mut tree = AvlTree::new();
//! for key in [30, 10, 20, 10] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
//! assert_eq!(tree.find_max(), Some(&30));
//! assert_eq!(tree.sum_values(), 60);
//! ```
//!
//! Read-only operations in [`query`] and [`render`] take an explicit subtree
//! root, so they also apply to any node reachable through [`Node::left`] and
//! [`Node::right`].

mod node;
mod tree;

pub mod query;
pub mod render;

#[cfg(feature = "keygen")]
pub mod keys;

pub use node::Node;
pub use tree::{AvlTree, Iter};

#[cfg(test)]
mod tests;
