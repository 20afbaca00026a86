//! This crate exposes an ordered map built on a plain, mutable Binary Search Tree (BST) along
//! with several ways of walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. It is made of `Node`s, each storing a key, a value, and up to two child
//! `Node`s. The invariants that make it useful are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! Lookups, inserts and deletes therefore take `O(height)`. This tree never rebalances, so its
//! height depends on insertion order: random keys give roughly `O(lg N)`, sorted keys give a
//! chain of height `N`.
//!
//! ## Traversals
//!
//! The [`traversal`] module lists the orders a tree can be walked in (pre-order, in-order,
//! post-order and level-order) and the algorithms behind them, including Morris traversals that
//! need no auxiliary stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for (key, value) in [(5, 50), (3, 30), (8, 80), (1, 10), (4, 40), (7, 70), (9, 90)] {
//!     tree.insert(key, value);
//! }
//!
//! assert_eq!(tree.minimum(), Ok(&1));
//! assert_eq!(tree.maximum(), Ok(&9));
//! assert_eq!(tree.in_order(), [&1, &3, &4, &5, &7, &8, &9]);
//!
//! tree.remove(&5);
//! assert_eq!(tree.in_order_threaded(), [&1, &3, &4, &7, &8, &9]);
//! assert_eq!(tree.search(&5), None);
//!
//! tree.remove_min();
//! assert_eq!(tree.minimum(), Ok(&3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
mod iter;
mod node;
mod tree;

pub mod traversal;


pub use error::EmptyTreeError;
pub use iter::Iter;
pub use traversal::DepthFirst;
pub use tree::OrderedTree;
