//! The different orders in which an [`OrderedTree`][crate::OrderedTree] can be walked.
//!
//! Each order has more than one implementation:
//!
//! * [`walk`][crate::OrderedTree::walk] recurses and hands every entry to a closure.
//! * [`pre_order`][crate::OrderedTree::pre_order], [`in_order`][crate::OrderedTree::in_order],
//!   [`post_order`][crate::OrderedTree::post_order] and
//!   [`level_order`][crate::OrderedTree::level_order] use an explicit stack or queue.
//! * The `*_threaded` variants (Morris traversal) use no stack at all. They temporarily point
//!   the empty right link of each node's in-order predecessor back at the node, then put it back
//!   once the left subtree has been walked. Because they rewrite links they need `&mut self`;
//!   the tree is back in its original shape by the time they return.
//!
//! All implementations of the same order yield the same keys.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_, _> = [2, 1, 3].into_iter().map(|k| (k, ())).collect();
//!
//! assert_eq!(tree.post_order(), [&1, &3, &2]);
//! assert_eq!(tree.post_order_threaded(), [&1, &3, &2]);
//! assert_eq!(tree.level_order(), [vec![&2], vec![&1, &3]]);
//! ```

mod recursive;
mod stack;
mod threaded;

pub use recursive::DepthFirst;
