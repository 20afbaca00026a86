use crate::node::Link;
use crate::tree::OrderedTree;

/// When a node is visited relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthFirst {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Visits keys in ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl<K, V> OrderedTree<K, V> {
    /// Recursively visits every entry in the given order.
    ///
    /// Recursion depth equals the tree's height, which for a degenerate tree is its size. Prefer
    /// the stack-based or threaded traversals for trees built from sorted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{DepthFirst, OrderedTree};
    ///
    /// let tree: OrderedTree<_, _> = [(2, "two"), (1, "one"), (3, "three")].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(DepthFirst::PreOrder, |_, value| seen.push(*value));
    /// assert_eq!(seen, ["two", "one", "three"]);
    /// ```
    pub fn walk<F>(&self, order: DepthFirst, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        self.walk_from(self.root, order, &mut visit);
    }

    fn walk_from<F>(&self, link: Link, order: DepthFirst, visit: &mut F)
    where
        F: FnMut(&K, &V),
    {
        let Some(handle) = link else {
            return;
        };
        let node = self.nodes.get(handle);

        if order == DepthFirst::PreOrder {
            visit(&node.key, &node.value);
        }
        self.walk_from(node.left, order, visit);
        if order == DepthFirst::InOrder {
            visit(&node.key, &node.value);
        }
        self.walk_from(node.right, order, visit);
        if order == DepthFirst::PostOrder {
            visit(&node.key, &node.value);
        }
    }
}
