use std::collections::VecDeque;

use crate::arena::Handle;
use crate::node::Link;
use crate::tree::OrderedTree;

impl<K, V> OrderedTree<K, V> {
    /// Keys in pre-order (node, left, right), walked with an explicit stack.
    ///
    /// Keys are recorded on the way down each left spine; popping a node moves on to its right
    /// subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut stack = Vec::new();
        let mut keys = Vec::with_capacity(self.size());
        let mut link = self.root;

        loop {
            while let Some(handle) = link {
                let node = self.nodes.get(handle);
                keys.push(&node.key);
                stack.push(handle);
                link = node.left;
            }
            match stack.pop() {
                Some(handle) => link = self.nodes.get(handle).right,
                None => return keys,
            }
        }
    }

    /// Keys in ascending order, walked with an explicit stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [(5, ()), (3, ()), (8, ())].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order(), [&3, &5, &8]);
    /// ```
    pub fn in_order(&self) -> Vec<&K> {
        let mut stack = Vec::new();
        let mut keys = Vec::with_capacity(self.size());
        let mut link = self.root;

        loop {
            while let Some(handle) = link {
                stack.push(handle);
                link = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else {
                return keys;
            };
            let node = self.nodes.get(handle);
            keys.push(&node.key);
            link = node.right;
        }
    }

    /// Keys in post-order (left, right, node), walked with an explicit stack.
    ///
    /// A popped node whose right subtree has not been walked yet goes back on the stack. The last
    /// emitted node tells the two cases apart: if it is the right child, the subtree is done.
    pub fn post_order(&self) -> Vec<&K> {
        let mut stack = Vec::new();
        let mut keys = Vec::with_capacity(self.size());
        let mut previous: Link = None;
        let mut link = self.root;

        loop {
            while let Some(handle) = link {
                stack.push(handle);
                link = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else {
                return keys;
            };
            let node = self.nodes.get(handle);
            if node.right.is_none() || node.right == previous {
                keys.push(&node.key);
                previous = Some(handle);
            } else {
                stack.push(handle);
                link = node.right;
            }
        }
    }

    /// Keys grouped by depth, root first. Each level lists its keys left to right.
    pub fn level_order(&self) -> Vec<Vec<&K>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<Handle> = self.root.into_iter().collect();

        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(handle) = queue.pop_front() else {
                    break;
                };
                let node = self.nodes.get(handle);
                level.push(&node.key);
                queue.extend(node.left);
                queue.extend(node.right);
            }
            levels.push(level);
        }

        levels
    }
}
