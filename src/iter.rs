use std::iter::FusedIterator;

use crate::arena::Handle;
use crate::node::Link;
use crate::tree::OrderedTree;

/// A lazy, ascending iterator over the entries of an [`OrderedTree`]. Created by
/// [`OrderedTree::iter`].
///
/// It holds the left spine of the part of the tree it has not yet visited, so it uses space
/// proportional to the tree's height.
pub struct Iter<'a, K, V> {
    tree: &'a OrderedTree<K, V>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a OrderedTree<K, V>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.size(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.tree.nodes.get(handle).left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.nodes.get(handle);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
