//! A mutable, unbalanced BST. Nodes are stored in an arena and linked by handle so subtrees can
//! be swapped out (and temporarily threaded, see [`traversal`][crate::traversal]) safely.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.search(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.search(&1), Some(&3));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(3));
//! assert_eq!(tree.search(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::arena::{Arena, Handle};
use crate::error::EmptyTreeError;
use crate::iter::Iter;
use crate::node::{Link, Node, Side};

/// An ordered map from `K` to `V` backed by a plain (never rebalanced) binary search tree.
///
/// Every key in a node's left subtree is smaller than the node's key and every key in its right
/// subtree is larger. Inserting keys in sorted order therefore degrades the tree to a chain.
#[derive(Clone)]
pub struct OrderedTree<K, V> {
    pub(crate) root: Link,
    pub(crate) nodes: Arena<Node<K, V>>,
    count: usize,
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Generates a new, empty `OrderedTree`.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: Arena::new(),
            count: 0,
        }
    }

    /// Generates a new, empty `OrderedTree` with room for `capacity` nodes before it has to
    /// reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            nodes: Arena::with_capacity(capacity),
            count: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.count = 0;
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value and hands back the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.search(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let (root, replaced) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        self.check_count();
        replaced
    }

    /// Potentially finds the value associated with the given key. If no node has the key, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.locate(key).map(|handle| &self.nodes.get(handle).value)
    }

    /// Like [`search`](Self::search) but allows the value to be changed in place.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let handle = self.locate(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Whether a node with the given key exists.
    pub fn contain(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).is_some()
    }

    /// Removes the node with the given key and returns its value. If the tree has no node with the
    /// key, nothing happens.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest key of its
    /// right subtree), which is first spliced out of that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some('b'));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.in_order(), [&1, &3]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        self.check_count();
        removed
    }

    /// Removes the node with the smallest key. Does nothing on an empty tree.
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        self.remove_extreme(Side::Left)
    }

    /// Removes the node with the largest key. Does nothing on an empty tree.
    pub fn remove_max(&mut self) -> Option<(K, V)> {
        self.remove_extreme(Side::Right)
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if there are no keys.
    pub fn minimum(&self) -> Result<&K, EmptyTreeError> {
        self.extreme(Side::Left)
            .map(|node| &node.key)
            .ok_or_else(|| EmptyTreeError::new("minimum"))
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if there are no keys.
    pub fn maximum(&self) -> Result<&K, EmptyTreeError> {
        self.extreme(Side::Right)
            .map(|node| &node.key)
            .ok_or_else(|| EmptyTreeError::new("maximum"))
    }

    /// Walks the tree in order with an explicit stack and checks that every key is strictly
    /// greater than the one visited before it.
    pub fn is_valid_bst(&self) -> bool
    where
        K: Ord,
    {
        let mut stack = Vec::new();
        let mut previous: Option<&K> = None;
        let mut link = self.root;

        loop {
            while let Some(handle) = link {
                stack.push(handle);
                link = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else {
                return true;
            };
            let node = self.nodes.get(handle);
            if previous.is_some_and(|previous| node.key <= *previous) {
                return false;
            }
            previous = Some(&node.key);
            link = node.right;
        }
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub(crate) fn links(&self, handle: Handle) -> (Link, Link) {
        let node = self.nodes.get(handle);
        (node.left, node.right)
    }

    pub(crate) fn keys_of(&self, handles: Vec<Handle>) -> Vec<&K> {
        handles
            .into_iter()
            .map(|handle| &self.nodes.get(handle).key)
            .collect()
    }

    fn locate(&self, key: &K) -> Link
    where
        K: Ord,
    {
        let mut link = self.root;
        while let Some(handle) = link {
            let node = self.nodes.get(handle);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn extreme(&self, side: Side) -> Option<&Node<K, V>> {
        let mut node = self.nodes.get(self.root?);
        while let Some(child) = node.child(side) {
            node = self.nodes.get(child);
        }
        Some(node)
    }

    /// Inserts into the subtree at `link` and returns the subtree's (possibly new) root.
    fn insert_at(&mut self, link: Link, key: K, value: V) -> (Handle, Option<V>)
    where
        K: Ord,
    {
        let Some(handle) = link else {
            self.count += 1;
            trace!(size = self.count, "inserted new node");
            return (self.nodes.alloc(Node::new(key, value)), None);
        };

        let node = self.nodes.get_mut(handle);
        let side = match key.cmp(&node.key) {
            Ordering::Less => Side::Left,
            Ordering::Equal => {
                trace!("overwrote value of existing key");
                return (handle, Some(mem::replace(&mut node.value, value)));
            }
            Ordering::Greater => Side::Right,
        };
        let child = node.child(side);

        let (child, replaced) = self.insert_at(child, key, value);
        *self.nodes.get_mut(handle).child_mut(side) = Some(child);
        (handle, replaced)
    }

    /// Removes `key` from the subtree at `link` and returns what should take the subtree's place.
    /// A missing key gives back `link` untouched.
    fn remove_at(&mut self, link: Link, key: &K) -> (Link, Option<V>)
    where
        K: Ord,
    {
        let Some(handle) = link else {
            return (None, None);
        };

        let node = self.nodes.get(handle);
        let side = match key.cmp(&node.key) {
            Ordering::Less => Side::Left,
            Ordering::Equal => {
                let replacement = self.replacement_for(handle);
                let removed = self.destroy(handle);
                return (replacement, Some(removed.value));
            }
            Ordering::Greater => Side::Right,
        };
        let child = node.child(side);

        let (child, removed) = self.remove_at(child, key);
        *self.nodes.get_mut(handle).child_mut(side) = child;
        (Some(handle), removed)
    }

    /// Works out which subtree takes the place of `handle` once it is gone. With two children the
    /// successor is detached from the right subtree and adopts both of `handle`'s subtrees.
    fn replacement_for(&mut self, handle: Handle) -> Link {
        match self.links(handle) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => {
                let (rest, successor) = self.detach_extreme(right, Side::Left);
                debug!("promoting in-order successor into a two-child slot");

                let successor_node = self.nodes.get_mut(successor);
                successor_node.left = Some(left);
                successor_node.right = rest;
                Some(successor)
            }
        }
    }

    /// Splices the outermost node on `side` out of the subtree rooted at `handle`. Returns the
    /// subtree's new root and the detached node, whose children have been handed to its parent.
    fn detach_extreme(&mut self, handle: Handle, side: Side) -> (Link, Handle) {
        let node = self.nodes.get_mut(handle);
        match node.child(side) {
            None => {
                let rest = node.child_mut(side.opposite()).take();
                (rest, handle)
            }
            Some(child) => {
                let (rest, extreme) = self.detach_extreme(child, side);
                *self.nodes.get_mut(handle).child_mut(side) = rest;
                (Some(handle), extreme)
            }
        }
    }

    fn remove_extreme(&mut self, side: Side) -> Option<(K, V)> {
        let root = self.root?;
        let (rest, extreme) = self.detach_extreme(root, side);
        self.root = rest;

        let node = self.destroy(extreme);
        self.check_count();
        Some((node.key, node.value))
    }

    /// Frees a node that is no longer linked from anywhere in the tree.
    fn destroy(&mut self, handle: Handle) -> Node<K, V> {
        self.count -= 1;
        debug!(size = self.count, "removed node");
        self.nodes.take(handle)
    }

    fn check_count(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(
                self.count,
                self.nodes.len(),
                "node count out of sync with the arena"
            );
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
