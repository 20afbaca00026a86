use std::mem;

use tracing::trace;

use crate::arena::Handle;
use crate::node::Link;
use crate::tree::OrderedTree;

/// How we arrived at a node that has a left subtree.
enum Arrival {
    /// Coming down from the parent. The predecessor has just been threaded back to the node.
    Descending,
    /// Coming back up the thread after the left subtree was walked. The thread has been removed.
    Returning,
}

impl<K, V> OrderedTree<K, V> {
    /// Keys in pre-order, walked without a stack by threading predecessors back to their
    /// in-order successors.
    pub fn pre_order_threaded(&mut self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.size());
        let mut link = self.root;

        while let Some(current) = link {
            link = match self.links(current) {
                (None, right) => {
                    visited.push(current);
                    right
                }
                (Some(left), right) => match self.toggle_thread(current, left) {
                    Arrival::Descending => {
                        visited.push(current);
                        Some(left)
                    }
                    Arrival::Returning => right,
                },
            };
        }

        self.keys_of(visited)
    }

    /// Keys in ascending order, walked without a stack by threading predecessors back to their
    /// in-order successors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_, _> = [(5, ()), (3, ()), (8, ()), (4, ())].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order_threaded(), [&3, &4, &5, &8]);
    ///
    /// // The threads are gone again.
    /// assert_eq!(tree.pre_order(), [&5, &3, &4, &8]);
    /// assert!(tree.is_valid_bst());
    /// ```
    pub fn in_order_threaded(&mut self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.size());
        let mut link = self.root;

        while let Some(current) = link {
            link = match self.links(current) {
                (None, right) => {
                    visited.push(current);
                    right
                }
                (Some(left), right) => match self.toggle_thread(current, left) {
                    Arrival::Descending => Some(left),
                    Arrival::Returning => {
                        visited.push(current);
                        right
                    }
                },
            };
        }

        self.keys_of(visited)
    }

    /// Keys in post-order, walked without a stack.
    ///
    /// Each time a thread is removed, the right spine of the node's left subtree is emitted
    /// bottom-up. The spine is reversed in place to walk it backwards and then reversed again. The
    /// root's own right spine goes last.
    pub fn post_order_threaded(&mut self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.size());
        let mut link = self.root;

        while let Some(current) = link {
            link = match self.links(current) {
                (None, right) => right,
                (Some(left), right) => match self.toggle_thread(current, left) {
                    Arrival::Descending => Some(left),
                    Arrival::Returning => {
                        self.visit_spine_backwards(left, &mut visited);
                        right
                    }
                },
            };
        }
        if let Some(root) = self.root {
            self.visit_spine_backwards(root, &mut visited);
        }

        self.keys_of(visited)
    }

    /// Finds the in-order predecessor of `current` (the rightmost node under `left`) and either
    /// threads its empty right link back to `current` or, if that thread already exists, removes
    /// it.
    fn toggle_thread(&mut self, current: Handle, left: Handle) -> Arrival {
        let mut predecessor = left;
        while let Some(next) = self.nodes.get(predecessor).right {
            if next == current {
                break;
            }
            predecessor = next;
        }

        let thread = &mut self.nodes.get_mut(predecessor).right;
        match thread.take() {
            None => {
                *thread = Some(current);
                trace!("threaded predecessor back to its successor");
                Arrival::Descending
            }
            Some(successor) => {
                debug_assert_eq!(successor, current, "predecessor threaded to the wrong node");
                trace!("removed thread");
                Arrival::Returning
            }
        }
    }

    /// Pushes the chain of right links starting at `head` onto `visited`, deepest node first,
    /// leaving the chain as it was found.
    fn visit_spine_backwards(&mut self, head: Handle, visited: &mut Vec<Handle>) {
        let tail = self.reverse_spine(head);

        let mut link = Some(tail);
        while let Some(handle) = link {
            visited.push(handle);
            link = self.nodes.get(handle).right;
        }

        self.reverse_spine(tail);
    }

    /// Reverses the chain of right links starting at `head` and returns the old tail, which is
    /// now the head.
    fn reverse_spine(&mut self, head: Handle) -> Handle {
        let mut previous: Link = None;
        let mut current = head;
        loop {
            let next = mem::replace(&mut self.nodes.get_mut(current).right, previous);
            previous = Some(current);
            match next {
                Some(next) => current = next,
                None => return current,
            }
        }
    }
}
