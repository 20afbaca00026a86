use thiserror::Error;

/// Returned when asking an empty [`OrderedTree`][crate::OrderedTree] for its smallest or largest
/// key. There is no such key to hand back.
///
/// # Examples
///
/// ```
/// use ordered_tree::{EmptyTreeError, OrderedTree};
///
/// let tree: OrderedTree<i32, i32> = OrderedTree::new();
///
/// let err = tree.minimum().unwrap_err();
/// assert_eq!(err, EmptyTreeError::new("minimum"));
/// assert_eq!(err.to_string(), "cannot find the minimum of an empty tree");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot find the {extremum} of an empty tree")]
pub struct EmptyTreeError {
    extremum: &'static str,
}

impl EmptyTreeError {
    /// Builds an error for the named query, e.g. `"minimum"`.
    pub fn new(extremum: &'static str) -> Self {
        Self { extremum }
    }

    /// Which query failed.
    pub fn extremum(&self) -> &'static str {
        self.extremum
    }
}
