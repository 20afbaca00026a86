//! Slot storage for tree nodes. Nodes refer to each other by [`Handle`] instead of by pointer so
//! a link can be rewritten (or temporarily pointed back at an ancestor) without any aliasing.

use std::num::NonZeroUsize;

/// Index of an occupied slot in an [`Arena`]. Stored off by one so `Option<Handle>` is the same
/// size as `Handle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Handle(NonZeroUsize);

impl Handle {
    fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::new(index + 1).expect("`Handle::from_index()` - index overflowed"))
    }

    fn to_index(self) -> usize {
        self.0.get() - 1
    }
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.to_index()] = Some(element);
                handle
            }
            None => {
                self.slots.push(Some(element));
                Handle::from_index(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()]
            .as_ref()
            .expect("`Arena::get()` - `handle` is invalid!")
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()]
            .as_mut()
            .expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Empties the slot and hands back what was in it. The handle may be reissued by a later
    /// [`alloc`](Self::alloc).
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()]
            .take()
            .expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
