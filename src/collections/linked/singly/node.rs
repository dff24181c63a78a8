use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box rather than alloc directly, because dereferencing a Box
// allows the value to be moved back out of the heap when a node is unlinked.

/// A copyable handle to a heap allocated [`Node`]. Handles don't own the node, the list they
/// belong to does.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` to the heap and returns a handle to it. This is the only place that singly
    /// linked nodes are allocated, so allocation failure aborts from here alone.
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back off of the heap, deallocating it.
    ///
    /// # Safety
    /// The handle (and all copies of it) must not be used after calling this method.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and, per the caller's
        // contract, is being reclaimed exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Handles only exist for live nodes owned by a list, which outlives the borrow.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Handles only exist for live nodes owned by a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Handles only exist for live nodes owned by a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
