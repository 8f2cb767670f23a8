//! Node construction and assignment.
//!
//! A node is a plain record: a key plus three links. It enforces neither the
//! search-tree order nor parent/child agreement; keeping those is the job of
//! the operations in `insert_operations` and `delete_operations`, which are the
//! only code that rewires links inside a live tree.

use crate::compact_arena::NodeAllocator;
use crate::types::{BstSet, Node, NodeId, NULL_NODE};

node_links!(parent, left, right);

impl<T> Node<T> {
    /// Builds a detached node that takes ownership of `key`.
    pub fn new(key: T) -> Self {
        Self {
            key,
            parent: NULL_NODE,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    /// Builds a detached node holding a copy of `key`.
    ///
    /// A panic from `T::clone` propagates before any node exists.
    pub fn from_ref(key: &T) -> Self
    where
        T: Clone,
    {
        Self::new(key.clone())
    }

    /// Builds a detached node whose key is constructed from `args`.
    ///
    /// ```
    /// use bstset::Node;
    ///
    /// let node: Node<String> = Node::emplace("abc");
    /// assert_eq!(node.key(), "abc");
    /// ```
    pub fn emplace<Args>(args: Args) -> Self
    where
        T: From<Args>,
    {
        Self::new(T::from(args))
    }

    /// Copies `other`'s key and all three links into `self`.
    ///
    /// The copy is shallow: the nodes `other` links to are not told about
    /// `self`. If cloning the key panics, the links have not been touched yet
    /// but the key may be partially overwritten.
    pub fn assign_from(&mut self, other: &Node<T>)
    where
        T: Clone,
    {
        self.key.clone_from(&other.key);
        self.parent = other.parent;
        self.left = other.left;
        self.right = other.right;
    }

    /// Moves `other`'s key and links into `self` and detaches `other`.
    ///
    /// `other` keeps a key in an unspecified state (currently the key `self`
    /// held before) and all of its links are reset.
    pub fn move_assign_from(&mut self, other: &mut Node<T>) {
        std::mem::swap(&mut self.key, &mut other.key);
        self.parent = other.parent;
        self.left = other.left;
        self.right = other.right;
        other.detach();
    }

    /// Clears all three links.
    pub(crate) fn detach(&mut self) {
        self.parent = NULL_NODE;
        self.left = NULL_NODE;
        self.right = NULL_NODE;
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn into_key(self) -> T {
        self.key
    }

    /// Parent id, or `NULL_NODE` for the root or a detached node.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn left(&self) -> NodeId {
        self.left
    }

    pub fn right(&self) -> NodeId {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left == NULL_NODE && self.right == NULL_NODE
    }

    pub fn child_count(&self) -> usize {
        usize::from(self.left != NULL_NODE) + usize::from(self.right != NULL_NODE)
    }
}

impl<T: Default> Default for Node<T> {
    /// A detached node with a default key. Only useful as a placeholder.
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Shared access to a live node.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Key of a live node.
    #[inline]
    pub(crate) fn key_of(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.key)
    }
}
