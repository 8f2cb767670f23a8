//! DELETE operations for BstSet.
//!
//! Erasing a node rewires at most one splice beyond the node itself:
//!
//! 1. no children: the parent's slot is cleared (or the tree becomes empty);
//! 2. one child: the child takes the node's place;
//! 3. two children: the in-order successor (leftmost node of the right
//!    subtree, which has no left child) is spliced out of its position with
//!    case 1 or 2 and relinked into the erased node's position.
//!
//! Case 3 moves the successor node rather than its key, so no key is ever
//! moved or copied and every cursor other than one at the erased node stays
//! valid.

use crate::comparator::Comparator;
use crate::compact_arena::NodeAllocator;
use crate::error::{BstSetError, ModifyResult};
use crate::types::{BstSet, Cursor, Node, NodeId, NULL_NODE};

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Erase the key at `position` and return a cursor to the next key in
    /// order (or the end position).
    ///
    /// Fails with `InvalidCursor` if `position` is the end position or a node
    /// that was already erased; the set is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let mut set: BstSet<_> = [1, 2, 3].into_iter().collect();
    /// let next = set.erase(set.find(&2)).unwrap();
    /// assert_eq!(set.key_at(next), Ok(&3));
    /// assert!(set.erase(set.end()).is_err());
    /// ```
    pub fn erase(&mut self, position: Cursor) -> ModifyResult<Cursor> {
        if position.is_end() {
            return Err(BstSetError::invalid_cursor("erase", "the end position"));
        }
        if !self.arena.contains(position.node) {
            return Err(BstSetError::invalid_cursor("erase", "a node that is no longer in the set"));
        }
        let next = self.next_node(position.node);
        self.erase_node(position.node)?;
        Ok(Cursor::at(next))
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<T> {
        let id = self.minimum_from(self.root);
        self.erase_node(id).ok()
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<T> {
        let id = self.maximum_from(self.root);
        self.erase_node(id).ok()
    }

    /// Keep only the keys for which `keep` returns true, visiting in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.minimum_from(self.root);
        while let Some(key) = self.key_of(current) {
            let next = self.next_node(current);
            if !keep(key) {
                // Relinking never moves `next`, so it stays a valid position.
                if self.erase_node(current).is_err() {
                    break;
                }
            }
            current = next;
        }
    }

    /// Remove every key, returning each node to the allocator.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.deallocate(id) {
                for child in [node.left, node.right] {
                    if child != NULL_NODE {
                        stack.push(child);
                    }
                }
            }
        }
        self.root = NULL_NODE;
        self.len = 0;
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Unlink the live node `id`, free it and return its key.
    pub(crate) fn erase_node(&mut self, id: NodeId) -> ModifyResult<T> {
        let (parent, left, right) = match self.node(id) {
            Some(node) => (node.parent, node.left, node.right),
            None => return Err(BstSetError::KeyNotFound),
        };

        match (left, right) {
            (NULL_NODE, NULL_NODE) => self.replace_child(parent, id, NULL_NODE),
            (child, NULL_NODE) | (NULL_NODE, child) => {
                self.replace_child(parent, id, child);
                self.set_parent(child, parent);
            }
            _ => self.relink_successor(id, parent, left, right),
        }

        let node = self
            .arena
            .deallocate(id)
            .ok_or_else(|| BstSetError::arena_error("erase", "node slot vanished during unlink"))?;
        self.len -= 1;
        Ok(node.key)
    }

    /// Two-child case: move the successor node into `id`'s position.
    fn relink_successor(&mut self, id: NodeId, parent: NodeId, left: NodeId, right: NodeId) {
        let successor = self.minimum_from(right);

        if successor != right {
            // Splice the successor out; it has no left child.
            let successor_parent = self.parent_id(successor);
            let successor_right = self.right_id(successor);
            self.set_left(successor_parent, successor_right);
            self.set_parent(successor_right, successor_parent);

            self.set_right(successor, right);
            self.set_parent(right, successor);
        }

        self.set_left(successor, left);
        self.set_parent(left, successor);
        self.set_parent(successor, parent);
        self.replace_child(parent, id, successor);
    }
}

/// Frees node by node through the allocator; the walk uses an explicit stack.
impl<T, C, A: NodeAllocator<Node<T>>> Drop for BstSet<T, C, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Remove the key equal to `key` and return it.
    ///
    /// Fails with `KeyNotFound` if no such key exists; the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::{BstSet, BstSetError};
    ///
    /// let mut set: BstSet<_> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(set.remove(&3), Ok(3));
    /// assert_eq!(set.remove(&99), Err(BstSetError::KeyNotFound));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &T) -> ModifyResult<T> {
        match self.find_node(key) {
            NULL_NODE => Err(BstSetError::KeyNotFound),
            id => self.erase_node(id),
        }
    }

    /// Remove the key equal to `key`, if any.
    pub fn take(&mut self, key: &T) -> Option<T> {
        self.remove(key).ok()
    }
}
