//! Tree structure and navigation for BstSet.
//!
//! Minimum, maximum, successor and predecessor are computed purely by walking
//! child and parent links, so any node can be stepped from in O(depth) without
//! auxiliary state.

use crate::compact_arena::NodeAllocator;
use crate::error::{BstSetError, CursorResult};
use crate::types::{BstSet, Cursor, Node, NodeId, Side, NULL_NODE};

// ============================================================================
// SIZE QUERIES
// ============================================================================

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty set.
    ///
    /// Walks with an explicit stack so degenerate (list-shaped) trees are fine.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push((self.root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(node) = self.node(id) {
                for child in [node.left, node.right] {
                    if child != NULL_NODE {
                        stack.push((child, depth + 1));
                    }
                }
            }
        }
        height
    }

    // ============================================================================
    // NAVIGATION HELPERS
    // ============================================================================

    /// Leftmost node of the subtree rooted at `id`, or `NULL_NODE` if empty.
    pub(crate) fn minimum_from(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        loop {
            let left = self.left_id(id);
            if left == NULL_NODE {
                return id;
            }
            id = left;
        }
    }

    /// Rightmost node of the subtree rooted at `id`, or `NULL_NODE` if empty.
    pub(crate) fn maximum_from(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        loop {
            let right = self.right_id(id);
            if right == NULL_NODE {
                return id;
            }
            id = right;
        }
    }

    /// In-order successor of a live node, or `NULL_NODE` after the maximum.
    pub(crate) fn next_node(&self, id: NodeId) -> NodeId {
        let right = self.right_id(id);
        if right != NULL_NODE {
            return self.minimum_from(right);
        }
        // Climb until we leave a left subtree.
        let mut child = id;
        let mut parent = self.parent_id(id);
        while parent != NULL_NODE && self.right_id(parent) == child {
            child = parent;
            parent = self.parent_id(parent);
        }
        parent
    }

    /// In-order predecessor of a live node, or `NULL_NODE` before the minimum.
    pub(crate) fn prev_node(&self, id: NodeId) -> NodeId {
        let left = self.left_id(id);
        if left != NULL_NODE {
            return self.maximum_from(left);
        }
        let mut child = id;
        let mut parent = self.parent_id(id);
        while parent != NULL_NODE && self.left_id(parent) == child {
            child = parent;
            parent = self.parent_id(parent);
        }
        parent
    }

    /// Point the slot that holds `old` (a child of `parent`, or the root) at
    /// `new`. Does not touch `new`'s parent link.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.root = new;
        } else if self.left_id(parent) == old {
            self.set_left(parent, new);
        } else {
            self.set_right(parent, new);
        }
    }

    /// Hang `child` in the given slot of `parent`, or make it the root.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: NodeId) {
        self.set_parent(child, parent);
        match (parent, side) {
            (NULL_NODE, _) => self.root = child,
            (_, Side::Left) => self.set_left(parent, child),
            (_, Side::Right) => self.set_right(parent, child),
        }
    }

    /// Fails with `KeyNotFound` unless `position` names a live node.
    pub(crate) fn live_node(&self, position: Cursor) -> CursorResult<NodeId> {
        if self.arena.contains(position.node) {
            Ok(position.node)
        } else {
            Err(BstSetError::KeyNotFound)
        }
    }

    // ============================================================================
    // PUBLIC NAVIGATION
    // ============================================================================

    /// Cursor at the next key in order, or the end position after the last key.
    ///
    /// Fails with `KeyNotFound` if `position` is the end position or a node
    /// that has been erased.
    pub fn successor(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.next_node(id)))
    }

    /// Cursor at the previous key in order, or the end position before the
    /// first key.
    ///
    /// Fails with `KeyNotFound` if `position` is the end position or a node
    /// that has been erased.
    pub fn predecessor(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.prev_node(id)))
    }

    /// Smallest key in the subtree rooted at `position`.
    pub fn subtree_minimum(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.minimum_from(id)))
    }

    /// Largest key in the subtree rooted at `position`.
    pub fn subtree_maximum(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.maximum_from(id)))
    }

    // ============================================================================
    // STRUCTURE INTROSPECTION
    // ============================================================================

    /// Cursor at the root node, or the end position if the set is empty.
    pub fn root(&self) -> Cursor {
        Cursor::at(self.root)
    }

    /// Parent of `position`; the end position for the root.
    pub fn parent_of(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.parent_id(id)))
    }

    /// Left child of `position`; the end position if there is none.
    pub fn left_of(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.left_id(id)))
    }

    /// Right child of `position`; the end position if there is none.
    pub fn right_of(&self, position: Cursor) -> CursorResult<Cursor> {
        let id = self.live_node(position)?;
        Ok(Cursor::at(self.right_id(id)))
    }
}
