//! GET operations for BstSet.
//!
//! This module contains the read operations: key search, membership tests and
//! access to the first and last keys.

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::compact_arena::NodeAllocator;
use crate::error::{BstSetError, KeyResult};
use crate::types::{BstSet, Cursor, Node, NodeId, Probe, Side, NULL_NODE};

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check if an equal key is stored in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.find_node(key) != NULL_NODE
    }

    /// Returns a reference to the stored key equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.key_of(self.find_node(key))
    }

    /// Cursor at the key equal to `key`, or the end position if absent.
    pub fn find(&self, key: &T) -> Cursor {
        Cursor::at(self.find_node(key))
    }

    /// Cursor at the key equal to `key`, or a `KeyNotFound` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let set: BstSet<_> = [5, 3, 8].into_iter().collect();
    /// let position = set.search(&3).unwrap();
    /// assert_eq!(set.key_at(position), Ok(&3));
    /// assert!(set.search(&4).is_err());
    /// ```
    pub fn search(&self, key: &T) -> KeyResult<Cursor> {
        match self.find_node(key) {
            NULL_NODE => Err(BstSetError::KeyNotFound),
            id => Ok(Cursor::at(id)),
        }
    }

    // ============================================================================
    // SEARCH HELPERS
    // ============================================================================

    /// Id of the node holding a key equal to `key`, or `NULL_NODE`.
    pub(crate) fn find_node(&self, key: &T) -> NodeId {
        match self.probe(key) {
            Probe::Found(id) => id,
            Probe::Vacant { .. } => NULL_NODE,
        }
    }

    /// Descend from the root comparing `key` with each node's key.
    pub(crate) fn probe(&self, key: &T) -> Probe {
        let mut parent = NULL_NODE;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(node) = self.node(current) {
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Probe::Found(current),
                Ordering::Less => {
                    parent = current;
                    side = Side::Left;
                    current = node.left;
                }
                Ordering::Greater => {
                    parent = current;
                    side = Side::Right;
                    current = node.right;
                }
            }
        }

        Probe::Vacant { parent, side }
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Returns the smallest key.
    pub fn first(&self) -> Option<&T> {
        self.key_of(self.minimum_from(self.root))
    }

    /// Returns the largest key.
    pub fn last(&self) -> Option<&T> {
        self.key_of(self.maximum_from(self.root))
    }
}
