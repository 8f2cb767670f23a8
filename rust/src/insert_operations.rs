//! INSERT operations for BstSet.
//!
//! A new key always becomes a leaf: the descent stops at the empty child slot
//! where the key belongs, the allocator hands out a node, and the node is hung
//! in that slot with its parent link pointing back up. Equal keys are never
//! stored twice.

use std::fmt::Display;

use crate::comparator::Comparator;
use crate::compact_arena::NodeAllocator;
use crate::error::{BstSetError, ModifyResult};
use crate::types::{BstSet, Cursor, InsertResult, Node, NodeId, Probe, Side};

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Insert `key`, taking ownership of it.
    ///
    /// If an equal key is already present the set is unchanged, `key` is
    /// dropped and the result points at the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// let first = set.insert(4);
    /// assert!(first.inserted);
    ///
    /// let again = set.insert(4);
    /// assert!(!again.inserted);
    /// assert_eq!(again.position, first.position);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> InsertResult {
        match self.probe(&key) {
            Probe::Found(id) => InsertResult::existing(id),
            Probe::Vacant { parent, side } => {
                InsertResult::created(self.link_new_node(Node::new(key), parent, side))
            }
        }
    }

    /// Insert a copy of `key`. The key is only cloned when it is absent.
    pub fn insert_cloned(&mut self, key: &T) -> InsertResult
    where
        T: Clone,
    {
        match self.probe(key) {
            Probe::Found(id) => InsertResult::existing(id),
            Probe::Vacant { parent, side } => {
                InsertResult::created(self.link_new_node(Node::from_ref(key), parent, side))
            }
        }
    }

    /// Construct a key from `args` and insert it.
    ///
    /// The key has to exist before it can be compared, so it is always built;
    /// on a clash it is dropped.
    pub fn emplace<Args>(&mut self, args: Args) -> InsertResult
    where
        T: From<Args>,
    {
        self.insert_node(Node::emplace(args))
    }

    /// Construct a key with a fallible producer and insert it.
    ///
    /// A producer error is returned as `KeyOperationFailure` before the tree is
    /// touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::{BstSet, BstSetError};
    ///
    /// let mut set: BstSet<u8> = BstSet::new();
    /// let ok = set.try_emplace_with(|| u8::try_from(200)).unwrap();
    /// assert!(ok.inserted);
    ///
    /// let err = set.try_emplace_with(|| u8::try_from(300)).unwrap_err();
    /// assert!(matches!(err, BstSetError::KeyOperationFailure(_)));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_emplace_with<F, E>(&mut self, make: F) -> ModifyResult<InsertResult>
    where
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        let key = make().map_err(|e| BstSetError::key_operation("construct key", e))?;
        Ok(self.insert(key))
    }

    /// Insert `key`, failing with `DuplicateKey` if an equal key is present.
    pub fn try_insert(&mut self, key: T) -> ModifyResult<Cursor> {
        let result = self.insert(key);
        if result.inserted {
            Ok(result.position)
        } else {
            Err(BstSetError::DuplicateKey)
        }
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Insert an already built detached node.
    fn insert_node(&mut self, node: Node<T>) -> InsertResult {
        match self.probe(&node.key) {
            Probe::Found(id) => InsertResult::existing(id),
            Probe::Vacant { parent, side } => {
                InsertResult::created(self.link_new_node(node, parent, side))
            }
        }
    }

    /// Allocate `node` and hang it in the vacant slot found by `probe`.
    fn link_new_node(&mut self, mut node: Node<T>, parent: NodeId, side: Side) -> NodeId {
        node.detach();
        let id = self.arena.allocate(node);
        self.attach(parent, side, id);
        self.len += 1;
        id
    }
}

impl InsertResult {
    fn created(id: NodeId) -> Self {
        Self {
            position: Cursor::at(id),
            inserted: true,
        }
    }

    fn existing(id: NodeId) -> Self {
        Self {
            position: Cursor::at(id),
            inserted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NULL_NODE;

    #[test]
    fn test_first_insert_becomes_root() {
        let mut set = BstSet::new();
        let result = set.insert(42);
        assert!(result.inserted);
        assert_eq!(set.root(), result.position);
        assert_eq!(set.parent_id(set.root), NULL_NODE);
    }

    #[test]
    fn test_new_node_points_back_to_parent() {
        let mut set = BstSet::new();
        let root = set.insert(10).position;
        let left = set.insert(5).position;
        let right = set.insert(15).position;

        assert_eq!(set.parent_of(left), Ok(root));
        assert_eq!(set.parent_of(right), Ok(root));
        assert_eq!(set.left_of(root), Ok(left));
        assert_eq!(set.right_of(root), Ok(right));
    }

    #[test]
    fn test_duplicate_keeps_node_identity() {
        let mut set = BstSet::new();
        for key in [3, 1, 2] {
            set.insert(key);
        }
        let before = set.find(&2);
        let again = set.insert(2);
        assert!(!again.inserted);
        assert_eq!(again.position, before);
        assert_eq!(set.len(), 3);
        assert_eq!(set.try_insert(2), Err(BstSetError::DuplicateKey));
    }

    #[test]
    fn test_insert_cloned_and_emplace() {
        let mut set: BstSet<String> = BstSet::new();
        let name = String::from("bravo");
        assert!(set.insert_cloned(&name).inserted);
        assert!(!set.insert_cloned(&name).inserted);
        assert!(set.emplace("alpha").inserted);
        assert!(!set.emplace("bravo").inserted);
        assert_eq!(set.to_vec(), vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_try_emplace_with_failure_leaves_set_untouched() {
        let mut set: BstSet<i32> = BstSet::new();
        set.insert(1);
        let err = set
            .try_emplace_with(|| "x1".parse::<i32>())
            .unwrap_err();
        assert!(matches!(err, BstSetError::KeyOperationFailure(_)));
        assert_eq!(set.len(), 1);
        assert!(set.check_invariants());
    }
}
