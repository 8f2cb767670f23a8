//! Core types and data structures for BstSet.
//!
//! This module contains the node record, the set itself, the cursor handle and
//! the small result types shared by the operation modules.

use std::marker::PhantomData;

use crate::comparator::OrdComparator;
use crate::compact_arena::{CompactArena, NodeAllocator};

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Id meaning "no node": an absent child, the root's parent, or the end position.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One stored key plus its position in the tree.
///
/// Links are arena ids. A node's left and right children are owned by that
/// node until they are detached; the parent link is a back-reference used for
/// in-order stepping without an auxiliary stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Ordered set of unique keys backed by an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C` and stored in nodes obtained from
/// the allocator `A`. Every node records its parent, so iteration and cursor
/// stepping need no state beyond a single node id.
///
/// # Type Parameters
///
/// * `T` - Key type
/// * `C` - Strict total order over `T`, see [`Comparator`](crate::Comparator)
/// * `A` - Node storage, see [`NodeAllocator`](crate::NodeAllocator)
///
/// # Examples
///
/// ```
/// use bstset::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(5);
/// set.insert(3);
/// set.insert(8);
///
/// assert!(set.contains(&3));
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
/// ```
///
/// # Performance Characteristics
///
/// The tree is not rebalanced. Operations cost O(depth), which is
/// O(log n) for random insertion orders and O(n) for sorted ones.
///
/// - **Insertion**: O(depth)
/// - **Lookup**: O(depth)
/// - **Deletion**: O(depth)
/// - **Full iteration**: O(n)
///
/// Dropping the set hands every live node back to the allocator, one
/// `deallocate` call per node.
pub struct BstSet<T, C = OrdComparator, A = CompactArena<Node<T>>>
where
    A: NodeAllocator<Node<T>>,
{
    /// Topmost node, or `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of keys stored.
    pub(crate) len: usize,
    pub(crate) comparator: C,
    /// Node storage.
    pub(crate) arena: A,
    pub(crate) _marker: PhantomData<T>,
}

/// A position in a [`BstSet`]: a key's node or the end position.
///
/// Cursors are plain handles. They do not borrow the set, so the set may be
/// modified while a cursor is held; a cursor stays valid until the node it
/// refers to is erased. Stepping and dereferencing go through the set:
/// [`BstSet::advance`], [`BstSet::retreat`], [`BstSet::key_at`].
///
/// Two cursors compare equal when they refer to the same node, or are both
/// the end position. Cursors are only meaningful for the set that produced
/// them (or a clone of it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) node: NodeId,
}

/// Outcome of an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    /// Position of the newly inserted key, or of the equal key already present.
    pub position: Cursor,
    /// Whether a new node was created.
    pub inserted: bool,
}

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Where a descent for a key ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// A node holding an equal key.
    Found(NodeId),
    /// The empty child slot the key would occupy. `parent` is `NULL_NODE`
    /// when the tree is empty.
    Vacant { parent: NodeId, side: Side },
}
