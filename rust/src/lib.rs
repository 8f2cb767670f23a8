//! Ordered set backed by a binary search tree with parent links.
//!
//! [`BstSet`] keeps unique keys sorted under a caller-supplied strict total
//! order. Nodes live in an arena and are addressed by [`NodeId`]; each node
//! records its parent, so in-order stepping in both directions needs nothing
//! beyond the current node. [`Cursor`]s are detached positions that survive
//! insertion and erasure of other keys.
//!
//! The tree is not rebalanced: random insertion orders give O(log n) depth,
//! sorted ones give O(n).
//!
//! ```
//! use bstset::BstSet;
//!
//! let mut set = BstSet::new();
//! for key in [5, 3, 8, 1, 4] {
//!     set.insert(key);
//! }
//! assert_eq!(set.to_vec(), vec![&1, &3, &4, &5, &8]);
//!
//! let mut cursor = set.find(&4);
//! set.remove(&3).unwrap();
//! set.advance(&mut cursor).unwrap();
//! assert_eq!(set.key_at(cursor), Ok(&5));
//! ```

#[macro_use]
mod macros;

mod comparator;
mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod range_queries;
mod tree_structure;
mod types;
mod validation;

pub use comparator::{Comparator, FnComparator, OrdComparator, ReverseComparator};
pub use compact_arena::{CompactArena, CompactArenaStats, NodeAllocator};
pub use error::{BstSetError, CursorResult, KeyResult, ModifyResult, SetResult, SetResultExt};
pub use iteration::{IntoIter, Iter};
pub use range_queries::Range;
pub use types::{BstSet, Cursor, InsertResult, Node, NodeId, NULL_NODE};
