//! Node storage for BstSet.
//!
//! The tree engine never owns nodes directly: it asks a [`NodeAllocator`] for a
//! slot when a key is inserted and hands the slot back when the key is erased.
//! [`CompactArena`] is the default allocator, a vector of slots with a free list
//! so erased slots are reused by later insertions.

use crate::types::{NodeId, NULL_NODE};

/// Allocation interface the tree engine depends on.
///
/// The engine calls `allocate` exactly once per created node and `deallocate`
/// exactly once per destroyed node. Ids handed out must stay stable until the
/// slot is deallocated.
pub trait NodeAllocator<T> {
    /// Store `item` and return its id.
    fn allocate(&mut self, item: T) -> NodeId;

    /// Release the slot for `id`, returning its contents if it was live.
    fn deallocate(&mut self, id: NodeId) -> Option<T>;

    /// Shared access to a live slot.
    fn get(&self, id: NodeId) -> Option<&T>;

    /// Exclusive access to a live slot.
    fn get_mut(&mut self, id: NodeId) -> Option<&mut T>;

    /// Number of live slots.
    fn allocated_count(&self) -> usize;

    /// Check if an ID is valid and allocated
    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Slot-vector allocator with free-slot reuse.
#[derive(Debug, Clone)]
pub struct CompactArena<T> {
    /// Slot storage; `None` marks a freed slot.
    storage: Vec<Option<T>>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Number of occupied slots.
    live: usize,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
        }
    }

    #[inline]
    fn index_of(id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            None
        } else {
            usize::try_from(id).ok()
        }
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.live;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Get the total capacity
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Drop every slot at once. Ids handed out earlier become invalid.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.live = 0;
    }
}

impl<T> NodeAllocator<T> for CompactArena<T> {
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` slots.
    #[inline]
    fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = Some(item);
            free_index
        } else {
            let index = self.storage.len();
            assert!(index < NULL_NODE as usize, "arena capacity overflow");
            self.storage.push(Some(item));
            index
        };
        self.live += 1;

        index as NodeId
    }

    #[inline]
    fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = Self::index_of(id)?;
        let old_value = self.storage.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.live -= 1;
        Some(old_value)
    }

    #[inline]
    fn get(&self, id: NodeId) -> Option<&T> {
        let index = Self::index_of(id)?;
        self.storage.get(index)?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = Self::index_of(id)?;
        self.storage.get_mut(index)?.as_mut()
    }

    fn allocated_count(&self) -> usize {
        self.live
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_arena_basic_operations() {
        let mut arena = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena.get(id3), Some(&126));

        assert!(arena.contains(id1));
        assert!(arena.contains(id2));
        assert!(arena.contains(id3));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut arena: CompactArena<i32> = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert_eq!(arena.deallocate(id1), Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));
        assert_eq!(arena.free_count(), 1);

        // Double free is rejected
        assert_eq!(arena.deallocate(id1), None);
        assert_eq!(arena.free_count(), 1);

        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 2);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_out_of_range_ids() {
        let mut arena: CompactArena<&str> = CompactArena::with_capacity(4);
        assert!(arena.get(0).is_none());
        assert!(arena.get_mut(NULL_NODE).is_none());
        assert!(arena.deallocate(17).is_none());
        assert!(arena.is_empty());
        assert!(arena.capacity() >= 4);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut arena = CompactArena::new();
        for i in 0..10 {
            arena.allocate(i);
        }
        arena.deallocate(3);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.free_count(), 0);
        assert_eq!(arena.allocate(99), 0);
    }
}
