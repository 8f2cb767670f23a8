//! Construction and initialization logic for BstSet.
//!
//! This module contains the constructors, the standard trait implementations
//! that build or copy a set, and the set-level comparison and formatting
//! impls.

use std::fmt;
use std::marker::PhantomData;

use crate::comparator::{Comparator, OrdComparator};
use crate::compact_arena::{CompactArena, NodeAllocator};
use crate::types::{BstSet, Node, NULL_NODE};

impl<T> BstSet<T> {
    /// Create an empty set ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let set = BstSet::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(OrdComparator)
    }

    /// Create an empty set whose node arena has room for `capacity` keys
    /// before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_allocator(OrdComparator, CompactArena::with_capacity(capacity))
    }
}

impl<T, C> BstSet<T, C> {
    /// Create an empty set ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_allocator(comparator, CompactArena::new())
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Create an empty set ordered by `comparator` that stores its nodes in
    /// `allocator`.
    ///
    /// The allocator should be empty: nodes already in it are not part of the
    /// tree and make [`check_invariants`](BstSet::check_invariants) fail.
    pub fn with_comparator_and_allocator(comparator: C, allocator: A) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            comparator,
            arena: allocator,
            _marker: PhantomData,
        }
    }

    /// The ordering this set was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The node storage backing this set.
    pub fn allocator(&self) -> &A {
        &self.arena
    }
}

impl<T, C: Default, A: NodeAllocator<Node<T>> + Default> Default for BstSet<T, C, A> {
    fn default() -> Self {
        Self::with_comparator_and_allocator(C::default(), A::default())
    }
}

/// Copies the tree shape as well as the keys, so node ids (and therefore
/// cursors) taken from the source address the same keys in the copy.
impl<T: Clone, C: Clone, A: NodeAllocator<Node<T>> + Clone> Clone for BstSet<T, C, A> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            len: self.len,
            comparator: self.comparator.clone(),
            arena: self.arena.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C, A> FromIterator<T> for BstSet<T, C, A>
where
    C: Comparator<T> + Default,
    A: NodeAllocator<Node<T>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> Extend<T> for BstSet<T, C, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T, C, A> Extend<&'a T> for BstSet<T, C, A>
where
    T: Clone + 'a,
    C: Comparator<T>,
    A: NodeAllocator<Node<T>>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for key in iter {
            self.insert_cloned(key);
        }
    }
}

impl<T: fmt::Debug, C, A: NodeAllocator<Node<T>>> fmt::Debug for BstSet<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Sets are equal when they hold equal keys in the same order.
impl<T: PartialEq, C, A: NodeAllocator<Node<T>>> PartialEq for BstSet<T, C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, A: NodeAllocator<Node<T>>> Eq for BstSet<T, C, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnComparator, ReverseComparator};

    #[test]
    fn test_from_iter_drops_duplicates() {
        let set: BstSet<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_with_capacity_preallocates() {
        let set: BstSet<u64> = BstSet::with_capacity(64);
        assert!(set.is_empty());
        assert!(set.allocator().capacity() >= 64);
    }

    #[test]
    fn test_custom_comparator_orders_keys() {
        let mut set: BstSet<i32, ReverseComparator> = BstSet::with_comparator(ReverseComparator);
        set.extend(&[1, 5, 3]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);

        let mut by_abs = BstSet::with_comparator(FnComparator::new(|a: &i32, b: &i32| a.abs() < b.abs()));
        by_abs.extend([-3, 2, 3, -1]);
        assert_eq!(by_abs.iter().copied().collect::<Vec<_>>(), vec![-1, 2, -3]);
    }

    #[test]
    fn test_clone_preserves_shape_and_cursors() {
        let original: BstSet<i32> = [5, 3, 8, 1, 4].into_iter().collect();
        let cursor = original.find(&4);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.key_at(cursor), Ok(&4));

        copy.remove(&4).unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.key_at(cursor), Ok(&4));
    }

    #[test]
    fn test_default_is_empty() {
        let set: BstSet<String> = BstSet::default();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }
}
