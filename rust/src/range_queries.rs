//! Range query operations for BstSet.
//!
//! This module contains bound lookups and range iteration. Bounds are resolved
//! to a first and last node once; the iterator then steps between them with
//! the usual successor/predecessor walks.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::comparator::Comparator;
use crate::compact_arena::NodeAllocator;
use crate::types::{BstSet, Cursor, Node, NodeId, NULL_NODE};

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Cursor at the first key not less than `key`, or the end position.
    pub fn lower_bound(&self, key: &T) -> Cursor {
        Cursor::at(self.lower_bound_node(key))
    }

    /// Cursor at the first key greater than `key`, or the end position.
    pub fn upper_bound(&self, key: &T) -> Cursor {
        Cursor::at(self.upper_bound_node(key))
    }

    /// Returns an iterator over the keys within `range`, in order.
    ///
    /// A range whose start lies after its end is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let set: BstSet<i32> = (0..10).collect();
    ///
    /// let half_open: Vec<_> = set.range(3..7).copied().collect();
    /// assert_eq!(half_open, vec![3, 4, 5, 6]);
    ///
    /// let closed: Vec<_> = set.range(3..=7).copied().collect();
    /// assert_eq!(closed, vec![3, 4, 5, 6, 7]);
    ///
    /// let tail: Vec<_> = set.range(5..).copied().collect();
    /// assert_eq!(tail, vec![5, 6, 7, 8, 9]);
    ///
    /// let head: Vec<_> = set.range(..5).copied().collect();
    /// assert_eq!(head, vec![0, 1, 2, 3, 4]);
    ///
    /// assert_eq!(set.range(7..3).count(), 0);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, T, C, A>
    where
        R: RangeBounds<T>,
    {
        let (first, last) = self.resolve_range_bounds(range);
        Range {
            set: self,
            front: first,
            back: last,
            finished: first == NULL_NODE || last == NULL_NODE,
        }
    }

    // ============================================================================
    // RANGE QUERY HELPERS
    // ============================================================================

    /// Resolve bounds to the first and last node inside the range, or a pair
    /// containing `NULL_NODE` when the range is empty.
    fn resolve_range_bounds<R>(&self, range: R) -> (NodeId, NodeId)
    where
        R: RangeBounds<T>,
    {
        let first = match range.start_bound() {
            Bound::Included(key) => self.lower_bound_node(key),
            Bound::Excluded(key) => self.upper_bound_node(key),
            Bound::Unbounded => self.minimum_from(self.root),
        };
        // One past the last node inside the range.
        let stop = match range.end_bound() {
            Bound::Included(key) => self.upper_bound_node(key),
            Bound::Excluded(key) => self.lower_bound_node(key),
            Bound::Unbounded => NULL_NODE,
        };
        let last = match stop {
            NULL_NODE => self.maximum_from(self.root),
            id => self.prev_node(id),
        };

        match (self.key_of(first), self.key_of(last)) {
            (Some(first_key), Some(last_key)) if !self.comparator.less(last_key, first_key) => {
                (first, last)
            }
            _ => (NULL_NODE, NULL_NODE),
        }
    }

    fn lower_bound_node(&self, key: &T) -> NodeId {
        let mut best = NULL_NODE;
        let mut current = self.root;
        while let Some(node) = self.node(current) {
            if self.comparator.less(&node.key, key) {
                current = node.right;
            } else {
                best = current;
                current = node.left;
            }
        }
        best
    }

    fn upper_bound_node(&self, key: &T) -> NodeId {
        let mut best = NULL_NODE;
        let mut current = self.root;
        while let Some(node) = self.node(current) {
            if self.comparator.less(key, &node.key) {
                best = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        best
    }
}

// ============================================================================
// RANGE ITERATOR
// ============================================================================

/// Iterator over the keys of a [`BstSet`] within a range.
pub struct Range<'a, T, C, A: NodeAllocator<Node<T>>> {
    set: &'a BstSet<T, C, A>,
    front: NodeId,
    back: NodeId,
    finished: bool,
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> Iterator for Range<'a, T, C, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let key = self.set.key_of(self.front)?;
        if self.front == self.back {
            self.finished = true;
        } else {
            self.front = self.set.next_node(self.front);
        }
        Some(key)
    }
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> DoubleEndedIterator for Range<'a, T, C, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let key = self.set.key_of(self.back)?;
        if self.front == self.back {
            self.finished = true;
        } else {
            self.back = self.set.prev_node(self.back);
        }
        Some(key)
    }
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> FusedIterator for Range<'a, T, C, A> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn evens() -> BstSet<i32> {
        [10, 4, 16, 2, 8, 12, 18, 6, 14].into_iter().collect()
    }

    #[test]
    fn test_lower_and_upper_bound() {
        let set = evens();
        assert_eq!(set.key_at(set.lower_bound(&7)), Ok(&8));
        assert_eq!(set.key_at(set.lower_bound(&8)), Ok(&8));
        assert_eq!(set.key_at(set.upper_bound(&8)), Ok(&10));
        assert_eq!(set.key_at(set.lower_bound(&-5)), Ok(&2));
        assert!(set.lower_bound(&19).is_end());
        assert!(set.upper_bound(&18).is_end());
    }

    #[test]
    fn test_range_with_excluded_start() {
        let set = evens();
        let keys: Vec<_> = set
            .range((Bound::Excluded(4), Bound::Included(12)))
            .copied()
            .collect();
        assert_eq!(keys, vec![6, 8, 10, 12]);
    }

    #[test]
    fn test_range_from_both_ends() {
        let set = evens();
        let mut range = set.range(5..15);
        assert_eq!(range.next(), Some(&6));
        assert_eq!(range.next_back(), Some(&14));
        assert_eq!(range.next_back(), Some(&12));
        assert_eq!(range.next(), Some(&8));
        assert_eq!(range.next(), Some(&10));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        let set = evens();
        assert_eq!(set.range(7..8).count(), 0);
        assert_eq!(set.range(9..=9).count(), 0);
        assert_eq!(set.range(14..4).count(), 0);
        assert_eq!(set.range((Bound::Excluded(8), Bound::Excluded(8))).count(), 0);
        assert_eq!(BstSet::<i32>::new().range(..).count(), 0);
        assert_eq!(set.range(..).count(), set.len());
    }
}
