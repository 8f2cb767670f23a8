//! Cursor protocol and iterators for BstSet.
//!
//! Both the detached [`Cursor`] and the borrowing [`Iter`] step through keys
//! with the successor/predecessor walks in `tree_structure`, so they need no
//! stack and no state beyond the current node id.

use std::iter::FusedIterator;

use crate::compact_arena::NodeAllocator;
use crate::error::{BstSetError, CursorResult};
use crate::types::{BstSet, Cursor, Node, NodeId, NULL_NODE};

// ============================================================================
// CURSOR
// ============================================================================

impl Cursor {
    #[inline]
    pub(crate) fn at(node: NodeId) -> Self {
        Self { node }
    }

    /// The end position, one past the last key.
    pub const fn end() -> Self {
        Self { node: NULL_NODE }
    }

    /// Returns true for the end position.
    pub fn is_end(&self) -> bool {
        self.node == NULL_NODE
    }

    /// Arena id of the node this cursor refers to, `NULL_NODE` at the end.
    pub fn node_id(&self) -> NodeId {
        self.node
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::end()
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Cursor at the smallest key, or the end position if the set is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::at(self.minimum_from(self.root))
    }

    /// The end position.
    pub fn end(&self) -> Cursor {
        Cursor::end()
    }

    /// Key at `position`.
    ///
    /// Fails with `InvalidCursor` at the end position or at an erased node.
    pub fn key_at(&self, position: Cursor) -> CursorResult<&T> {
        if position.is_end() {
            return Err(BstSetError::invalid_cursor("dereference", "the end position"));
        }
        self.key_of(position.node)
            .ok_or_else(|| BstSetError::invalid_cursor("dereference", "an erased node"))
    }

    /// Move `position` to the next key in order, reaching the end position
    /// after the last key.
    ///
    /// Fails with `InvalidCursor` at the end position or at an erased node;
    /// `position` is left unchanged on failure.
    pub fn advance(&self, position: &mut Cursor) -> CursorResult<()> {
        if position.is_end() {
            return Err(BstSetError::invalid_cursor("advance", "past the end position"));
        }
        if !self.arena.contains(position.node) {
            return Err(BstSetError::invalid_cursor("advance", "from an erased node"));
        }
        position.node = self.next_node(position.node);
        Ok(())
    }

    /// Move `position` to the previous key in order. From the end position
    /// this reaches the largest key.
    ///
    /// Fails with `InvalidCursor` at the first key, at the end position of an
    /// empty set, or at an erased node; `position` is left unchanged on
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::BstSet;
    ///
    /// let set: BstSet<_> = [1, 2].into_iter().collect();
    /// let mut cursor = set.end();
    /// set.retreat(&mut cursor).unwrap();
    /// assert_eq!(set.key_at(cursor), Ok(&2));
    /// set.retreat(&mut cursor).unwrap();
    /// assert!(set.retreat(&mut cursor).is_err());
    /// assert_eq!(set.key_at(cursor), Ok(&1));
    /// ```
    pub fn retreat(&self, position: &mut Cursor) -> CursorResult<()> {
        let target = if position.is_end() {
            self.maximum_from(self.root)
        } else if self.arena.contains(position.node) {
            self.prev_node(position.node)
        } else {
            return Err(BstSetError::invalid_cursor("retreat", "from an erased node"));
        };

        if target == NULL_NODE {
            return Err(BstSetError::invalid_cursor("retreat", "before the first key"));
        }
        position.node = target;
        Ok(())
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C, A> {
        Iter {
            set: self,
            front: self.minimum_from(self.root),
            back: self.maximum_from(self.root),
            remaining: self.len,
        }
    }
}

// ============================================================================
// ITER
// ============================================================================

/// Borrowing iterator over the keys of a [`BstSet`] in order.
pub struct Iter<'a, T, C, A: NodeAllocator<Node<T>>> {
    set: &'a BstSet<T, C, A>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> Clone for Iter<'a, T, C, A> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> Iterator for Iter<'a, T, C, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.set.key_of(self.front)?;
        self.front = self.set.next_node(self.front);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> DoubleEndedIterator for Iter<'a, T, C, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.set.key_of(self.back)?;
        self.back = self.set.prev_node(self.back);
        self.remaining -= 1;
        Some(key)
    }
}

impl<'a, T, C, A: NodeAllocator<Node<T>>> ExactSizeIterator for Iter<'a, T, C, A> {}

impl<'a, T, C, A: NodeAllocator<Node<T>>> FusedIterator for Iter<'a, T, C, A> {}

impl<'a, T, C, A: NodeAllocator<Node<T>>> IntoIterator for &'a BstSet<T, C, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// INTO ITER
// ============================================================================

/// Owning iterator over the keys of a [`BstSet`] in order.
pub struct IntoIter<T, C, A: NodeAllocator<Node<T>>> {
    set: BstSet<T, C, A>,
}

impl<T, C, A: NodeAllocator<Node<T>>> Iterator for IntoIter<T, C, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.set.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> DoubleEndedIterator for IntoIter<T, C, A> {
    fn next_back(&mut self) -> Option<T> {
        self.set.pop_last()
    }
}

impl<T, C, A: NodeAllocator<Node<T>>> ExactSizeIterator for IntoIter<T, C, A> {}

impl<T, C, A: NodeAllocator<Node<T>>> FusedIterator for IntoIter<T, C, A> {}

impl<T, C, A: NodeAllocator<Node<T>>> IntoIterator for BstSet<T, C, A> {
    type Item = T;
    type IntoIter = IntoIter<T, C, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> BstSet<i32> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_cursor_walk_matches_iter() {
        let set = build(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let mut walked = Vec::new();
        let mut cursor = set.begin();
        while !cursor.is_end() {
            walked.push(*set.key_at(cursor).unwrap());
            set.advance(&mut cursor).unwrap();
        }
        let iterated: Vec<i32> = set.iter().copied().collect();
        assert_eq!(walked, iterated);
        assert_eq!(walked, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn test_advance_past_end_fails_and_keeps_cursor() {
        let set = build(&[1]);
        let mut cursor = set.begin();
        set.advance(&mut cursor).unwrap();
        assert!(cursor.is_end());
        assert!(set.advance(&mut cursor).unwrap_err().is_cursor_error());
        assert!(cursor.is_end());
        assert!(set.key_at(cursor).is_err());
    }

    #[test]
    fn test_retreat_on_empty_set_fails() {
        let set: BstSet<i32> = BstSet::new();
        let mut cursor = set.end();
        assert!(set.retreat(&mut cursor).is_err());
        assert_eq!(set.begin(), set.end());
    }

    #[test]
    fn test_iter_both_ends_meet() {
        let set = build(&[5, 2, 8, 1, 9]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.next_back(), Some(&8));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_reverse_and_last() {
        let set = build(&[3, 1, 2]);
        let reversed: Vec<_> = set.iter().rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(set.iter().last(), Some(&3));
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_into_iter_yields_owned_keys() {
        let set: BstSet<String> = ["b", "c", "a"].iter().map(|s| s.to_string()).collect();
        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        let rest: Vec<String> = iter.collect();
        assert_eq!(rest, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_cursor_survives_unrelated_mutation() {
        let mut set = build(&[50, 30, 70, 20, 40, 60, 80]);
        let mut cursor = set.find(&40);
        set.remove(&30).unwrap();
        set.remove(&50).unwrap();
        set.insert(45);
        assert_eq!(set.key_at(cursor), Ok(&40));
        set.advance(&mut cursor).unwrap();
        assert_eq!(set.key_at(cursor), Ok(&45));
        set.advance(&mut cursor).unwrap();
        assert_eq!(set.key_at(cursor), Ok(&60));
    }
}
