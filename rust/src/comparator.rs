//! Key ordering for BstSet.
//!
//! The tree only ever asks one question of a comparator: is `a` strictly less
//! than `b`? Equality is derived as "neither is less than the other", so the
//! predicate must be a strict total order. A predicate that is not yields an
//! arbitrary (but memory-safe) tree shape.

use std::cmp::Ordering;

/// Strict total order over keys.
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`less`](Comparator::less).
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Natural ordering via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<T: Ord + ?Sized> Comparator<T> for OrdComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverse of the natural ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseComparator;

impl<T: Ord + ?Sized> Comparator<T> for ReverseComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Adapts a `less` closure into a [`Comparator`].
///
/// ```
/// use bstset::{BstSet, FnComparator};
///
/// let by_len = FnComparator::new(|a: &&str, b: &&str| a.len() < b.len());
/// let mut set = BstSet::with_comparator(by_len);
/// set.insert("ccc");
/// set.insert("a");
/// assert!(!set.insert("b").inserted); // same length as "a"
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "ccc"]);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    less: F,
}

impl<F> FnComparator<F> {
    pub fn new(less: F) -> Self {
        Self { less }
    }
}

impl<F> std::fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnComparator")
    }
}

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.less)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_derived_from_less() {
        let cmp = FnComparator::new(|a: &i32, b: &i32| a < b);
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.compare(&2, &1), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_reverse_comparator() {
        assert!(ReverseComparator.less(&5, &3));
        assert!(!ReverseComparator.less(&3, &5));
        assert_eq!(Comparator::<i32>::compare(&ReverseComparator, &3, &5), Ordering::Greater);
    }

    #[test]
    fn test_ord_comparator_on_unsized() {
        assert!(OrdComparator.less("abc", "abd"));
        assert_eq!(Comparator::<str>::compare(&OrdComparator, "b", "b"), Ordering::Equal);
    }
}
