use std::cell::Cell;
use std::rc::Rc;

use bstset::{BstSet, CompactArena, Node, NodeAllocator, NodeId, OrdComparator};

/// Allocator that forwards to `CompactArena` and counts the calls it sees.
/// The counters are shared so they can be read after the set is gone.
#[derive(Debug, Default)]
struct CountingArena<T> {
    inner: CompactArena<T>,
    allocations: Rc<Cell<usize>>,
    deallocations: Rc<Cell<usize>>,
}

impl<T> NodeAllocator<T> for CountingArena<T> {
    fn allocate(&mut self, item: T) -> NodeId {
        self.allocations.set(self.allocations.get() + 1);
        self.inner.allocate(item)
    }

    fn deallocate(&mut self, id: NodeId) -> Option<T> {
        self.deallocations.set(self.deallocations.get() + 1);
        self.inner.deallocate(id)
    }

    fn get(&self, id: NodeId) -> Option<&T> {
        self.inner.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.inner.get_mut(id)
    }

    fn allocated_count(&self) -> usize {
        self.inner.allocated_count()
    }
}

type CountingSet = BstSet<u32, OrdComparator, CountingArena<Node<u32>>>;

fn counting_set() -> CountingSet {
    BstSet::with_comparator_and_allocator(OrdComparator, CountingArena::default())
}

#[test]
fn test_one_allocation_per_created_node() {
    let mut set = counting_set();
    for key in [50, 20, 80, 10, 30] {
        set.insert(key);
    }
    assert_eq!(set.allocator().allocations.get(), 5);
    assert_eq!(set.allocator().deallocations.get(), 0);

    // Duplicates never reach the allocator.
    for key in [50, 10, 30] {
        assert!(!set.insert(key).inserted);
    }
    set.insert_cloned(&80);
    assert_eq!(set.allocator().allocations.get(), 5);
}

#[test]
fn test_one_deallocation_per_erased_node() {
    let mut set = counting_set();
    set.extend([50, 20, 80, 10, 30, 70, 90]);

    // Leaf, one child, two children.
    set.remove(&10).unwrap();
    set.remove(&20).unwrap();
    set.remove(&50).unwrap();
    assert_eq!(set.allocator().deallocations.get(), 3);

    // A missing key touches nothing.
    assert!(set.remove(&12345).is_err());
    assert_eq!(set.allocator().deallocations.get(), 3);

    assert_eq!(set.allocator().allocated_count(), set.len());
    set.validate().unwrap();
}

#[test]
fn test_clear_returns_every_node() {
    let mut set = counting_set();
    set.extend(0..100u32);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.allocator().allocations.get(), 100);
    assert_eq!(set.allocator().deallocations.get(), 100);
    assert_eq!(set.allocator().allocated_count(), 0);
}

#[test]
fn test_failed_producer_allocates_nothing() {
    let mut set = counting_set();
    let result = set.try_emplace_with(|| u32::try_from(-1i64));
    assert!(result.is_err());
    assert!(set.is_empty());
    assert_eq!(set.allocator().allocations.get(), 0);
}

#[test]
fn test_drop_returns_every_node() {
    let mut set = counting_set();
    for key in [5, 3, 8, 1, 4] {
        set.insert(key);
    }
    set.remove(&3).unwrap();
    let allocations = Rc::clone(&set.allocator().allocations);
    let deallocations = Rc::clone(&set.allocator().deallocations);

    drop(set);
    assert_eq!(allocations.get(), 5);
    assert_eq!(deallocations.get(), 5);
}

#[test]
fn test_drop_of_degenerate_tree() {
    let mut set = counting_set();
    set.extend(0..5_000u32);
    assert_eq!(set.height(), 5_000);
    let deallocations = Rc::clone(&set.allocator().deallocations);

    drop(set);
    assert_eq!(deallocations.get(), 5_000);
}
