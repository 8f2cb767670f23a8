//! Validation and debugging utilities for BstSet.
//!
//! This module contains invariant checking, debugging utilities and test
//! helpers. All walks use explicit stacks: an unbalanced tree can be as deep
//! as it is large.

use std::fmt::Debug;

use crate::comparator::Comparator;
use crate::compact_arena::{CompactArena, CompactArenaStats, NodeAllocator};
use crate::error::{BstSetError, SetResult};
use crate::types::{BstSet, Node, NodeId, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, C: Comparator<T>, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies search-tree order, parent/child agreement, that every live
    /// node is reachable exactly once from the root, and that an in-order
    /// walk yields strictly increasing keys.
    pub fn check_invariants_detailed(&self) -> SetResult<()> {
        if self.root != NULL_NODE && self.parent_id(self.root) != NULL_NODE {
            return Err(BstSetError::corrupted_tree(
                "Root",
                &format!("root {} has parent {}", self.root, self.parent_id(self.root)),
            ));
        }

        let reachable = self.check_structure()?;
        if reachable != self.len {
            return Err(BstSetError::corrupted_tree(
                "Size",
                &format!("{} nodes reachable but len is {}", reachable, self.len),
            ));
        }

        self.check_arena_tree_consistency(reachable)?;
        self.check_in_order_walk()
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> SetResult<()> {
        self.check_invariants_detailed()
    }

    /// Check if the set is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> SetResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            BstSetError::corrupted_tree(operation, &format!("Validation for {}: {}", operation, e))
        })
    }

    /// Walk the whole tree checking order bounds and parent links.
    /// Returns the number of nodes reached.
    fn check_structure(&self) -> SetResult<usize> {
        // (node, expected parent, exclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(NodeId, NodeId, NodeId, NodeId)> = Vec::new();
        if self.root != NULL_NODE {
            stack.push((self.root, NULL_NODE, NULL_NODE, NULL_NODE));
        }

        let limit = self.arena.allocated_count();
        let mut visited = 0usize;

        while let Some((id, expected_parent, lower, upper)) = stack.pop() {
            visited += 1;
            if visited > limit {
                return Err(BstSetError::corrupted_tree(
                    "Links",
                    &format!("more than {} nodes reachable, tree has a cycle", limit),
                ));
            }

            let node = self.node(id).ok_or_else(|| {
                BstSetError::corrupted_tree("Links", &format!("node {} is not allocated", id))
            })?;

            if node.parent != expected_parent {
                return Err(BstSetError::corrupted_tree(
                    "Parent",
                    &format!(
                        "node {} records parent {} but hangs from {}",
                        id, node.parent, expected_parent
                    ),
                ));
            }

            if let Some(bound) = self.key_of(lower) {
                if !self.comparator.less(bound, &node.key) {
                    return Err(BstSetError::corrupted_tree(
                        "Order",
                        &format!("node {} is not greater than ancestor {}", id, lower),
                    ));
                }
            }
            if let Some(bound) = self.key_of(upper) {
                if !self.comparator.less(&node.key, bound) {
                    return Err(BstSetError::corrupted_tree(
                        "Order",
                        &format!("node {} is not less than ancestor {}", id, upper),
                    ));
                }
            }

            if node.left != NULL_NODE {
                stack.push((node.left, id, lower, id));
            }
            if node.right != NULL_NODE {
                stack.push((node.right, id, id, upper));
            }
        }

        Ok(visited)
    }

    /// Check that allocation matches tree structure
    fn check_arena_tree_consistency(&self, reachable: usize) -> SetResult<()> {
        let allocated = self.arena.allocated_count();
        if reachable != allocated {
            return Err(BstSetError::arena_error(
                "Node consistency check",
                &format!("{} in tree vs {} in arena", reachable, allocated),
            ));
        }
        Ok(())
    }

    /// Check that stepping with successor links visits every key in order.
    fn check_in_order_walk(&self) -> SetResult<()> {
        let mut count = 0usize;
        let mut previous: Option<&T> = None;
        let mut current = self.minimum_from(self.root);

        while let Some(key) = self.key_of(current) {
            if let Some(prev) = previous {
                if !self.comparator.less(prev, key) {
                    return Err(BstSetError::corrupted_tree(
                        "In-order walk",
                        &format!("keys not strictly increasing at position {}", count),
                    ));
                }
            }
            count += 1;
            if count > self.len {
                break;
            }
            previous = Some(key);
            current = self.next_node(current);
        }

        if count != self.len {
            return Err(BstSetError::corrupted_tree(
                "In-order walk",
                &format!("walk visited {} keys but set has {}", count, self.len),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<T, C, A: NodeAllocator<Node<T>>> BstSet<T, C, A> {
    /// Returns all keys in order as a vector (for testing/debugging).
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Prints the tree structure for debugging, right subtree first so the
    /// output reads as the tree rotated a quarter turn.
    pub fn print_tree(&self)
    where
        T: Debug,
    {
        println!("Tree structure ({} keys):", self.len);
        let mut stack = vec![(self.root, 0usize, false)];
        while let Some((id, depth, expanded)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if expanded {
                println!("{}{:?} [id={}]", "    ".repeat(depth), node.key, id);
            } else {
                stack.push((node.left, depth + 1, false));
                stack.push((id, depth, true));
                stack.push((node.right, depth + 1, false));
            }
        }
    }
}

impl<T, C> BstSet<T, C, CompactArena<Node<T>>> {
    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}
