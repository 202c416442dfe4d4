//! Validation and debugging utilities for AvlTreeMap.
//!
//! This module contains invariant checking, structure printing, and test
//! helpers for the AVL tree implementation.

use crate::error::{AvlTreeError, TreeResult};
use crate::types::{AvlTreeMap, Comparator, NodeId, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Check if the tree maintains AVL invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.root != NULL_NODE && self.parent_of(self.root) != NULL_NODE {
            return Err("Root node has a parent".to_string());
        }

        // Recursive structural checks: ordering, balance, cached heights,
        // and parent back-pointer consistency.
        let reachable = self.check_subtree(self.root, None, None)?;

        if reachable != self.len {
            return Err(format!(
                "Tree reports {} entries but {} nodes are reachable",
                self.len, reachable
            ));
        }

        self.check_iteration_order()?;
        self.check_arena_tree_consistency().map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Validate one subtree and return the number of nodes in it.
    ///
    /// `min` and `max` carry the exclusive key bounds inherited from
    /// ancestors; a violation anywhere means the search order is broken.
    fn check_subtree(
        &self,
        id: NodeId,
        min: Option<&K>,
        max: Option<&K>,
    ) -> Result<usize, String> {
        if id == NULL_NODE {
            return Ok(0);
        }

        let node = self.node(id);
        let key = &node.entry.key;

        if let Some(bound) = min {
            if !self.comparator.compare(key, bound).is_gt() {
                return Err(format!("Node {} violates lower key bound", id));
            }
        }
        if let Some(bound) = max {
            if !self.comparator.compare(key, bound).is_lt() {
                return Err(format!("Node {} violates upper key bound", id));
            }
        }

        for child in [node.lower, node.upper] {
            if child != NULL_NODE && self.parent_of(child) != id {
                return Err(format!(
                    "Child {} of node {} has stale parent pointer {}",
                    child,
                    id,
                    self.parent_of(child)
                ));
            }
        }

        let lower_count = self.check_subtree(node.lower, min, Some(key))?;
        let upper_count = self.check_subtree(node.upper, Some(key), max)?;

        let computed = self.compute_height(id);
        if node.height != computed {
            return Err(format!(
                "Node {} caches height {} but subtree height is {}",
                id, node.height, computed
            ));
        }

        let balance = self.compute_balance(id);
        if balance.abs() > 1 {
            return Err(format!("Node {} has balance factor {}", id, balance));
        }

        Ok(lower_count + upper_count + 1)
    }

    /// Check that iteration yields strictly ascending keys and the right
    /// number of entries.
    fn check_iteration_order(&self) -> Result<(), String> {
        let keys: Vec<&K> = self.keys().collect();

        for i in 1..keys.len() {
            if !self.comparator.compare(keys[i - 1], keys[i]).is_lt() {
                return Err(format!("Iterator returned unsorted keys at index {}", i));
            }
        }

        if keys.len() != self.len {
            return Err(format!(
                "Iterator returned {} keys but tree has {} items",
                keys.len(),
                self.len
            ));
        }

        Ok(())
    }

    /// Check that arena allocation matches the tree structure.
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        if self.arena.len() != self.len {
            return Err(AvlTreeError::arena_error(
                "Node consistency check",
                &format!(
                    "{} allocated nodes vs {} tree entries",
                    self.arena.len(),
                    self.len
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// DEBUG UTILITIES
// ============================================================================

impl<K: std::fmt::Debug, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Print the tree structure for debugging.
    pub fn print_structure(&self) {
        if self.root == NULL_NODE {
            println!("Empty tree");
            return;
        }
        self.print_subtree(self.root, 0);
    }

    fn print_subtree(&self, id: NodeId, depth: usize) {
        let node = self.node(id);
        if node.upper != NULL_NODE {
            self.print_subtree(node.upper, depth + 1);
        }
        println!(
            "{}{:?} (id={}, h={})",
            "  ".repeat(depth),
            node.entry.key,
            id,
            node.height
        );
        if node.lower != NULL_NODE {
            self.print_subtree(node.lower, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeMap;

    #[test]
    fn test_empty_tree_passes_validation() {
        let tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert!(tree.check_invariants_detailed().is_ok());
    }

    #[test]
    fn test_populated_tree_passes_validation() {
        let mut tree = AvlTreeMap::new();
        for key in 0..50 {
            tree.insert(key, key);
        }
        assert!(tree.check_invariants_detailed().is_ok());
    }

    #[test]
    fn test_detects_stale_height() {
        let mut tree = AvlTreeMap::new();
        for key in [2, 1, 3] {
            tree.insert(key, key);
        }

        let root = tree.root;
        tree.node_mut(root).height = 7;

        let report = tree.check_invariants_detailed();
        assert!(report.is_err());
        assert!(report.unwrap_err().contains("height"));
    }

    #[test]
    fn test_detects_broken_parent_pointer() {
        let mut tree = AvlTreeMap::new();
        for key in [2, 1, 3] {
            tree.insert(key, key);
        }

        let root = tree.root;
        let lower = tree.lower_of(root);
        tree.node_mut(lower).parent = crate::NULL_NODE;

        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_order_violation() {
        let mut tree = AvlTreeMap::new();
        for key in [2, 1, 3] {
            tree.insert(key, key);
        }

        let root = tree.root;
        let lower = tree.lower_of(root);
        tree.node_mut(lower).entry.key = 9;

        assert!(!tree.check_invariants());
    }
}
