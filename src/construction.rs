//! Construction and container-level operations for AvlTreeMap.
//!
//! This module contains constructors, size accessors, and the whole-tree
//! operations that do not descend into individual nodes.

use crate::arena::{Arena, ArenaStats};
use crate::types::{AvlTreeMap, Comparator, NaturalOrder, NULL_NODE};

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Create an empty tree ordered by the key type's natural ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let tree: AvlTreeMap<i32, String> = AvlTreeMap::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Create an empty tree ordered by a custom comparator.
    ///
    /// The comparator fixes the key order for the lifetime of the tree;
    /// every lookup, insertion, and iteration uses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use avltree::{AvlTreeMap, Comparator};
    ///
    /// struct Reversed;
    ///
    /// impl Comparator<i32> for Reversed {
    ///     fn compare(&self, a: &i32, b: &i32) -> Ordering {
    ///         b.cmp(a)
    ///     }
    /// }
    ///
    /// let mut tree = AvlTreeMap::with_comparator(Reversed);
    /// for key in [1, 2, 3] {
    ///     tree.insert(key, ());
    /// }
    /// let keys: Vec<i32> = tree.keys().copied().collect();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            arena: Arena::new(),
            comparator,
        }
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> u32 {
        if self.root == NULL_NODE {
            0
        } else {
            self.height_of(self.root)
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.root = NULL_NODE;
        self.len = 0;
        self.arena.clear();
    }

    /// Entry with the smallest key, or None if the tree is empty.
    pub fn first(&self) -> Option<(&K, &V)> {
        if self.root == NULL_NODE {
            return None;
        }
        let entry = &self.node(self.minimum(self.root)).entry;
        Some((&entry.key, &entry.value))
    }

    /// Entry with the largest key, or None if the tree is empty.
    pub fn last(&self) -> Option<(&K, &V)> {
        if self.root == NULL_NODE {
            return None;
        }
        let entry = &self.node(self.maximum(self.root)).entry;
        Some((&entry.key, &entry.value))
    }

    /// Allocation statistics for the backing arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeMap;

    #[test]
    fn test_new_tree_is_empty() {
        let tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
    }

    #[test]
    fn test_first_and_last() {
        let tree: AvlTreeMap<i32, i32> = [(3, 30), (1, 10), (5, 50)].into_iter().collect();
        assert_eq!(tree.first(), Some((&1, &10)));
        assert_eq!(tree.last(), Some((&5, &50)));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tree: AvlTreeMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
        assert_eq!(tree.len(), 10);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.arena_stats().allocated_count, 0);
        assert!(tree.insert(1, 1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_from_iterator_keeps_last_duplicate() {
        let tree: AvlTreeMap<i32, i32> = [(1, 10), (2, 20), (1, 11)].into_iter().collect();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(&1), Some(&11));
    }
}
