//! GET operations for AvlTreeMap.
//!
//! This module contains the read operations: exact key lookup and
//! single-constraint location (floor / ceiling / exact search).

use std::cmp::Ordering;

use crate::error::{AvlTreeError, KeyResult};
use crate::types::{AvlTreeMap, Comparator, NodeId, RangeConstraint, RangeOperator, NULL_NODE};

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    // ============================================================================
    // EXACT LOOKUP
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            None
        } else {
            Some(&self.node(id).entry.value)
        }
    }

    /// Get a mutable reference to the value associated with a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            None
        } else {
            Some(&mut self.node_mut(id).entry.value)
        }
    }

    /// Check if a key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key) != NULL_NODE
    }

    /// Get the value for a key, returning an error if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get_item(&1).unwrap(), &"one");
    /// assert!(tree.get_item(&2).is_err());
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(AvlTreeError::KeyNotFound)
    }

    /// Exact BST descent to the node holding `key`, `NULL_NODE` if absent.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NULL_NODE {
            match self.comparator.compare(key, &self.node(current).entry.key) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.node(current).lower,
                Ordering::Greater => current = self.node(current).upper,
            }
        }
        NULL_NODE
    }

    // ============================================================================
    // FLOOR / CEILING LOCATION
    // ============================================================================

    /// Locate the best entry satisfying a single constraint.
    ///
    /// - `=` finds the exact key.
    /// - `<` / `<=` find the greatest qualifying key (floor).
    /// - `>` / `>=` find the smallest qualifying key (ceiling).
    ///
    /// Returns `None` when no entry qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, RangeConstraint, RangeOperator};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// for key in [1, 3, 5, 7, 9] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let floor = tree.locate(&RangeConstraint::new(RangeOperator::Lt, 6));
    /// assert_eq!(floor.map(|(k, _)| *k), Some(5));
    ///
    /// let ceiling = tree.locate(&RangeConstraint::new(RangeOperator::Ge, 6));
    /// assert_eq!(ceiling.map(|(k, _)| *k), Some(7));
    ///
    /// assert!(tree.locate(&RangeConstraint::new(RangeOperator::Eq, 4)).is_none());
    /// ```
    pub fn locate(&self, constraint: &RangeConstraint<K>) -> Option<(&K, &V)> {
        let id = self.locate_node(constraint);
        if id == NULL_NODE {
            None
        } else {
            let entry = &self.node(id).entry;
            Some((&entry.key, &entry.value))
        }
    }

    /// Guided descent tracking the best candidate node for a constraint.
    pub(crate) fn locate_node(&self, constraint: &RangeConstraint<K>) -> NodeId {
        match constraint.operator {
            RangeOperator::Eq => self.find_node(&constraint.key),
            RangeOperator::Lt | RangeOperator::Le => {
                // Floor search: whenever the current key qualifies, record
                // it and look for something closer in the upper subtree.
                let mut best = NULL_NODE;
                let mut current = self.root;
                while current != NULL_NODE {
                    let ordering = self
                        .comparator
                        .compare(&self.node(current).entry.key, &constraint.key);
                    if constraint.operator.accepts(ordering) {
                        best = current;
                        current = self.node(current).upper;
                    } else {
                        current = self.node(current).lower;
                    }
                }
                best
            }
            RangeOperator::Gt | RangeOperator::Ge => {
                // Ceiling search: mirror image of the floor search.
                let mut best = NULL_NODE;
                let mut current = self.root;
                while current != NULL_NODE {
                    let ordering = self
                        .comparator
                        .compare(&self.node(current).entry.key, &constraint.key);
                    if constraint.operator.accepts(ordering) {
                        best = current;
                        current = self.node(current).lower;
                    } else {
                        current = self.node(current).upper;
                    }
                }
                best
            }
        }
    }
}
