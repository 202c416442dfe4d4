//! Iterator implementations for AvlTreeMap.
//!
//! All iterators are lazy and restartable: each call to `items`, `keys`,
//! `values`, or `filter` builds a fresh traversal with its own stack, so
//! independent iterations never share cursor state.
//!
//! Iterators borrow the tree, so the borrow checker statically rules out
//! structural mutation while any of them is alive.

use crate::types::{AvlTreeMap, Comparator, NaturalOrder, NodeId, RangeConstraint, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Ascending iterator over entries whose keys satisfy a set of range
/// constraints (all of them, conjunctively).
///
/// The traversal is an in-order walk that prunes subtrees falling entirely
/// outside the tightest derived lower and upper bounds, so a narrow filter
/// over a large tree touches O(log n + k) nodes.
pub struct ItemIterator<'a, K, V, C = NaturalOrder> {
    tree: &'a AvlTreeMap<K, V, C>,
    /// In-order walk state; the flag marks nodes whose lower subtree has
    /// already been scheduled.
    stack: Vec<(NodeId, bool)>,
    constraints: Vec<RangeConstraint<K>>,
    /// Index into `constraints` of the tightest bound from below.
    lower_bound: Option<usize>,
    /// Index into `constraints` of the tightest bound from above.
    upper_bound: Option<usize>,
}

/// Iterator over keys in ascending order.
pub struct KeyIterator<'a, K, V, C = NaturalOrder> {
    items: ItemIterator<'a, K, V, C>,
}

/// Iterator over values in ascending key order.
pub struct ValueIterator<'a, K, V, C = NaturalOrder> {
    items: ItemIterator<'a, K, V, C>,
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Returns an iterator over all entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// let keys: Vec<i32> = tree.items().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    ///
    /// The iterator borrows the tree, so structural mutation while it is
    /// alive is rejected at compile time:
    ///
    /// ```compile_fail
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    ///
    /// let mut items = tree.items();
    /// tree.insert(2, "two"); // error: `tree` is still borrowed
    /// items.next();
    /// ```
    pub fn items(&self) -> ItemIterator<'_, K, V, C> {
        ItemIterator::new(self, Vec::new())
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> KeyIterator<'_, K, V, C> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in ascending key order.
    pub fn values(&self) -> ValueIterator<'_, K, V, C> {
        ValueIterator {
            items: self.items(),
        }
    }

    /// Returns an ascending iterator over the entries satisfying every
    /// given constraint.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, RangeConstraint, RangeOperator};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// for key in 1..=5 {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let keys: Vec<i32> = tree
    ///     .filter(vec![
    ///         RangeConstraint::new(RangeOperator::Gt, 1),
    ///         RangeConstraint::new(RangeOperator::Lt, 5),
    ///     ])
    ///     .map(|(k, _)| *k)
    ///     .collect();
    /// assert_eq!(keys, [2, 3, 4]);
    /// ```
    pub fn filter<I>(&self, constraints: I) -> ItemIterator<'_, K, V, C>
    where
        I: IntoIterator<Item = RangeConstraint<K>>,
    {
        ItemIterator::new(self, constraints.into_iter().collect())
    }
}

// ============================================================================
// ITEMITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C: Comparator<K>> ItemIterator<'a, K, V, C> {
    pub(crate) fn new(tree: &'a AvlTreeMap<K, V, C>, constraints: Vec<RangeConstraint<K>>) -> Self {
        // Derive the tightest bound in each direction; `=` constraints
        // bound both, which collapses the walk to a single-key visit.
        let mut lower_bound: Option<usize> = None;
        let mut upper_bound: Option<usize> = None;
        for (index, constraint) in constraints.iter().enumerate() {
            if constraint.operator.bounds_below()
                && lower_bound.map_or(true, |current| {
                    tree.comparator
                        .compare(&constraint.key, &constraints[current].key)
                        .is_gt()
                })
            {
                lower_bound = Some(index);
            }
            if constraint.operator.bounds_above()
                && upper_bound.map_or(true, |current| {
                    tree.comparator
                        .compare(&constraint.key, &constraints[current].key)
                        .is_lt()
                })
            {
                upper_bound = Some(index);
            }
        }

        let mut stack = Vec::new();
        if tree.root != NULL_NODE {
            stack.push((tree.root, false));
        }

        Self {
            tree,
            stack,
            constraints,
            lower_bound,
            upper_bound,
        }
    }

    /// No key in the lower subtree of `id` can satisfy the lower bound
    /// unless this node's key is strictly above it.
    fn descend_lower(&self, id: NodeId) -> bool {
        match self.lower_bound {
            None => true,
            Some(index) => self
                .tree
                .comparator
                .compare(&self.tree.node(id).entry.key, &self.constraints[index].key)
                .is_gt(),
        }
    }

    /// Mirror of `descend_lower` for the upper subtree.
    fn descend_upper(&self, id: NodeId) -> bool {
        match self.upper_bound {
            None => true,
            Some(index) => self
                .tree
                .comparator
                .compare(&self.tree.node(id).entry.key, &self.constraints[index].key)
                .is_lt(),
        }
    }

    /// Whether a node's key satisfies every constraint.
    fn matches(&self, id: NodeId) -> bool {
        let key = &self.tree.node(id).entry.key;
        self.constraints.iter().all(|constraint| {
            constraint
                .operator
                .accepts(self.tree.comparator.compare(key, &constraint.key))
        })
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for ItemIterator<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, lower_done)) = self.stack.pop() {
            if !lower_done {
                self.stack.push((id, true));
                let lower = self.tree.node(id).lower;
                if lower != NULL_NODE && self.descend_lower(id) {
                    self.stack.push((lower, false));
                }
            } else {
                let upper = self.tree.node(id).upper;
                if upper != NULL_NODE && self.descend_upper(id) {
                    self.stack.push((upper, false));
                }
                if self.matches(id) {
                    let entry = &self.tree.node(id).entry;
                    return Some((&entry.key, &entry.value));
                }
            }
        }
        None
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for KeyIterator<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for ValueIterator<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }
}

impl<'a, K, V, C: Comparator<K>> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{RangeConstraint, RangeOperator};
    use crate::AvlTreeMap;

    fn five_tree() -> AvlTreeMap<i32, i32> {
        let mut tree = AvlTreeMap::new();
        for key in [3, 1, 5, 2, 4] {
            tree.insert(key, key);
        }
        tree
    }

    fn filtered_keys(tree: &AvlTreeMap<i32, i32>, constraints: Vec<RangeConstraint<i32>>) -> Vec<i32> {
        tree.filter(constraints).map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_filter_without_constraints() {
        let tree = five_tree();
        assert_eq!(filtered_keys(&tree, vec![]), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_with_gt() {
        let tree = five_tree();
        let constraints = vec![RangeConstraint::new(RangeOperator::Gt, 1)];
        assert_eq!(filtered_keys(&tree, constraints), [2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_with_ge() {
        let tree = five_tree();
        let constraints = vec![RangeConstraint::new(RangeOperator::Ge, 1)];
        assert_eq!(filtered_keys(&tree, constraints), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_with_eq() {
        let tree = five_tree();
        let constraints = vec![RangeConstraint::new(RangeOperator::Eq, 1)];
        assert_eq!(filtered_keys(&tree, constraints), [1]);
    }

    #[test]
    fn test_filter_with_le() {
        let tree = five_tree();
        let constraints = vec![RangeConstraint::new(RangeOperator::Le, 5)];
        assert_eq!(filtered_keys(&tree, constraints), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_with_lt() {
        let tree = five_tree();
        let constraints = vec![RangeConstraint::new(RangeOperator::Lt, 5)];
        assert_eq!(filtered_keys(&tree, constraints), [1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_with_bound_pair() {
        let tree = five_tree();
        let constraints = vec![
            RangeConstraint::new(RangeOperator::Gt, 1),
            RangeConstraint::new(RangeOperator::Lt, 5),
        ];
        assert_eq!(filtered_keys(&tree, constraints), [2, 3, 4]);
    }

    #[test]
    fn test_filter_with_contradictory_bounds() {
        let tree = five_tree();
        let constraints = vec![
            RangeConstraint::new(RangeOperator::Gt, 4),
            RangeConstraint::new(RangeOperator::Lt, 2),
        ];
        assert_eq!(filtered_keys(&tree, constraints), [] as [i32; 0]);
    }

    #[test]
    fn test_tightest_bounds_win() {
        let tree = five_tree();
        let constraints = vec![
            RangeConstraint::new(RangeOperator::Ge, 0),
            RangeConstraint::new(RangeOperator::Gt, 2),
            RangeConstraint::new(RangeOperator::Le, 9),
            RangeConstraint::new(RangeOperator::Lt, 5),
        ];
        assert_eq!(filtered_keys(&tree, constraints), [3, 4]);
    }

    #[test]
    fn test_iterations_are_independent() {
        let tree = five_tree();
        let mut first = tree.items();
        first.next();
        first.next();

        // A fresh traversal is unaffected by the half-consumed one.
        let second: Vec<i32> = tree.items().map(|(k, _)| *k).collect();
        assert_eq!(second, [1, 2, 3, 4, 5]);
        assert_eq!(first.next().map(|(k, _)| *k), Some(3));
    }

    #[test]
    fn test_keys_and_values() {
        let tree = five_tree();
        let keys: Vec<i32> = tree.keys().copied().collect();
        let values: Vec<i32> = tree.values().copied().collect();
        assert_eq!(keys, [1, 2, 3, 4, 5]);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_tree_iteration() {
        let tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert_eq!(tree.items().count(), 0);
        assert_eq!(tree.filter(vec![]).count(), 0);
    }
}
