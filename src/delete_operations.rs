//! DELETE operations for AvlTreeMap.
//!
//! Removal handles the three structural cases: leaf detach, one-child
//! splice, and two-children successor substitution. In the substitution
//! case the removed node keeps its identity and position; only its entry is
//! replaced by the successor's, and the successor (which never has a lower
//! child) is spliced out instead.

use crate::types::{AvlTreeMap, Comparator, NodeId, RootChange, NULL_NODE};

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Remove the entry with the given key, returning whether it existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let target = self.find_node(key);
        if target == NULL_NODE {
            return false;
        }

        let change = self.remove_node(target);
        self.adopt_root(change);
        self.len -= 1;
        true
    }

    /// Physically remove a node, rebalance the ancestor path, and report
    /// the resulting root change.
    pub(crate) fn remove_node(&mut self, mut target: NodeId) -> RootChange {
        let lower = self.node(target).lower;
        let upper = self.node(target).upper;

        if lower != NULL_NODE && upper != NULL_NODE {
            // Two children: the successor is the minimum of the upper
            // subtree and has no lower child. Swap entries so the target
            // node keeps its position, then splice out the successor.
            let successor = self.minimum(upper);
            let (t, s) = self
                .arena
                .get_pair_mut(target, successor)
                .expect("target and successor must be distinct allocated nodes");
            std::mem::swap(&mut t.entry, &mut s.entry);
            target = successor;
        }

        let child = if self.node(target).lower != NULL_NODE {
            self.node(target).lower
        } else {
            self.node(target).upper
        };
        let parent = self.node(target).parent;

        if parent == NULL_NODE {
            // Removing the root: promote the sole child, if any.
            let _ = self.arena.deallocate(target);
            if child == NULL_NODE {
                return RootChange::Emptied;
            }
            self.node_mut(child).parent = NULL_NODE;
            return RootChange::NewRoot(child);
        }

        if child != NULL_NODE {
            // One child: splice it into the target's former slot.
            if self.node(parent).lower == target {
                self.set_lower(parent, child);
            } else {
                self.set_upper(parent, child);
            }
        } else if self.node(parent).lower == target {
            self.set_lower(parent, NULL_NODE);
        } else {
            self.set_upper(parent, NULL_NODE);
        }

        let _ = self.arena.deallocate(target);
        self.retrace(parent)
    }
}
