//! INSERT operations for AvlTreeMap.
//!
//! Insertion is a BST descent to a vacant child slot followed by a retrace
//! that rebalances every ancestor on the path back to the root. The
//! container adopts the new root when a rotation replaced it.

use std::cmp::Ordering;

use crate::types::{AvlNode, AvlTreeMap, Comparator, Entry, NodeId, NULL_NODE};

/// Where a key belongs in the tree.
enum InsertSlot {
    /// The key is already present at this node.
    Occupied(NodeId),
    /// The key belongs in the given child slot of this node.
    Vacant { parent: NodeId, upper: bool },
}

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Insert a key-value pair, returning whether a new entry was created.
    ///
    /// Inserting a key that is already present overwrites its value in
    /// place without any structural or count change and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// assert!(tree.insert(1, "one"));
    /// assert!(!tree.insert(1, "uno"));
    /// assert_eq!(tree.get(&1), Some(&"uno"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.root == NULL_NODE {
            self.root = self.arena.allocate(AvlNode::new(Entry::new(key, value)));
            self.len = 1;
            return true;
        }

        match self.find_insert_slot(&key) {
            InsertSlot::Occupied(id) => {
                self.node_mut(id).entry = Entry::new(key, value);
                false
            }
            InsertSlot::Vacant { parent, upper } => {
                let id = self.arena.allocate(AvlNode::new(Entry::new(key, value)));
                self.insert_node(parent, upper, id);
                self.len += 1;
                true
            }
        }
    }

    /// Attach a freshly allocated node to a vacant child slot and restore
    /// balance along the ancestor path, adopting the root if it changed.
    pub(crate) fn insert_node(&mut self, parent: NodeId, upper: bool, id: NodeId) {
        if upper {
            self.set_upper(parent, id);
        } else {
            self.set_lower(parent, id);
        }
        let change = self.retrace(parent);
        self.adopt_root(change);
    }

    /// Descend from the root comparing keys until the key's node or its
    /// vacant slot is found.
    fn find_insert_slot(&self, key: &K) -> InsertSlot {
        let mut current = self.root;
        loop {
            match self.comparator.compare(key, &self.node(current).entry.key) {
                Ordering::Equal => return InsertSlot::Occupied(current),
                Ordering::Less => {
                    let lower = self.node(current).lower;
                    if lower == NULL_NODE {
                        return InsertSlot::Vacant {
                            parent: current,
                            upper: false,
                        };
                    }
                    current = lower;
                }
                Ordering::Greater => {
                    let upper = self.node(current).upper;
                    if upper == NULL_NODE {
                        return InsertSlot::Vacant {
                            parent: current,
                            upper: true,
                        };
                    }
                    current = upper;
                }
            }
        }
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
