//! Hash map that preserves insertion order.
//!
//! Entries are indexed by a `HashMap` for O(1) lookup while living in an
//! arena-backed doubly linked list that records the order in which keys
//! were first inserted. Iteration walks the list, so it always yields
//! entries oldest-first regardless of hashing.

use std::collections::HashMap;
use std::hash::Hash;

use crate::arena::Arena;
use crate::types::{Entry, NodeId, NULL_NODE};

struct OrderedSlot<K, V> {
    entry: Entry<K, V>,
    prev: NodeId,
    next: NodeId,
}

/// A map that iterates its entries in insertion order.
///
/// # Examples
///
/// ```
/// use avltree::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("b", 3));
///
/// let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.lookup(&"b"), Some(&3));
/// ```
pub struct OrderedMap<K, V> {
    index: HashMap<K, NodeId>,
    slots: Arena<OrderedSlot<K, V>>,
    head: NodeId,
    tail: NodeId,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            slots: Arena::new(),
            head: NULL_NODE,
            tail: NULL_NODE,
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Insert a key-value pair at the end of the insertion order.
    ///
    /// Returns true if the key was new. If the key was already present,
    /// its value is replaced, its position is kept, and false is returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if let Some(&id) = self.index.get(&key) {
            if let Some(slot) = self.slots.get_mut(id) {
                slot.entry.value = value;
            }
            return false;
        }

        let id = self.slots.allocate(OrderedSlot {
            entry: Entry::new(key.clone(), value),
            prev: self.tail,
            next: NULL_NODE,
        });

        if self.tail == NULL_NODE {
            self.head = id;
        } else if let Some(old_tail) = self.slots.get_mut(self.tail) {
            old_tail.next = id;
        }
        self.tail = id;

        self.index.insert(key, id);
        true
    }

    /// Look up the value for a key.
    pub fn lookup(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.slots.get(id).map(|slot| &slot.entry.value)
    }

    /// Look up the value for a key mutably.
    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        self.slots.get_mut(id).map(|slot| &mut slot.entry.value)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove a key. Returns true if it was present.
    ///
    /// A later re-insert of the same key joins the end of the order.
    pub fn remove(&mut self, key: &K) -> bool {
        let id = match self.index.remove(key) {
            Some(id) => id,
            None => return false,
        };

        let slot = match self.slots.deallocate(id) {
            Some(slot) => slot,
            None => return false,
        };

        if slot.prev == NULL_NODE {
            self.head = slot.next;
        } else if let Some(prev) = self.slots.get_mut(slot.prev) {
            prev.next = slot.next;
        }

        if slot.next == NULL_NODE {
            self.tail = slot.prev;
        } else if let Some(next) = self.slots.get_mut(slot.next) {
            next.prev = slot.prev;
        }

        true
    }

    /// Remove all entries.
    pub fn vacate(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.head = NULL_NODE;
        self.tail = NULL_NODE;
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V> {
        OrderedMapIterator {
            map: self,
            cursor: self.head,
        }
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Insertion-order iterator over an [`OrderedMap`].
pub struct OrderedMapIterator<'a, K, V> {
    map: &'a OrderedMap<K, V>,
    cursor: NodeId,
}

impl<'a, K, V> Iterator for OrderedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.map.slots.get(self.cursor)?;
        self.cursor = slot.next;
        Some((&slot.entry.key, &slot.entry.value))
    }
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
