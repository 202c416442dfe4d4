//! Slot arena allocator backing all node storage.
//!
//! Nodes refer to each other by `NodeId` index instead of by pointer, which
//! gives us non-owning parent back-references without reference counting:
//! the arena owns every node, and ids carry no ownership semantics.

use crate::types::{NodeId, NULL_NODE};

/// Statistics for an arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_slots: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Slot-based arena allocator with free-list reuse.
///
/// Deallocated slots are recycled by subsequent allocations, so ids are only
/// meaningful while the item they were returned for is still allocated.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Create a new arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    /// Allocate a new item and return its id.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.slots[free_index] = Some(item);
            free_index
        } else {
            self.slots.push(Some(item));
            self.slots.len() - 1
        };

        NodeId::try_from(index).expect("arena index should fit in NodeId")
    }

    /// Deallocate an item, returning it if the id was allocated.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        let item = self.slots.get_mut(index)?.take()?;
        self.free_list.push(index);
        Some(item)
    }

    /// Get a reference to an item.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        self.slots.get(index)?.as_ref()
    }

    /// Get a mutable reference to an item.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        self.slots.get_mut(index)?.as_mut()
    }

    /// Get mutable references to two distinct items at once.
    ///
    /// Returns `None` if either id is unallocated or if the ids are equal.
    pub fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        if a == b || a == NULL_NODE || b == NULL_NODE {
            return None;
        }
        let ia = usize::try_from(a).ok()?;
        let ib = usize::try_from(b).ok()?;
        if ia.max(ib) >= self.slots.len() {
            return None;
        }

        let (lo, hi) = (ia.min(ib), ia.max(ib));
        let (head, tail) = self.slots.split_at_mut(hi);
        let first = head[lo].as_mut()?;
        let second = tail[0].as_mut()?;
        if ia < ib {
            Some((first, second))
        } else {
            Some((second, first))
        }
    }

    /// Check if an id is valid and allocated.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of allocated items.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Returns true if no items are allocated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of free slots awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Release every item and reset the arena to its initial state.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    /// Get arena statistics.
    pub fn stats(&self) -> ArenaStats {
        let total_slots = self.slots.len();
        let free_count = self.free_list.len();
        let allocated_count = total_slots - free_count;
        let utilization = if total_slots > 0 {
            allocated_count as f64 / total_slots as f64
        } else {
            0.0
        };

        ArenaStats {
            total_slots,
            allocated_count,
            free_count,
            utilization,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
