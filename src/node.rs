//! Node-level structural core for AvlTreeMap.
//!
//! All operations here work on arena ids and are the building blocks the
//! container-level API is made of: cached-height maintenance, the atomic
//! child rewire, rotations, rebalancing, and in-order navigation.
//!
//! The mutating operations are public for the same reason the arena
//! accessors are: they let low-level callers assemble subtrees directly.
//! Used outside the tree's own call paths they can violate the BST and
//! balance invariants, which `check_invariants` will report as corruption.

use crate::types::{AvlNode, AvlTreeMap, Comparator, NodeId, RootChange, NULL_NODE};

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    // ============================================================================
    // ARENA ACCESS
    // ============================================================================

    /// Borrow the node with the given id, panicking on a dangling id.
    pub(crate) fn node(&self, id: NodeId) -> &AvlNode<K, V> {
        match self.arena.get(id) {
            Some(node) => node,
            None => panic!("dangling node id: {}", id),
        }
    }

    /// Mutably borrow the node with the given id, panicking on a dangling id.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut AvlNode<K, V> {
        match self.arena.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id: {}", id),
        }
    }

    /// The entry held by a node.
    pub fn entry_of(&self, id: NodeId) -> &crate::types::Entry<K, V> {
        &self.node(id).entry
    }

    /// The parent id of a node, `NULL_NODE` for the root.
    pub fn parent_of(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    /// The lower child id of a node, `NULL_NODE` if absent.
    pub fn lower_of(&self, id: NodeId) -> NodeId {
        self.node(id).lower
    }

    /// The upper child id of a node, `NULL_NODE` if absent.
    pub fn upper_of(&self, id: NodeId) -> NodeId {
        self.node(id).upper
    }

    // ============================================================================
    // HEIGHT AND BALANCE
    // ============================================================================

    /// Cached height of a subtree; absent subtrees have height 0.
    #[inline]
    pub fn height_of(&self, id: NodeId) -> u32 {
        if id == NULL_NODE {
            0
        } else {
            self.node(id).height
        }
    }

    /// Recompute a node's height from its children's cached heights.
    ///
    /// Pure; callers refresh the cache with `update_height` after
    /// structural changes.
    pub fn compute_height(&self, id: NodeId) -> u32 {
        let node = self.node(id);
        1 + self.height_of(node.lower).max(self.height_of(node.upper))
    }

    /// Balance factor: `height(upper) - height(lower)`.
    ///
    /// Positive means upper-heavy, negative means lower-heavy.
    pub fn compute_balance(&self, id: NodeId) -> i32 {
        let node = self.node(id);
        self.height_of(node.upper) as i32 - self.height_of(node.lower) as i32
    }

    /// Write the recomputed height into the node's cache.
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let height = self.compute_height(id);
        self.node_mut(id).height = height;
    }

    // ============================================================================
    // CHILD REWIRING
    // ============================================================================

    /// Assign (or clear, with `NULL_NODE`) the lower child slot of `id`.
    ///
    /// The previous occupant of the slot has its parent cleared, and a
    /// non-null `child` is detached from its previous parent's slot before
    /// being adopted, so no two nodes ever claim the same child.
    pub fn set_lower(&mut self, id: NodeId, child: NodeId) {
        self.set_child(id, false, child);
    }

    /// Assign (or clear, with `NULL_NODE`) the upper child slot of `id`.
    ///
    /// Same rewiring contract as [`set_lower`](Self::set_lower).
    pub fn set_upper(&mut self, id: NodeId, child: NodeId) {
        self.set_child(id, true, child);
    }

    /// The single rewire primitive: child pointer and parent back-reference
    /// are always updated together.
    fn set_child(&mut self, id: NodeId, upper_side: bool, child: NodeId) {
        let occupant = if upper_side {
            self.node(id).upper
        } else {
            self.node(id).lower
        };

        if occupant == child {
            // Idempotent re-assignment; nothing to rewire.
            return;
        }

        if occupant != NULL_NODE {
            self.node_mut(occupant).parent = NULL_NODE;
        }

        if child != NULL_NODE {
            let previous = self.node(child).parent;
            if previous != NULL_NODE {
                if self.node(previous).lower == child {
                    self.node_mut(previous).lower = NULL_NODE;
                } else if self.node(previous).upper == child {
                    self.node_mut(previous).upper = NULL_NODE;
                }
            }
            self.node_mut(child).parent = id;
        }

        if upper_side {
            self.node_mut(id).upper = child;
        } else {
            self.node_mut(id).lower = child;
        }
    }

    // ============================================================================
    // NAVIGATION
    // ============================================================================

    /// Smallest-keyed node in the subtree rooted at `id`.
    pub fn minimum(&self, mut id: NodeId) -> NodeId {
        loop {
            let lower = self.node(id).lower;
            if lower == NULL_NODE {
                return id;
            }
            id = lower;
        }
    }

    /// Greatest-keyed node in the subtree rooted at `id`.
    pub fn maximum(&self, mut id: NodeId) -> NodeId {
        loop {
            let upper = self.node(id).upper;
            if upper == NULL_NODE {
                return id;
            }
            id = upper;
        }
    }

    /// Nearest ancestor reached from its upper side: climb while the node
    /// is its parent's lower child, then return that parent (`NULL_NODE` if
    /// the root is reached first).
    pub fn lower_parent(&self, mut id: NodeId) -> NodeId {
        let mut parent = self.node(id).parent;
        while parent != NULL_NODE && self.node(parent).lower == id {
            id = parent;
            parent = self.node(parent).parent;
        }
        parent
    }

    /// Mirror of [`lower_parent`](Self::lower_parent): climb while the node
    /// is its parent's upper child, then return that parent.
    pub fn upper_parent(&self, mut id: NodeId) -> NodeId {
        let mut parent = self.node(id).parent;
        while parent != NULL_NODE && self.node(parent).upper == id {
            id = parent;
            parent = self.node(parent).parent;
        }
        parent
    }

    /// Node immediately before `id` in key order, `NULL_NODE` at the minimum.
    pub fn predecessor(&self, id: NodeId) -> NodeId {
        let lower = self.node(id).lower;
        if lower != NULL_NODE {
            self.maximum(lower)
        } else {
            self.lower_parent(id)
        }
    }

    /// Node immediately after `id` in key order, `NULL_NODE` at the maximum.
    pub fn successor(&self, id: NodeId) -> NodeId {
        let upper = self.node(id).upper;
        if upper != NULL_NODE {
            self.minimum(upper)
        } else {
            self.upper_parent(id)
        }
    }

    // ============================================================================
    // ROTATIONS AND REBALANCING
    // ============================================================================

    /// Left rotation: the upper child pivots into this node's place.
    ///
    /// The pivot takes over this node's slot in its former parent (if any),
    /// this node becomes the pivot's lower child, and the pivot's former
    /// lower child becomes this node's upper child. Heights of the two
    /// rewired nodes are refreshed child-first. Returns the pivot.
    pub fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let pivot = self.node(id).upper;
        debug_assert!(pivot != NULL_NODE, "rotate_left requires an upper child");
        let parent = self.node(id).parent;
        let from_lower = parent != NULL_NODE && self.node(parent).lower == id;

        let pivot_lower = self.node(pivot).lower;
        self.set_upper(id, pivot_lower);
        self.set_lower(pivot, id);
        if parent != NULL_NODE {
            if from_lower {
                self.set_lower(parent, pivot);
            } else {
                self.set_upper(parent, pivot);
            }
        }

        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Right rotation: mirror of [`rotate_left`](Self::rotate_left),
    /// pivoting on the lower child.
    pub fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let pivot = self.node(id).lower;
        debug_assert!(pivot != NULL_NODE, "rotate_right requires a lower child");
        let parent = self.node(id).parent;
        let from_lower = parent != NULL_NODE && self.node(parent).lower == id;

        let pivot_upper = self.node(pivot).upper;
        self.set_lower(id, pivot_upper);
        self.set_upper(pivot, id);
        if parent != NULL_NODE {
            if from_lower {
                self.set_lower(parent, pivot);
            } else {
                self.set_upper(parent, pivot);
            }
        }

        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Restore the AVL balance at `id` if it is out of range, resolving the
    /// four heavy shapes with one or two rotations. Returns the node now at
    /// the top of this subtree.
    pub fn rebalance(&mut self, id: NodeId) -> NodeId {
        let balance = self.compute_balance(id);
        if balance > 1 {
            let upper = self.node(id).upper;
            if self.compute_balance(upper) < 0 {
                // Upper-lower shape: straighten before the main rotation.
                self.rotate_right(upper);
            }
            self.rotate_left(id)
        } else if balance < -1 {
            let lower = self.node(id).lower;
            if self.compute_balance(lower) > 0 {
                self.rotate_left(lower);
            }
            self.rotate_right(id)
        } else {
            id
        }
    }

    /// Walk from `from` to the top of the tree, refreshing heights and
    /// rebalancing every node on the path. Reports whether the tree root
    /// was replaced along the way.
    pub(crate) fn retrace(&mut self, from: NodeId) -> RootChange {
        let mut current = from;
        let top;
        loop {
            self.update_height(current);
            let local_root = self.rebalance(current);
            let parent = self.node(local_root).parent;
            if parent == NULL_NODE {
                top = local_root;
                break;
            }
            current = parent;
        }

        if top == self.root {
            RootChange::Unchanged
        } else {
            RootChange::NewRoot(top)
        }
    }

    /// Resynchronize the container's root pointer from a structural result.
    pub(crate) fn adopt_root(&mut self, change: RootChange) {
        match change {
            RootChange::Unchanged => {}
            RootChange::NewRoot(id) => self.root = id,
            RootChange::Emptied => self.root = NULL_NODE,
        }
    }
}
