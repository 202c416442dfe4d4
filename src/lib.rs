//! AVL tree implementation in Rust with dict-like API.
//!
//! This crate provides a self-balancing binary search tree with a
//! dictionary-like interface, supporting efficient insertion, deletion,
//! lookup, ordered iteration, range filtering, and floor/ceiling queries.
//! Nodes live in an index-based arena, and the key order is pluggable
//! through the [`Comparator`] trait.
//!
//! Two companion structures ship alongside the tree: [`OrderedMap`], a
//! hash map that remembers insertion order, and the [`chunk`] module for
//! converting strings to and from byte buffers in several encodings.

mod arena;
mod error;
mod types;
mod construction;
mod node;
mod get_operations;
mod insert_operations;
mod delete_operations;
mod iteration;
mod validation;
mod ordered_map;
pub mod chunk;

pub use arena::{Arena, ArenaStats};
pub use error::{AvlTreeError, KeyResult, ModifyResult, TreeResult};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use ordered_map::{OrderedMap, OrderedMapIterator};
pub use types::{
    AvlTreeMap, Comparator, Entry, NaturalOrder, NodeId, RangeConstraint, RangeOperator,
    RootChange, NULL_NODE,
};

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Insert with invariant validation before and after the operation.
    ///
    /// Returns true if the key was newly inserted, false if an existing
    /// entry's value was replaced.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<bool> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::data_integrity("Pre-insert validation", &e));
        }

        let inserted = self.insert(key, value);

        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::data_integrity("Post-insert validation", &e));
        }

        Ok(inserted)
    }

    /// Remove with invariant validation before and after the operation.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<()> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::data_integrity("Pre-remove validation", &e));
        }

        if !self.remove(key) {
            return Err(AvlTreeError::KeyNotFound);
        }

        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::data_integrity("Post-remove validation", &e));
        }

        Ok(())
    }
}
