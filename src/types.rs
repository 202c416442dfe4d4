//! Core types and data structures for AvlTreeMap.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the AVL tree implementation.

use std::cmp::Ordering;

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node id type for arena-based allocation.
pub type NodeId = u32;

/// Sentinel id for an absent node (no parent, no child, empty tree).
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// KEY ORDERING
// ============================================================================

/// Total-order comparison injected into the tree.
///
/// All key comparisons performed by the tree go through this trait, so keys
/// do not have to implement `Ord` themselves as long as a comparator can
/// order them.
pub trait Comparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Default comparator delegating to the key's `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Key-value pairing held by a node.
///
/// The key is fixed for the life of the entry; the value can be replaced
/// or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Tree node stored in the arena.
///
/// A node owns its entry and links to its neighbors by id: `lower` and
/// `upper` are its children (every key below `lower` sorts before this
/// node's key, every key below `upper` sorts after), and `parent` is a
/// non-owning back-reference used only for upward navigation.
#[derive(Debug, Clone)]
pub struct AvlNode<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) parent: NodeId,
    pub(crate) lower: NodeId,
    pub(crate) upper: NodeId,
    /// Cached subtree height: 1 for a leaf, absent children count as 0.
    pub(crate) height: u32,
}

impl<K, V> AvlNode<K, V> {
    pub(crate) fn new(entry: Entry<K, V>) -> Self {
        Self {
            entry,
            parent: NULL_NODE,
            lower: NULL_NODE,
            upper: NULL_NODE,
            height: 1,
        }
    }
}

/// An ordered map backed by an AVL tree with a dict-like API.
///
/// Keys are kept in comparator order at all times, which makes exact lookup,
/// ordered range filtering, and floor/ceiling location all O(log n).
///
/// # Type Parameters
///
/// * `K` - Key type, ordered by the comparator `C`
/// * `V` - Value type
/// * `C` - Comparator; defaults to [`NaturalOrder`] for `K: Ord`
///
/// # Examples
///
/// ```
/// use avltree::{AvlTreeMap, RangeConstraint, RangeOperator};
///
/// let mut tree = AvlTreeMap::new();
/// tree.insert(1, "one");
/// tree.insert(3, "three");
/// tree.insert(5, "five");
///
/// assert_eq!(tree.get(&3), Some(&"three"));
/// assert_eq!(tree.len(), 3);
///
/// // Floor query: greatest key strictly below 4.
/// let floor = tree.locate(&RangeConstraint::new(RangeOperator::Lt, 4));
/// assert_eq!(floor, Some((&3, &"three")));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Range filtering**: O(log n + k) where k is the number of matches
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct AvlTreeMap<K, V, C = NaturalOrder> {
    /// Root node of the tree, or `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of entries currently reachable from the root.
    pub(crate) len: usize,
    /// Arena storage owning every node.
    pub(crate) arena: Arena<AvlNode<K, V>>,
    /// Injected key ordering.
    pub(crate) comparator: C,
}

// ============================================================================
// RANGE CONSTRAINTS
// ============================================================================

/// Comparison operator used by range filtering and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOperator {
    /// `<` — strictly below the constraint key.
    Lt,
    /// `<=` — at or below the constraint key.
    Le,
    /// `=` — exactly the constraint key.
    Eq,
    /// `>=` — at or above the constraint key.
    Ge,
    /// `>` — strictly above the constraint key.
    Gt,
}

impl RangeOperator {
    /// Whether a key comparing to the constraint key as `ordering`
    /// satisfies this operator.
    #[inline]
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            RangeOperator::Lt => ordering == Ordering::Less,
            RangeOperator::Le => ordering != Ordering::Greater,
            RangeOperator::Eq => ordering == Ordering::Equal,
            RangeOperator::Ge => ordering != Ordering::Less,
            RangeOperator::Gt => ordering == Ordering::Greater,
        }
    }

    /// Whether this operator bounds keys from below (`>`, `>=`, `=`).
    #[inline]
    pub(crate) fn bounds_below(&self) -> bool {
        matches!(
            self,
            RangeOperator::Gt | RangeOperator::Ge | RangeOperator::Eq
        )
    }

    /// Whether this operator bounds keys from above (`<`, `<=`, `=`).
    #[inline]
    pub(crate) fn bounds_above(&self) -> bool {
        matches!(
            self,
            RangeOperator::Lt | RangeOperator::Le | RangeOperator::Eq
        )
    }
}

impl std::fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            RangeOperator::Lt => "<",
            RangeOperator::Le => "<=",
            RangeOperator::Eq => "=",
            RangeOperator::Ge => ">=",
            RangeOperator::Gt => ">",
        };
        write!(f, "{}", symbol)
    }
}

/// A single bound on the keys visited by [`AvlTreeMap::filter`] or located
/// by [`AvlTreeMap::locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConstraint<K> {
    pub operator: RangeOperator,
    pub key: K,
}

impl<K> RangeConstraint<K> {
    pub fn new(operator: RangeOperator, key: K) -> Self {
        Self { operator, key }
    }
}

// ============================================================================
// STRUCTURAL RESULT TYPES
// ============================================================================

/// Outcome of a structural mutation, as observed by the root owner.
///
/// Rotations can replace the top of the mutated subtree, so insertion and
/// removal report explicitly whether the container must adopt a new root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootChange {
    /// The subtree root is unchanged.
    Unchanged,
    /// The subtree has a new root node.
    NewRoot(NodeId),
    /// The subtree is now empty.
    Emptied,
}
