//! Public API scenario tests for AvlTreeMap.

use avltree::{AvlTreeMap, RangeConstraint, RangeOperator};

fn odd_tree() -> AvlTreeMap<i32, i32> {
    let mut tree = AvlTreeMap::new();
    for key in [5, 1, 9, 3, 7] {
        tree.insert(key, key * 10);
    }
    tree
}

#[test]
fn test_insert_lookup_remove_round_trip() {
    let mut tree = AvlTreeMap::new();

    for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        assert!(tree.insert(key, key.to_string()));
    }
    assert_eq!(tree.len(), 9);
    assert!(tree.check_invariants());

    for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        assert_eq!(tree.get(&key), Some(&key.to_string()));
        assert!(tree.contains_key(&key));
    }
    assert_eq!(tree.get(&99), None);

    for key in [3, 14, 8] {
        assert!(tree.remove(&key));
        assert!(!tree.contains_key(&key));
        assert!(tree.check_invariants());
    }
    assert!(!tree.remove(&3));
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_duplicate_insert_replaces_value_without_growth() {
    let mut tree = AvlTreeMap::new();
    assert!(tree.insert(1, "first"));
    assert!(!tree.insert(1, "second"));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&1), Some(&"second"));
    assert_eq!(tree.arena_stats().allocated_count, 1);
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut tree = odd_tree();
    if let Some(value) = tree.get_mut(&5) {
        *value = 500;
    }
    assert_eq!(tree.get(&5), Some(&500));
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_locate_floor_and_ceiling() {
    let tree = odd_tree();

    let locate = |op, key| {
        tree.locate(&RangeConstraint::new(op, key))
            .map(|(k, _)| *k)
    };

    // Pivot between keys.
    assert_eq!(locate(RangeOperator::Lt, 6), Some(5));
    assert_eq!(locate(RangeOperator::Le, 6), Some(5));
    assert_eq!(locate(RangeOperator::Eq, 6), None);
    assert_eq!(locate(RangeOperator::Ge, 6), Some(7));
    assert_eq!(locate(RangeOperator::Gt, 6), Some(7));

    // Pivot on an existing key.
    assert_eq!(locate(RangeOperator::Lt, 5), Some(3));
    assert_eq!(locate(RangeOperator::Le, 5), Some(5));
    assert_eq!(locate(RangeOperator::Eq, 5), Some(5));
    assert_eq!(locate(RangeOperator::Ge, 5), Some(5));
    assert_eq!(locate(RangeOperator::Gt, 5), Some(7));

    // Pivot outside the key range.
    assert_eq!(locate(RangeOperator::Lt, 1), None);
    assert_eq!(locate(RangeOperator::Gt, 9), None);
}

#[test]
fn test_filter_with_bound_pair() {
    let tree = odd_tree();
    let keys: Vec<i32> = tree
        .filter(vec![
            RangeConstraint::new(RangeOperator::Ge, 3),
            RangeConstraint::new(RangeOperator::Lt, 9),
        ])
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(keys, [3, 5, 7]);
}

#[test]
fn test_iteration_is_sorted_and_restartable() {
    let tree = odd_tree();

    let first: Vec<i32> = tree.items().map(|(k, _)| *k).collect();
    let second: Vec<i32> = tree.items().map(|(k, _)| *k).collect();
    assert_eq!(first, [1, 3, 5, 7, 9]);
    assert_eq!(first, second);

    let via_ref: Vec<i32> = (&tree).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(via_ref, first);
}

#[test]
fn test_clear_allows_reuse() {
    let mut tree = odd_tree();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.items().count(), 0);
    assert_eq!(tree.first(), None);

    assert!(tree.insert(42, 0));
    assert_eq!(tree.len(), 1);
    assert!(tree.check_invariants());
}

#[test]
fn test_empty_tree_edge_cases() {
    let mut tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();

    assert_eq!(tree.get(&1), None);
    assert!(!tree.remove(&1));
    assert_eq!(tree.locate(&RangeConstraint::new(RangeOperator::Le, 1)), None);
    assert_eq!(tree.height(), 0);
    assert!(tree.check_invariants());
}

#[test]
fn test_string_keys() {
    let mut tree = AvlTreeMap::new();
    for word in ["pear", "apple", "quince", "banana", "fig"] {
        tree.insert(word.to_string(), word.len());
    }

    let keys: Vec<&str> = tree.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["apple", "banana", "fig", "pear", "quince"]);
    assert_eq!(tree.get(&"fig".to_string()), Some(&3));

    let ceiling = tree.locate(&RangeConstraint::new(RangeOperator::Ge, "cherry".to_string()));
    assert_eq!(ceiling.map(|(k, _)| k.as_str()), Some("fig"));
}

#[test]
fn test_large_mixed_workload_stays_balanced() {
    let mut tree = AvlTreeMap::new();

    for key in 0..500 {
        tree.insert(key, key);
    }
    for key in (0..500).step_by(3) {
        assert!(tree.remove(&key));
    }
    for key in (1000..1100).rev() {
        tree.insert(key, key);
    }

    assert!(tree.check_invariants_detailed().is_ok());
    // 500 - 167 removed + 100 new
    assert_eq!(tree.len(), 433);
    assert!(tree.height() <= 12);

    let keys: Vec<i32> = tree.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
