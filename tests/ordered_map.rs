//! Public API scenario tests for OrderedMap.

use avltree::OrderedMap;

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut map = OrderedMap::new();
    for word in ["delta", "alpha", "charlie", "bravo"] {
        map.insert(word, word.len());
    }

    let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["delta", "alpha", "charlie", "bravo"]);
}

#[test]
fn test_duplicate_insert_keeps_position() {
    let mut map = OrderedMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    assert!(!map.insert("b", 20));

    let entries: Vec<(&str, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [("a", 1), ("b", 20), ("c", 3)]);
}

#[test]
fn test_churn_keeps_list_consistent() {
    let mut map = OrderedMap::new();

    for i in 0..100 {
        assert!(map.insert(i, i));
    }
    for i in (0..100).step_by(2) {
        assert!(map.remove(&i));
    }
    for i in (0..100).step_by(4) {
        assert!(map.insert(i, -i));
    }

    // Surviving odd keys first in original order, then the re-inserted
    // multiples of four in re-insertion order.
    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    let mut expected: Vec<i32> = (1..100).step_by(2).collect();
    expected.extend((0..100).step_by(4));
    assert_eq!(keys, expected);

    assert_eq!(map.lookup(&4), Some(&-4));
    assert_eq!(map.lookup(&3), Some(&3));
    assert_eq!(map.lookup(&2), None);
}

#[test]
fn test_lookup_mut() {
    let mut map = OrderedMap::new();
    map.insert("counter", 0);
    if let Some(value) = map.lookup_mut(&"counter") {
        *value += 5;
    }
    assert_eq!(map.lookup(&"counter"), Some(&5));
}

#[test]
fn test_vacate_then_reuse() {
    let mut map = OrderedMap::new();
    map.insert(1, 1);
    map.insert(2, 2);
    map.vacate();

    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    assert!(!map.remove(&1));

    assert!(map.insert(2, 2));
    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, [2]);
}

#[test]
fn test_into_iterator_for_reference() {
    let mut map = OrderedMap::new();
    map.insert(10, "x");
    map.insert(20, "y");

    let mut seen = Vec::new();
    for (key, value) in &map {
        seen.push((*key, *value));
    }
    assert_eq!(seen, [(10, "x"), (20, "y")]);
}
