//! Randomized properties for the B-tree engine.
//!
//! Two angles: agreement with `std::collections::BTreeMap` as a reference
//! model under arbitrary operation sequences, and the insert-then-remove
//! round-trip returning the tree to empty regardless of ordering.

use std::collections::BTreeMap;

use proptest::prelude::*;

use branchdb::{BTree, Key};

#[derive(Debug, Clone)]
enum Op {
    Insert(Key, i64),
    Remove(Key),
    Search(Key),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow key range forces plenty of duplicate inserts and hits.
    let key = -40i64..40;
    prop_oneof![
        (key.clone(), any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        key.clone().prop_map(Op::Remove),
        key.prop_map(Op::Search),
    ]
}

proptest! {
    #[test]
    fn matches_btreemap_model(
        ops in proptest::collection::vec(op_strategy(), 1..300),
        t in 2usize..6,
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model: BTreeMap<Key, i64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let inserted = tree.insert(key, value);
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    if inserted {
                        model.insert(key, value);
                    }
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(key), model.remove(&key));
                }
                Op::Search(key) => {
                    prop_assert_eq!(tree.search(key), model.get(&key).copied());
                }
            }
            tree.assert_invariants();
            prop_assert_eq!(tree.len(), model.len());
        }

        let pairs: Vec<(Key, i64)> = tree.pairs().iter().map(|p| (p.key, p.value)).collect();
        let expected: Vec<(Key, i64)> = model.into_iter().collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn round_trip_returns_to_empty(
        (keys, removal_order) in proptest::collection::btree_set(-1000i64..1000, 1..120)
            .prop_flat_map(|set| {
                let keys: Vec<Key> = set.into_iter().collect();
                let shuffled = Just(keys.clone()).prop_shuffle();
                (Just(keys), shuffled)
            }),
        t in 2usize..5,
    ) {
        let mut tree = BTree::new(t).unwrap();
        for &key in &keys {
            prop_assert!(tree.insert(key, key));
        }
        tree.assert_invariants();
        prop_assert_eq!(tree.len(), keys.len());

        for &key in &removal_order {
            prop_assert_eq!(tree.remove(key), Some(key));
            tree.assert_invariants();
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.pairs(), vec![]);
    }
}
