// HashTable property tests (public API).
//
// Property 1: round-trip. For any batch of (key, value) puts, search
//  returns the last value written for each key and len() equals the
//  number of distinct keys.
// Property 2: occupancy. After every put, len / capacity < load_factor,
//  and capacity only ever grows by whole GROWTH_COEFFICIENT steps.
// Property 3: accounting. Under any put/remove mix, is_empty() iff
//  len() == 0, and keys()/values() have exactly len() elements.
use chain_table::{HashTable, GROWTH_COEFFICIENT};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn prop_round_trip(
        capacity in 1usize..16,
        load_factor in 0.1f64..=1.0,
        puts in proptest::collection::vec((any::<i32>(), "[a-z0-9]{0,8}"), 0..200),
    ) {
        let mut t = HashTable::new(capacity, load_factor).unwrap();
        let mut last: HashMap<i32, String> = HashMap::new();
        for (k, v) in puts {
            t.put(k, v.clone());
            last.insert(k, v);
        }
        prop_assert_eq!(t.len(), last.len());
        for (k, v) in &last {
            prop_assert_eq!(t.search(*k), Some(v.as_str()));
        }
    }
}

proptest! {
    #[test]
    fn prop_occupancy_below_threshold(
        capacity in 1usize..16,
        load_factor in 0.05f64..=1.0,
        keys in proptest::collection::vec(-500i32..500, 1..300),
    ) {
        let mut t = HashTable::new(capacity, load_factor).unwrap();
        for k in keys {
            let before = t.capacity();
            t.put(k, "v");
            let after = t.capacity();
            prop_assert!((t.len() as f64 / after as f64) < load_factor);
            // after == before * GROWTH_COEFFICIENT^n for some n >= 0
            let mut c = before;
            while c < after {
                c *= GROWTH_COEFFICIENT;
            }
            prop_assert_eq!(c, after);
        }
    }
}

proptest! {
    #[test]
    fn prop_accounting(ops in proptest::collection::vec((any::<bool>(), 0i32..32), 1..150)) {
        let mut t = HashTable::new(4, 0.75).unwrap();
        let mut model: HashMap<i32, String> = HashMap::new();
        for (is_put, k) in ops {
            if is_put {
                t.put(k, format!("{k}"));
                model.insert(k, format!("{k}"));
            } else {
                prop_assert_eq!(t.remove(k), model.remove(&k));
            }
            prop_assert_eq!(t.is_empty(), t.len() == 0);
            prop_assert_eq!(t.len(), model.len());
            prop_assert_eq!(t.keys().len(), t.len());
            prop_assert_eq!(t.values().len(), t.len());
            for k in t.keys() {
                prop_assert!(model.contains_key(&k));
            }
        }
    }
}
