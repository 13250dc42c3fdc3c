#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// bucket placement directly.

use crate::hash_table::HashTable;
use crate::hasher::BucketHasher;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Put(i32, String),
    Remove(i32),
    Search(i32),
    Clear,
}

prop_compose! {
    // Small key space so overwrites and removals hit existing keys often.
    fn arb_key()(k in -40i32..40) -> i32 { k }
}

prop_compose! {
    fn arb_ops()(ops in proptest::collection::vec(
        prop_oneof![
            6 => (arb_key(), "[a-z]{0,4}").prop_map(|(k, v)| Op::Put(k, v)),
            3 => arb_key().prop_map(Op::Remove),
            3 => arb_key().prop_map(Op::Search),
            1 => Just(Op::Clear),
        ], 1..120)) -> Vec<Op> { ops }
}

fn run_against_model<H: BucketHasher>(
    mut sut: HashTable<H>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<i32, String> = HashMap::new();

    for op in ops {
        match op {
            Op::Put(k, v) => {
                let cap_before = sut.capacity();
                let is_new = !model.contains_key(&k);
                sut.put(k, v.clone());
                model.insert(k, v);
                if !is_new {
                    prop_assert_eq!(sut.capacity(), cap_before, "overwrite must not resize");
                }
                prop_assert!(sut.capacity() >= cap_before);
                prop_assert!(
                    (sut.len() as f64 / sut.capacity() as f64) < sut.load_factor(),
                    "table left at or above its load factor"
                );
            }
            Op::Remove(k) => {
                let cap_before = sut.capacity();
                prop_assert_eq!(sut.remove(k), model.remove(&k));
                prop_assert_eq!(sut.capacity(), cap_before, "removal never shrinks");
                prop_assert_eq!(sut.search(k), None);
            }
            Op::Search(k) => {
                prop_assert_eq!(sut.search(k), model.get(&k).map(String::as_str));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op
        sut.assert_consistent();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());

        let s_keys: BTreeSet<i32> = sut.keys().into_iter().collect();
        let m_keys: BTreeSet<i32> = model.keys().copied().collect();
        prop_assert_eq!(s_keys, m_keys);

        let mut s_vals: Vec<&str> = sut.values();
        let mut m_vals: Vec<&str> = model.values().map(String::as_str).collect();
        s_vals.sort_unstable();
        m_vals.sort_unstable();
        prop_assert_eq!(s_vals, m_vals);

        for &k in model.keys() {
            prop_assert_eq!(sut.locate(k), Some(sut.hasher_index(k)));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_state_machine(
        capacity in 1usize..8,
        load_factor in 0.05f64..=1.0,
        ops in arb_ops(),
    ) {
        let sut = HashTable::new(capacity, load_factor).unwrap();
        run_against_model(sut, ops)?;
    }
}

// Every key lands in bucket 0, so all lookups go through one long chain.
proptest! {
    #[test]
    fn prop_state_machine_with_collisions(capacity in 1usize..8, ops in arb_ops()) {
        let collide = |_k: i32, _n: usize| 0usize;
        let sut = HashTable::with_hasher(capacity, 0.75, collide).unwrap();
        run_against_model(sut, ops)?;
    }
}
