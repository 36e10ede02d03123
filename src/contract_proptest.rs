#![cfg(test)]

// Property tests for the shared contract, run against every flavor. Kept
// inside the crate so they can also check per-bucket placement.

use crate::contract::SymTable;
use crate::error::InsertError;
use crate::hash::{bucket_index, HashSymTable};
use crate::list::ListSymTable;
use crate::table::{Backend, Table};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Replace(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Visit,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-zA-Z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Replace(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-zA-Z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Visit),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drive `sut` through `ops` and compare against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected and leave the binding untouched.
// - `replace` returns the prior value and keeps `len`.
// - `remove` returns the stored value; absent keys yield `None`.
// - `contains`/`get` parity with the model, byte-exact and case-sensitive.
// - `for_each` visits each live binding exactly once.
// - `len`/`is_empty` parity after every op, including failed ones.
fn run_model<T: SymTable<i32>>(
    mut sut: T,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<T, TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let already = model.contains_key(k);
                match sut.insert(k, v) {
                    Ok(()) => {
                        prop_assert!(!already, "insert must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(already, "duplicate error only when key exists");
                    }
                    Err(e) => prop_assert!(false, "unexpected insert error: {}", e),
                }
            }
            OpI::Replace(i, v) => {
                let k = &pool[i];
                let prev = sut.replace(k, v);
                let expected = model.get_mut(k).map(|m| std::mem::replace(m, v));
                prop_assert_eq!(prev, expected);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                if let Some(v) = sut.get_mut(k) {
                    *v = v.saturating_add(d);
                    let mv = model.get_mut(k).expect("model has live key");
                    *mv = mv.saturating_add(d);
                } else {
                    prop_assert!(!model.contains_key(k));
                }
            }
            OpI::Visit => {
                let mut seen: BTreeMap<String, i32> = BTreeMap::new();
                let mut dup = false;
                sut.for_each(|k, v| dup |= seen.insert(k.to_string(), *v).is_some());
                prop_assert!(!dup, "a binding was visited twice");
                let expected: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.iter().count(), model.len());
    }
    Ok(sut)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_matches_model((pool, ops) in arb_scenario()) {
        run_model(ListSymTable::new(), &pool, ops)?;
    }

    #[test]
    fn prop_hash_matches_model((pool, ops) in arb_scenario()) {
        let t = run_model(HashSymTable::new(), &pool, ops)?;
        for b in 0..t.bucket_count() {
            for (k, _) in t.iter_bucket(b) {
                prop_assert_eq!(bucket_index(k, t.bucket_count()), b);
            }
        }
    }

    // Worst-case collisions: every binding shares one chain.
    #[test]
    fn prop_hash_single_bucket_matches_model((pool, ops) in arb_scenario()) {
        let t = run_model(HashSymTable::with_buckets(1), &pool, ops)?;
        prop_assert_eq!(t.bucket_len(0), t.len());
    }

    // Both flavors end in the same set of bindings after the same ops.
    #[test]
    fn prop_list_and_hash_agree((pool, ops) in arb_scenario()) {
        let l = run_model(Table::new(Backend::List), &pool, ops.clone())?;
        let h = run_model(Table::new(Backend::Hash), &pool, ops)?;
        let lb: BTreeMap<&str, i32> = l.iter().map(|(k, v)| (k, *v)).collect();
        let hb: BTreeMap<&str, i32> = h.iter().map(|(k, v)| (k, *v)).collect();
        prop_assert_eq!(lb, hb);
    }
}
