// Bucket placement for HashSymTable.
//
// The hash is recomputed here independently of the crate so that a change
// to the multiplier, the wrapping width, or the byte signedness shows up as
// a placement mismatch.
use std::collections::BTreeSet;
use symtable::hash::{hash_key, BUCKET_COUNTS};
use symtable::{HashSymTable, SymTable, DEFAULT_BUCKET_COUNT};

fn reference_hash(key: &str) -> usize {
    let mut h: usize = 0;
    for &b in key.as_bytes() {
        h = h.wrapping_mul(65599).wrapping_add(usize::from(b));
    }
    h
}

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Test: 1000 distinct short keys in the default table.
// Verifies: every key sits in reference_hash(key) % 509, the bucket chains
// together hold exactly the 1000 bindings, and none are lost.
#[test]
fn thousand_keys_land_in_their_buckets() {
    let keys: Vec<String> = (0..1000).map(|i| format!("k{i}")).collect();
    let mut t: HashSymTable<usize> = HashSymTable::new();
    assert_eq!(t.bucket_count(), 509);
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i).unwrap();
    }
    assert_eq!(t.len(), 1000);

    for (i, k) in keys.iter().enumerate() {
        let expected = reference_hash(k) % 509;
        assert_eq!(t.bucket_of(k), expected, "bucket of {k}");
        assert!(
            t.iter_bucket(expected).any(|(bk, v)| bk == k.as_str() && *v == i),
            "{k} missing from bucket {expected}"
        );
    }

    let per_bucket: usize = (0..t.bucket_count()).map(|b| t.bucket_len(b)).sum();
    assert_eq!(per_bucket, 1000);
    let all: BTreeSet<&str> = t.iter().map(|(k, _)| k).collect();
    assert_eq!(all.len(), 1000);
}

// Test: random keys in the larger prime table.
// Verifies: placement holds for arbitrary-looking keys and a non-default
// bucket count.
#[test]
fn random_keys_in_larger_table() {
    let n = BUCKET_COUNTS[1];
    let mut t: HashSymTable<u64> = HashSymTable::with_buckets(n);
    for x in lcg(7).take(2000) {
        let k = format!("{x:016x}");
        t.insert(&k, x).unwrap();
    }
    assert_eq!(t.len(), 2000);
    for b in 0..n {
        for (k, v) in t.iter_bucket(b) {
            assert_eq!(reference_hash(k) % n, b);
            assert_eq!(format!("{v:016x}"), k);
        }
    }
}

// Test: the public hash agrees with the reference, including bytes >= 0x80.
#[test]
fn public_hash_matches_reference() {
    for k in ["", "a", "symbol", "ÀÉÎ", "日本語", "\u{7f}\u{80}"] {
        assert_eq!(hash_key(k), reference_hash(k), "hash of {k:?}");
    }
    assert_eq!(DEFAULT_BUCKET_COUNT, 509);
}

// Test: removals keep the remaining bindings placed.
#[test]
fn removal_keeps_chains_consistent() {
    let mut t: HashSymTable<u32> = HashSymTable::with_buckets(7);
    for i in 0..100 {
        t.insert(&format!("r{i}"), i).unwrap();
    }
    for i in (0..100).filter(|i| i % 3 == 0) {
        assert_eq!(t.remove(&format!("r{i}")), Some(i));
    }
    let remaining: usize = (0..7).map(|b| t.bucket_len(b)).sum();
    assert_eq!(remaining, t.len());
    assert_eq!(t.len(), 66);
    for b in 0..7 {
        for (k, _) in t.iter_bucket(b) {
            assert_eq!(reference_hash(k) % 7, b);
        }
    }
}
