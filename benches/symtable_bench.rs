use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use symtable::{HashSymTable, ListSymTable, SymTable};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled<T: SymTable<u64>>(seed: u64, n: usize) -> (T, Vec<String>) {
    let mut t = match T::try_new() {
        Ok(t) => t,
        Err(e) => panic!("table creation failed: {e}"),
    };
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert<T: SymTable<u64>>(c: &mut Criterion, name: &str, n: usize) {
    let keys: Vec<_> = lcg(1).take(n).map(key).collect();
    c.bench_function(name, |b| {
        b.iter_batched(
            || T::try_new().unwrap(),
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit<T: SymTable<u64>>(c: &mut Criterion, name: &str, n: usize) {
    let (t, keys) = filled::<T>(7, n);
    let mut it = keys.iter().cycle();
    c.bench_function(name, |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k));
        })
    });
}

fn bench_get_miss<T: SymTable<u64>>(c: &mut Criterion, name: &str, n: usize) {
    let (t, _) = filled::<T>(11, n);
    let mut miss = lcg(0xdead_beef);
    c.bench_function(name, |b| {
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(t.get(&k));
        })
    });
}

fn bench_remove<T: SymTable<u64>>(c: &mut Criterion, name: &str, n: usize) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || filled::<T>(5, n),
            |(mut t, keys)| {
                for k in &keys {
                    black_box(t.remove(k));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn hash_benches(c: &mut Criterion) {
    bench_insert::<HashSymTable<u64>>(c, "hash::insert_10k", 10_000);
    bench_get_hit::<HashSymTable<u64>>(c, "hash::get_hit_10k", 10_000);
    bench_get_miss::<HashSymTable<u64>>(c, "hash::get_miss_10k", 10_000);
    bench_remove::<HashSymTable<u64>>(c, "hash::remove_10k", 10_000);
}

// The list is linear per lookup; keep it small.
fn list_benches(c: &mut Criterion) {
    bench_insert::<ListSymTable<u64>>(c, "list::insert_500", 500);
    bench_get_hit::<ListSymTable<u64>>(c, "list::get_hit_500", 500);
    bench_get_miss::<ListSymTable<u64>>(c, "list::get_miss_500", 500);
    bench_remove::<ListSymTable<u64>>(c, "list::remove_500", 500);
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = hash_benches, list_benches
}
criterion_main!(benches);
