//! Benchmarks for lsmkv memtable operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lsmkv::memtable::{MemTable, Operation};

/// Deterministic key order that is neither ascending nor descending
fn scattered_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{:08}", (i * 7919) % n)).collect()
}

fn filled(keys: &[String]) -> MemTable {
    let mut memtable = MemTable::new();
    for key in keys {
        memtable.operate(key.as_str(), Operation::set("value"));
    }
    memtable
}

fn memtable_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("memtable");

    for &n in &[1_000usize, 10_000] {
        let keys = scattered_keys(n);

        group.bench_with_input(BenchmarkId::new("operate_scattered", n), &keys, |b, keys| {
            b.iter(|| black_box(filled(keys)))
        });

        let memtable = filled(&keys);
        group.bench_with_input(BenchmarkId::new("lookup_hit", n), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(memtable.lookup(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("lookup_miss", n), &n, |b, _| {
            b.iter(|| black_box(memtable.lookup("zzzz")))
        });
    }

    group.finish();
}

criterion_group!(benches, memtable_benchmarks);
criterion_main!(benches);
