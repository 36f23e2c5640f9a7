//! Benchmarks for the ordered symbol table.
//!
//! The table is a flat ordered chain, so the interesting numbers are the O(n)
//! scans: how fast put/get/rank degrade as the chain grows, and whether the
//! O(1) paths (min, delete_min, append-at-tail detection) stay flat.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- put_random
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use ordlist::OrderedListTable;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic table construction
// ============================================================================

/// Table sizes to sweep in the scaling benchmarks
const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Build a table holding keys `0, 2, 4, ..` so every odd probe misses.
fn populate_even(count: usize) -> OrderedListTable<u64, u64> {
    let mut table = OrderedListTable::with_capacity(count);
    for i in 0..count {
        table.put(2 * i as u64, i as u64);
    }
    table
}

/// Deterministically shuffled key set, worst case for sorted insertion.
fn shuffled_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u64> = (0..count as u64).collect();
    keys.shuffle(&mut rng);
    keys
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// Insert keys in random order: every put scans to its insertion point.
fn bench_put_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_random");
    for size in SIZES {
        let keys = shuffled_keys(size, 1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter_batched(
                || OrderedListTable::with_capacity(keys.len()),
                |mut table| {
                    for &key in keys {
                        table.put(key, key);
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Insert keys in ascending order: every put appends at the tail.
fn bench_put_ascending(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_ascending");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || OrderedListTable::with_capacity(size),
                |mut table| {
                    for key in 0..size as u64 {
                        table.put(key, key);
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Point lookups, alternating hits and misses.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let table = populate_even(size);
        group.bench_with_input(BenchmarkId::new("hit", size), &table, |b, table| {
            let key = size as u64; // middle of the chain, present
            b.iter(|| black_box(table.get(black_box(&key))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &table, |b, table| {
            let key = size as u64 + 1; // middle of the chain, absent
            b.iter(|| black_box(table.get(black_box(&key))));
        });
    }
    group.finish();
}

/// Order statistics: rank scan vs select walk at the chain midpoint.
fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_statistics");
    for size in SIZES {
        let table = populate_even(size);
        let mid_key = size as u64;
        let mid_rank = size / 2;
        group.bench_with_input(BenchmarkId::new("rank", size), &table, |b, table| {
            b.iter(|| black_box(table.rank(black_box(&mid_key))));
        });
        group.bench_with_input(BenchmarkId::new("select", size), &table, |b, table| {
            b.iter(|| black_box(table.select(black_box(mid_rank))));
        });
    }
    group.finish();
}

/// Full key iteration.
fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys");
    for size in SIZES {
        let table = populate_even(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| -> u64 { table.keys().copied().sum() });
        });
    }
    group.finish();
}

/// Drain from the head: delete_min is O(1) per call.
fn bench_delete_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_min");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populate_even(size),
                |mut table| {
                    while table.delete_min().is_ok() {}
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_put_random,
    bench_put_ascending,
    bench_get,
    bench_order_statistics,
    bench_keys,
    bench_delete_min,
);
criterion_main!(benches);
