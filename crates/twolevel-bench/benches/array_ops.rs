//! Criterion micro-benchmarks for chunked array get, set, and chunk churn.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use twolevel_array::{NeverShrinkArray, SparseArray};
use twolevel_bench::{hot_region_profile, populate, scattered_profile};

const KEYS: usize = 4096;

fn bench_get(c: &mut Criterion) {
    let hot = hot_region_profile(42, KEYS);
    let arr = populate(&hot);
    c.bench_function("sparse_get_hot_region", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &key in &hot {
                sum = sum.wrapping_add(arr.get(black_box(key)));
            }
            sum
        });
    });

    let misses = scattered_profile(7, KEYS);
    c.bench_function("sparse_get_absent_chunks", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &key in &misses {
                sum = sum.wrapping_add(arr.get(black_box(key)));
            }
            sum
        });
    });
}

fn bench_set(c: &mut Criterion) {
    let hot = hot_region_profile(42, KEYS);
    let mut arr = populate(&hot);
    c.bench_function("sparse_overwrite_live_chunk", |b| {
        b.iter(|| {
            for &key in &hot {
                arr.set(black_box(key), 7);
            }
        });
    });

    let scattered = scattered_profile(3, 256);
    let mut empty: SparseArray<u64> = SparseArray::new();
    c.bench_function("sparse_clear_absent_chunk", |b| {
        b.iter(|| {
            for &key in &scattered {
                empty.set(black_box(key), 0);
            }
        });
    });
}

fn bench_churn(c: &mut Criterion) {
    let mut arr: SparseArray<u64, { i32::MAX as usize }, 1024> = SparseArray::new();
    let keys = scattered_profile(5, 64);
    c.bench_function("sparse_alloc_release_churn_1k_chunks", |b| {
        b.iter(|| {
            for &key in &keys {
                arr.set(key, 1);
            }
            for &key in &keys {
                arr.set(key, 0);
            }
        });
    });
}

fn bench_never_shrink(c: &mut Criterion) {
    let hot = hot_region_profile(42, KEYS);
    let mut arr: NeverShrinkArray<u64> = NeverShrinkArray::new();
    c.bench_function("never_shrink_index_mut_hot_region", |b| {
        b.iter(|| {
            for &key in &hot {
                arr[black_box(key)] += 1;
            }
        });
    });
}

criterion_group!(benches, bench_get, bench_set, bench_churn, bench_never_shrink);
criterion_main!(benches);
