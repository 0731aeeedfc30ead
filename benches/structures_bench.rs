//! Insert/find/delete benchmark across the three containers.
//!
//! This is the harness side of the crate's contract: it drives every
//! container exclusively through [`Benchable`] and compares wall-clock
//! cost at several sizes. Keys are uniformly random, so interpolation-
//! friendly distributions and BST shapes are both "average case" here;
//! Criterion's own warm-up and statistics replace any manual warm-up or
//! process priority tuning.

use benchable_sets::prelude::*;
use criterion::measurement::WallTime;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

fn random_keys(count: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| rng.random_range(0..1_000_000_i64))
        .collect()
}

fn batch_size_for(size: usize) -> BatchSize {
    if size < 1_000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn bench_insert<S>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, size: usize, keys: &[i64])
where
    S: Benchable + FromIterator<i64>,
{
    group.bench_with_input(BenchmarkId::new(name, size), keys, |bencher, keys| {
        bencher.iter_batched(
            || keys.to_vec(),
            |keys| black_box(keys.into_iter().collect::<S>().len()),
            batch_size_for(size),
        );
    });
}

fn bench_find<S>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, size: usize, keys: &[i64])
where
    S: Benchable + FromIterator<i64>,
{
    let structure: S = keys.iter().copied().collect();
    group.bench_with_input(BenchmarkId::new(name, size), keys, |bencher, keys| {
        bencher.iter(|| {
            let mut hits = 0usize;
            for &key in keys {
                if structure.find(black_box(key)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

fn bench_delete<S>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, size: usize, keys: &[i64])
where
    S: Benchable + FromIterator<i64> + Clone,
{
    let structure: S = keys.iter().copied().collect();
    group.bench_with_input(BenchmarkId::new(name, size), keys, |bencher, keys| {
        bencher.iter_batched(
            || structure.clone(),
            |mut structure| {
                for &key in keys {
                    structure.delete(black_box(key));
                }
                black_box(structure.len())
            },
            batch_size_for(size),
        );
    });
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");
    for size in SIZES {
        let keys = random_keys(size);
        bench_insert::<UnsortedArray>(&mut group, "unsorted_array", size, &keys);
        bench_insert::<SortedArray>(&mut group, "sorted_array", size, &keys);
        bench_insert::<IntervalBst>(&mut group, "interval_bst", size, &keys);
    }
    group.finish();
}

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");
    for size in SIZES {
        let keys = random_keys(size);
        bench_find::<UnsortedArray>(&mut group, "unsorted_array", size, &keys);
        bench_find::<SortedArray>(&mut group, "sorted_array", size, &keys);
        bench_find::<IntervalBst>(&mut group, "interval_bst", size, &keys);
    }
    group.finish();
}

/// SortedArray's two strategies head to head, outside the uniform contract.
fn benchmark_search_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_search");
    for size in SIZES {
        let keys = random_keys(size);
        let array: SortedArray = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("binary", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut hits = 0usize;
                for &key in keys {
                    if array.binary_search(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("interpolation", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut hits = 0usize;
                    for &key in keys {
                        if array.interpolation_search(black_box(key)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                });
            },
        );
    }
    group.finish();
}

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");
    for size in SIZES {
        let keys = random_keys(size);
        bench_delete::<UnsortedArray>(&mut group, "unsorted_array", size, &keys);
        bench_delete::<SortedArray>(&mut group, "sorted_array", size, &keys);
        bench_delete::<IntervalBst>(&mut group, "interval_bst", size, &keys);
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_search_strategies,
    benchmark_delete,
);
criterion_main!(benches);
