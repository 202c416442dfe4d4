use avltree::{AvlTreeMap, RangeConstraint, RangeOperator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled_keys(count: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..count as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(42));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in &SIZES {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("avl_tree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = AvlTreeMap::new();
                for &key in keys {
                    tree.insert(black_box(key), key);
                }
                black_box(tree.len());
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BTreeMap::new();
                for &key in keys {
                    tree.insert(black_box(key), key);
                }
                black_box(tree.len());
            })
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for &size in &SIZES {
        let keys = shuffled_keys(size);
        let avl: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let std: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("avl_tree", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(avl.get(black_box(key)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btree", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(std.get(black_box(key)));
                }
            })
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for &size in &SIZES {
        let keys = shuffled_keys(size);
        let avl: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let std: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("avl_tree", size), &(), |b, _| {
            b.iter(|| black_box(avl.items().count()))
        });

        group.bench_with_input(BenchmarkId::new("std_btree", size), &(), |b, _| {
            b.iter(|| black_box(std.iter().count()))
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_filter");

    for &size in &SIZES {
        let keys = shuffled_keys(size);
        let avl: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let std: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        let start = size as u64 / 4;
        let end = start + size as u64 / 10;

        group.bench_with_input(BenchmarkId::new("avl_tree", size), &(), |b, _| {
            b.iter(|| {
                let constraints = vec![
                    RangeConstraint::new(RangeOperator::Ge, start),
                    RangeConstraint::new(RangeOperator::Lt, end),
                ];
                black_box(avl.filter(constraints).count())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btree", size), &(), |b, _| {
            b.iter(|| black_box(std.range(start..end).count()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_iterate, bench_filter);
criterion_main!(benches);
