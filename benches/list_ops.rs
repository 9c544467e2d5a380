// Criterion benchmarks: append cost with and without pre-sizing, and the
// hand-rolled quicksort against the standard library's unstable sort.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use custom_arraylist::{quicksort, ArrayList};

fn append_with_growth(n: usize) -> ArrayList<usize> {
    let mut list = ArrayList::new();
    for i in 0..n {
        list.add(i);
    }
    list
}

fn append_pre_sized(n: usize) -> ArrayList<usize> {
    let mut list = ArrayList::with_capacity(n);
    for i in 0..n {
        list.add(i);
    }
    list
}

fn benchmark_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for n in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("with_growth", n), &n, |b, &n| {
            b.iter(|| append_with_growth(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("pre_sized", n), &n, |b, &n| {
            b.iter(|| append_pre_sized(black_box(n)))
        });
    }

    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<i32> = (0..10_000).map(|_| rng.gen()).collect();

    group.bench_with_input(BenchmarkId::new("quicksort", data.len()), &data, |b, data| {
        b.iter(|| {
            let mut copy = data.clone();
            quicksort::sort(&mut copy);
            copy
        })
    });

    group.bench_with_input(BenchmarkId::new("std_unstable", data.len()), &data, |b, data| {
        b.iter(|| {
            let mut copy = data.clone();
            copy.sort_unstable();
            copy
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_append, benchmark_sort);
criterion_main!(benches);
