//! Performance benchmarks for the utility functions
//! Tracks the quadratic sort, deep flattening and full catalog evaluation

use arraylab::catalog::Catalog;
use arraylab::core::{bubble_sort, flatten_array, group_by_property, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;

/// Worst case for bubble sort: strictly descending input
fn descending(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// `[0, [1, [2, ...]]]` nested `depth` levels deep
fn nested(depth: usize) -> Vec<Value> {
    let mut value = json!([depth]);
    for n in (0..depth).rev() {
        value = json!([n, value]);
    }
    vec![value]
}

fn bench_bubble_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_sort");

    for size in [10, 100, 1000] {
        let sorted: Vec<i64> = (0..size as i64).collect();
        let reversed = descending(size);

        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, items| {
            b.iter(|| black_box(bubble_sort(items)));
        });
        group.bench_with_input(BenchmarkId::new("descending", size), &reversed, |b, items| {
            b.iter(|| black_box(bubble_sort(items)));
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_array");

    for depth in [10, 100, 1000] {
        let items = nested(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &items, |b, items| {
            b.iter(|| black_box(flatten_array(items)));
        });
    }

    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_property");

    for size in [100, 1000] {
        let records: Vec<Record> = (0..size)
            .map(|i| {
                let mut record = Record::new();
                record.insert("id".to_string(), json!(i));
                record.insert("bucket".to_string(), json!(i % 16));
                record
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("records", size), &records, |b, records| {
            b.iter(|| black_box(group_by_property(records, "bucket")));
        });
    }

    group.finish();
}

fn bench_catalog_load(c: &mut Criterion) {
    c.bench_function("catalog_load", |b| b.iter(|| black_box(Catalog::load())));
}

criterion_group!(
    benches,
    bench_bubble_sort,
    bench_flatten,
    bench_group_by,
    bench_catalog_load
);
criterion_main!(benches);
