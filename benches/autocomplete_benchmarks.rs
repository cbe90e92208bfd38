//! Autocomplete Benchmarks
//!
//! Benchmarks for the trie and the prefix index, implemented with the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use autocomplete_lib::bench::{synthetic_index, synthetic_vocabulary};
use autocomplete_lib::prefix_index::PrefixIndex;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

const SEED: u64 = 0x5eed;

/// Benchmark building an index from a vocabulary.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index_add");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = synthetic_vocabulary(*size, SEED);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add", size), &words, |b, words| {
            b.iter(|| {
                let mut index = PrefixIndex::new();
                black_box(index.add(words))
            });
        });
    }

    group.finish();
}

/// Benchmark membership checks against a loaded index.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index_contains");
    let index = synthetic_index(100_000, SEED);
    let probes = synthetic_vocabulary(1_000, SEED ^ 1);

    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("contains", |b| {
        b.iter(|| probes.iter().filter(|w| index.contains(black_box(w))).count());
    });

    group.finish();
}

/// Benchmark prefix enumeration with and without a depth bound.
fn bench_prefix_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index_query");
    let mut index = synthetic_index(100_000, SEED);

    for prefix in ["ee", "eta", "tao"].iter() {
        group.bench_with_input(BenchmarkId::new("unbounded", prefix), prefix, |b, prefix| {
            b.iter(|| index.words_with_prefix(black_box(prefix)).count());
        });
        for depth in [1_i64, 4].iter() {
            let id = format!("{prefix}/depth={depth}");
            group.bench_with_input(BenchmarkId::new("bounded", id), depth, |b, &depth| {
                b.iter(|| {
                    index
                        .words_with_prefix_depth(black_box(prefix), depth)
                        .map(Iterator::count)
                        .unwrap_or_default()
                });
            });
        }
    }

    group.finish();
}

/// Benchmark deleting words through an enumeration.
fn bench_remove_while_enumerating(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index_remove");

    group.bench_function("remove_prefix", |b| {
        b.iter_batched(
            || synthetic_index(10_000, SEED),
            |mut index| {
                let mut words = index.words_with_prefix("et");
                while words.next().is_some() {
                    words.remove().expect("produced word is removable");
                }
                index.size()
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_contains,
    bench_prefix_queries,
    bench_remove_while_enumerating
);
criterion_main!(benches);
