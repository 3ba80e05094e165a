//! Vector search benchmarks for the flat index and the ingest path.
//!
//! - `flat_search/<n>`: linear scan over `n` random 384-d vectors, top 10
//! - `rebuild/<n>`: full index rebuild from `n` vectors (the per-ingest cost)
//! - `search_1000_docs`: end-to-end through `Semsearch` with the hashing embedder
//!
//! # Running
//!
//! ```bash
//! cargo bench --bench vec_search_benchmark
//! ```

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use semsearch_core::{HashingEmbedder, Semsearch, VecIndex};

const DIMENSION: usize = 384;

fn random_vectors(count: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| (0..DIMENSION).map(|_| rng.f32() - 0.5).collect())
        .collect()
}

fn bench_flat_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_search");
    for size in [1_000, 5_000, 10_000] {
        let vectors = random_vectors(size, 7);
        let index = VecIndex::build(vectors.iter().map(Vec::as_slice)).unwrap();
        let query = random_vectors(1, 11).remove(0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(index.search(black_box(&query), 10).unwrap()));
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for size in [1_000, 5_000] {
        let vectors = random_vectors(size, 13);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut index = VecIndex::new();
            b.iter(|| index.rebuild(vectors.iter().map(Vec::as_slice)).unwrap());
        });
    }
    group.finish();
}

fn bench_ingest_and_search(c: &mut Criterion) {
    let topics = [
        "machine learning neural networks",
        "python programming development",
        "machine learning with python",
        "rust systems programming",
        "web development javascript",
    ];
    let engine = Semsearch::new(HashingEmbedder::default());
    for i in 0..1_000 {
        let content = format!("Document {i} about {}", topics[i % topics.len()]);
        engine
            .ingest(&format!("doc-{i}.txt"), content.as_bytes())
            .unwrap();
    }

    c.bench_function("search_1000_docs", |b| {
        b.iter(|| black_box(engine.search(black_box("machine learning"), 10).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_flat_search,
    bench_rebuild,
    bench_ingest_and_search
);
criterion_main!(benches);
