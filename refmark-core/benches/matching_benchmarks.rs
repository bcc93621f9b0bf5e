//! Benchmarks for shingle matching and clustering
//!
//! Run with: cargo bench --bench matching_benchmarks

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use refmark_core::language::LanguageRegistry;
use refmark_core::matching::{find_match_points, match_and_cluster, resolve_overlaps, Match};
use refmark_core::text::{build_shingles, normalize, shingle_spans, tokenize};
use refmark_core::{IdentityStemmer, Shingle};

const VOCABULARY: &[&str] = &[
    "river", "granite", "lantern", "orbit", "harvest", "copper", "meadow", "signal", "thunder",
    "violet", "compass", "glacier", "ember", "harbor", "quartz", "saddle", "timber", "beacon",
];

/// Deterministic pseudo-random text of `words` words
fn generate_text(words: usize, seed: usize) -> String {
    let mut state = seed.wrapping_mul(2_654_435_761) | 1;
    let mut out = String::new();
    for k in 0..words {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.push_str(VOCABULARY[state % VOCABULARY.len()]);
        out.push_str(if k % 12 == 11 { ". " } else { " " });
    }
    out
}

fn shingles(text: &str) -> Vec<Shingle> {
    let registry = LanguageRegistry::with_embedded();
    let english = registry.get("en").expect("embedded english profile");
    build_shingles(&normalize(&tokenize(text), &english), 2, &IdentityStemmer)
}

fn bench_match_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_points");

    for words in [500, 2_000, 8_000] {
        let input = shingles(&generate_text(words, 1));
        let candidate = shingles(&generate_text(words, 2));

        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(
            BenchmarkId::new("indexed", words),
            &(input, candidate),
            |b, (input, candidate)| b.iter(|| find_match_points(black_box(input), black_box(candidate))),
        );
    }

    group.finish();
}

fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");

    for words in [500, 2_000, 8_000] {
        let text = generate_text(words, 3);
        let input = shingles(&text);

        // Self comparison: a dense diagonal plus scattered repeats
        group.bench_with_input(BenchmarkId::new("self", words), &input, |b, input| {
            b.iter(|| match_and_cluster(black_box(input), black_box(input), 3, 5))
        });
    }

    group.finish();
}

fn bench_overlap_resolution(c: &mut Criterion) {
    let text = generate_text(4_000, 4);
    let input = shingles(&text);
    let spans = shingle_spans(&input);

    let matches: Vec<Match> = (0..8)
        .flat_map(|seed| {
            let candidate = shingles(&generate_text(2_000, seed + 10));
            let candidate_spans = shingle_spans(&candidate);
            match_and_cluster(&input, &candidate, 3, 5)
                .clusters
                .into_iter()
                .map(|cluster| Match::localize(cluster, &spans, &candidate_spans, "bench", "Bench"))
                .collect::<Vec<_>>()
        })
        .collect();

    c.bench_function("resolve_overlaps", |b| {
        b.iter(|| resolve_overlaps(black_box(&matches), 0.6))
    });
}

criterion_group!(
    benches,
    bench_match_points,
    bench_clustering,
    bench_overlap_resolution
);
criterion_main!(benches);
