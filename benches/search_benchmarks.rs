//! Benchmarks for the nearest-word scan and the prefix-sweep harness.
//!
//! The iterative scan should grow roughly linearly with word list size; the
//! recursive scan grows super-linearly with probe length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nearword::prelude::*;

// ============================================================================
// Test Data Setup
// ============================================================================

/// Build a word list of `size` words derived from a fixed base vocabulary
fn build_word_list(size: usize) -> WordList {
    let base_words = [
        "makan", "minum", "tidur", "rumah", "sekolah", "kucing", "anjing", "burung", "pohon",
        "bunga", "sungai", "gunung", "kota", "desa", "jalan", "buku", "pensil", "meja", "kursi",
        "pintu",
    ];
    let suffixes = ["", "an", "kan", "nya", "lah", "i", "ku", "mu"];
    let prefixes = ["", "me", "di", "ber", "ter", "pe"];

    let words: Vec<String> = prefixes
        .iter()
        .flat_map(|p| suffixes.iter().map(move |s| (*p, *s)))
        .flat_map(|(p, s)| base_words.iter().map(move |w| format!("{}{}{}", p, w, s)))
        .cycle()
        .take(size)
        .collect();

    WordList::from_terms(words)
}

// ============================================================================
// Scan Benchmarks
// ============================================================================

fn bench_scan_word_list_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan/word_list_size");

    for size in [100, 1_000, 10_000] {
        let search = CandidateSearch::new(build_word_list(size), DistanceVariant::Iterative);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("iterative", size), &search, |b, search| {
            b.iter(|| search.min_distance(black_box("sekolahx")));
        });
    }

    group.finish();
}

fn bench_scan_probe_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan/probe_length");
    group.sample_size(10);

    let words = build_word_list(500);
    let probe = "berumahkan";

    for variant in DistanceVariant::ALL {
        let search = CandidateSearch::new(words.clone(), variant);

        for len in 1..=RECURSIVE_LENGTH_CUTOFF {
            let prefix: String = probe.chars().take(len).collect();
            group.bench_with_input(
                BenchmarkId::new(variant.label().to_lowercase(), len),
                &prefix,
                |b, prefix| {
                    b.iter(|| search.min_distance(black_box(prefix)));
                },
            );
        }
    }

    group.finish();
}

fn bench_harness_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness/sweep");
    group.sample_size(10);

    let harness = BenchmarkHarness::new(build_word_list(200));
    group.bench_function("pemberitahuan", |b| {
        b.iter(|| harness.run_with_host(black_box("pemberitahuan"), &mut NoPauseHost));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_word_list_size,
    bench_scan_probe_length,
    bench_harness_sweep
);
criterion_main!(benches);
