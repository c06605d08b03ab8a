//! Criterion benchmarks for the similarity engine.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textcheck::ai::detect_ai_content;
use textcheck::models::AnalysisParams;
use textcheck::similarity::{detect_plagiarism, sequence_similarity};

/// Build a synthetic document of `words` tokens grouped into sentences,
/// with vocabulary offset to control overlap between documents.
fn synthetic_text(words: usize, vocab_offset: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        text.push_str(&format!("word{} ", (i % 97) + vocab_offset));
        if i % 11 == 10 {
            text.push_str(". ");
        }
    }
    text.push('.');
    text
}

fn bench_detect_plagiarism(c: &mut Criterion) {
    let params = AnalysisParams::default();
    let sizes = [100, 500, 1000];

    let mut group = c.benchmark_group("detect_plagiarism");

    for size in sizes {
        let reference = synthetic_text(size, 0);
        let identical = reference.clone();
        let partial = synthetic_text(size, 50); // roughly half-shared vocabulary
        let disjoint = synthetic_text(size, 1000);

        group.bench_with_input(BenchmarkId::new("identical", size), &size, |b, _| {
            b.iter(|| detect_plagiarism(black_box(&reference), black_box(&identical), &params))
        });

        group.bench_with_input(BenchmarkId::new("partial", size), &size, |b, _| {
            b.iter(|| detect_plagiarism(black_box(&reference), black_box(&partial), &params))
        });

        group.bench_with_input(BenchmarkId::new("disjoint", size), &size, |b, _| {
            b.iter(|| detect_plagiarism(black_box(&reference), black_box(&disjoint), &params))
        });
    }

    group.finish();
}

fn bench_sequence_similarity(c: &mut Criterion) {
    // The matching-blocks ratio is the most expensive component; bench it
    // alone across sizes.
    let sizes = [100, 500, 1000];

    let mut group = c.benchmark_group("sequence_similarity");

    for size in sizes {
        let a = synthetic_text(size, 0);
        let b_text = synthetic_text(size, 50);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| sequence_similarity(black_box(&a), black_box(&b_text)))
        });
    }

    group.finish();
}

fn bench_detect_ai_content(c: &mut Criterion) {
    let params = AnalysisParams::default();
    let text = synthetic_text(1000, 0);

    c.bench_function("detect_ai_content_1000w", |b| {
        b.iter(|| detect_ai_content(black_box(&text), &params))
    });
}

criterion_group!(
    benches,
    bench_detect_plagiarism,
    bench_sequence_similarity,
    bench_detect_ai_content
);
criterion_main!(benches);
