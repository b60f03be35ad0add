//! Benchmarks for classification and shifting

use criterion::{criterion_group, criterion_main, Criterion};
use shiftr_core::{classify, Dictionary, Direction, ShiftContext, ShiftEngine};
use std::hint::black_box;

fn classification_benchmarks(c: &mut Criterion) {
    let dictionary = Dictionary::embedded();
    let samples = [
        "$userName",
        "public",
        "1262304000",
        "XIV",
        "charlie, alpha, bravo",
        "not a match at all!",
    ];

    c.bench_function("classify_single_line", |b| {
        b.iter(|| {
            for text in samples {
                let ctx = ShiftContext::new(black_box(text), Direction::Up);
                black_box(classify(&ctx, &dictionary));
            }
        })
    });
}

fn shift_benchmarks(c: &mut Criterion) {
    let engine = ShiftEngine::new();

    c.bench_function("shift_keyword_ring", |b| {
        let ctx = ShiftContext::new("public", Direction::Up);
        b.iter(|| black_box(engine.shift(&ctx)))
    });

    c.bench_function("shift_timestamp", |b| {
        let ctx = ShiftContext::new("1262304000", Direction::Up);
        b.iter(|| black_box(engine.shift(&ctx)))
    });

    c.bench_function("shift_document_rotation", |b| {
        let document: String =
            (0..200).map(|i| format!("$var{i} = {i};\n")).collect();
        let ctx = ShiftContext::new("$var100", Direction::Up).with_document(document);
        b.iter(|| black_box(engine.shift(&ctx)))
    });

    c.bench_function("shift_line_sort", |b| {
        let selection: String =
            (0..100).rev().map(|i| format!("pic{i}\n")).collect();
        let ctx = ShiftContext::new(selection, Direction::Up);
        b.iter(|| black_box(engine.shift(&ctx)))
    });
}

fn dictionary_benchmarks(c: &mut Criterion) {
    let text = shiftr_core::domain::dictionary::default_dictionary_text();

    c.bench_function("dictionary_parse", |b| {
        b.iter(|| black_box(Dictionary::parse(black_box(text))))
    });

    let dictionary = Dictionary::parse(text);
    c.bench_function("dictionary_lookup", |b| {
        b.iter(|| {
            black_box(dictionary.lookup(black_box("setTimeout"), Some("js")));
            black_box(dictionary.lookup_global(black_box("implode"), Some("js")));
        })
    });
}

criterion_group!(
    benches,
    classification_benchmarks,
    shift_benchmarks,
    dictionary_benchmarks
);
criterion_main!(benches);
