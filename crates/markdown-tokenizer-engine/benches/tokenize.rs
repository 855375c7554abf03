use criterion::{Criterion, criterion_group, criterion_main};
use markdown_tokenizer_engine::{TokenizerOptions, UnmatchedDelimiters, tokenize, tokenize_with};
use pulldown_cmark::Parser;
mod common;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens = tokenize(std::hint::black_box(&content));
            std::hint::black_box(tokens);
        });
    });

    let literal =
        TokenizerOptions::default().with_unmatched_delimiters(UnmatchedDelimiters::Literal);
    group.bench_function("tokenize_literal_delimiters", |b| {
        b.iter(|| {
            let tokens = tokenize_with(std::hint::black_box(&content), &literal);
            std::hint::black_box(tokens);
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_inline_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let line = common::generate_span_heavy_line(200);
    group.bench_function("span_heavy_paragraph", |b| {
        b.iter(|| {
            let tokens = tokenize(std::hint::black_box(&line));
            std::hint::black_box(tokens);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_inline_spans);
criterion_main!(benches);
