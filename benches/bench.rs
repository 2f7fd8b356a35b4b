//! Criterion benchmarks for the apercu pipeline.
//!
//! Covers the three stages with real cost:
//! - Normalization of messy French text
//! - Analysis (normalize + tokenize + filter)
//! - The full corpus pipeline, sequential and parallel

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use apercu::analysis::analyzer::analyzer::Analyzer;
use apercu::analysis::analyzer::french::FrenchAnalyzer;
use apercu::analysis::normalizer::TextNormalizer;
use apercu::pipeline::{InsightPipeline, PipelineConfig};

/// Generate test documents for benchmarking.
fn generate_corpus(count: usize) -> Vec<String> {
    let words = [
        "le", "chat", "noir", "dort", "sur", "toit", "rouge", "chien", "blanc", "mange",
        "pomme", "verte", "souris", "grise", "chasse", "jardin", "fleurs", "bleues", "maison",
        "grande", "petite", "fenÃªtre", "Ã©tÃ©", "hiver", "matin", "soir", "toujours", "jamais",
        "souvent", "parfois", "trÃ¨s", "vite",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 30);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_normalizer(c: &mut Criterion) {
    let normalizer = TextNormalizer::new().unwrap();
    let document = generate_corpus(1).pop().unwrap().repeat(20);

    let mut group = c.benchmark_group("normalizer");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("normalize", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&document))));
    });
    group.finish();
}

fn bench_analyzer(c: &mut Criterion) {
    let analyzer = FrenchAnalyzer::new().unwrap();
    let document = generate_corpus(1).pop().unwrap().repeat(20);

    let mut group = c.benchmark_group("analyzer");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("analyze", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&document)).unwrap().collect();
            black_box(tokens)
        });
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let corpus = generate_corpus(200);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(corpus.len() as u64));

    let sequential = InsightPipeline::french(PipelineConfig {
        parallel: false,
        ..PipelineConfig::default()
    })
    .unwrap();
    group.bench_function("run_sequential", |b| {
        b.iter(|| black_box(sequential.run(black_box(&corpus)).unwrap()));
    });

    let parallel = InsightPipeline::french(PipelineConfig {
        parallel: true,
        ..PipelineConfig::default()
    })
    .unwrap();
    group.bench_function("run_parallel", |b| {
        b.iter(|| black_box(parallel.run(black_box(&corpus)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_normalizer, bench_analyzer, bench_pipeline);
criterion_main!(benches);
