use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use texspan::render;
use texspan::Classifier;

pub fn classify_throughput_bench(c: &mut Criterion) {
    let weights = Default::default();
    let mut rng = rand::prelude::StdRng::seed_from_u64(43);
    let latex_input =
        performance::generate_random_latex_document(&mut rng, 20000, (40, 120), &weights);
    let classifier = Classifier::default();

    let mut group = c.benchmark_group("classify-throughput");

    group.bench_function("classify_lines", |b| {
        b.iter(|| {
            let mut num_spans = 0_usize;
            for line in texspan::document::lines(&latex_input) {
                num_spans += classifier.lexer(line).count();
            }
            num_spans
        })
    });

    group.bench_function("classify_document", |b| {
        b.iter(|| classifier.classify_document(&latex_input).len())
    });

    group.bench_function("html_document", |b| {
        b.iter(|| render::html_document(&classifier, &latex_input).len())
    });
}

criterion_group!(benches, classify_throughput_bench);
criterion_main!(benches);
