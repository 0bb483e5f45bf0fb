use criterion::{black_box, criterion_group, criterion_main, Criterion};
use markup_sdk::{tokenizer::Tokenizer, Markup};

fn sample_document() -> String {
    let section = "# Heading\nSome **bold** text with spaces.\n* item one\n- item **two**\n\n";
    section.repeat(200)
}

fn bench_tokenize(c: &mut Criterion) {
    let input = sample_document();
    let tokenizer = Tokenizer::markdown();
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&input)))
    });
}

fn bench_render(c: &mut Criterion) {
    let input = sample_document();
    let markup = Markup::default();
    c.bench_function("tokenize + parse + render", |b| {
        b.iter(|| markup.to_html(black_box(&input)))
    });
}

criterion_group!(benches, bench_tokenize, bench_render);
criterion_main!(benches);
