use criterion::{black_box, criterion_group, criterion_main, Criterion};
use naming::{camel_case, fields, Convention};

const MIXED: &str = "camelCase CONSTANT_CASE kebab-case PascalCase snake_case Train-Case";

fn bench_fields(c: &mut Criterion) {
    c.bench_function("fields mixed", |b| b.iter(|| fields(black_box(MIXED))));

    let long = MIXED.repeat(64);
    c.bench_function("fields long", |b| b.iter(|| fields(black_box(&long))));
}

fn bench_formatters(c: &mut Criterion) {
    c.bench_function("camel_case", |b| b.iter(|| camel_case(black_box(MIXED))));

    let words = fields(MIXED);
    c.bench_function("format_words all", |b| {
        b.iter(|| {
            for convention in Convention::ALL {
                black_box(convention.format_words(&words));
            }
        })
    });
}

criterion_group!(benches, bench_fields, bench_formatters);
criterion_main!(benches);
