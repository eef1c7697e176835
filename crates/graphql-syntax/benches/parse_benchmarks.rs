use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;

mod fixtures;

fn bench_parse_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(fixtures::OPERATIONS.len() as u64));
    group.bench_function("operations", |b| {
        b.iter(|| graphql_syntax::parse(black_box(fixtures::OPERATIONS)).unwrap())
    });
    group.finish();
}

fn bench_parse_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(fixtures::SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| graphql_syntax::parse(black_box(fixtures::SCHEMA)).unwrap())
    });
    group.finish();
}

fn bench_lex_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    group.throughput(Throughput::Bytes(fixtures::SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| {
            graphql_syntax::token_source::Lexer::new(black_box(fixtures::SCHEMA)).count()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_operations,
    bench_parse_schema,
    bench_lex_only
);
criterion_main!(benches);
