use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scientific_calculator::interpreter::calculate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "2 + 3".to_string(),
        "2 + 3 * 4 - 6 / 2".to_string(),
        "((2 + 3) * 4) / 2".to_string(),
        "10 - 2 - 3 - 4 - 5 - 6 - 7 - 8".to_string(),
        "(1.5 + 2.25) * (3.125 - (4 / (5 + 6))) / 7.75".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
