//! Performance benchmarks for dispatch_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dispatch_core::runner::run_dispatch;
use dispatch_core::scenario::DispatchParams;
use dispatch_core::test_helpers::random_rides;
use dispatch_core::{walk, GridPoint};

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_walk");
    for step_limit in [10u64, 1_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(step_limit),
            &step_limit,
            |b, &step_limit| {
                b.iter(|| black_box(walk(GridPoint::new(50_000, 50_000), step_limit)));
            },
        );
    }
    group.finish();
}

fn bench_dispatch_pass(c: &mut Criterion) {
    let scenarios = vec![
        ("small", 10, 100),
        ("medium", 100, 1_000),
        ("large", 1_000, 10_000),
    ];

    let mut group = c.benchmark_group("dispatch_pass");
    for (name, vehicles, rides) in scenarios {
        let input = random_rides(42, rides, 1_000, 1_000);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| {
                black_box(run_dispatch(DispatchParams::new(vehicles, 500), input).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk, bench_dispatch_pass);
criterion_main!(benches);
