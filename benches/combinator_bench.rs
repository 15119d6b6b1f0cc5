//! Benchmark for the container combinators.
//!
//! Measures chain evaluation on the success path, short-circuit cost on the
//! failure path, and the overhead of the capturing constructors.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use valor::optional::Optional;
use valor::outcome::Outcome;

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chains");

    for length in [1, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("then_success_path", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut outcome = Outcome::ok(black_box(0_i64));
                    for _ in 0..length {
                        outcome = outcome.then(|value| value + 1);
                    }
                    black_box(outcome.value_or(0))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("then_short_circuit", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut outcome: Outcome<i64> = Outcome::fail(black_box("down"));
                    for _ in 0..length {
                        outcome = outcome.then(|value| value + 1);
                    }
                    black_box(outcome.is_failed())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_capture(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("capture");

    group.bench_function("capture_completion", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::capture(|| black_box(21) * 2);
            black_box(outcome.value_or(0))
        });
    });

    group.bench_function("plain_construction", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::ok(black_box(21) * 2);
            black_box(outcome.value_or(0))
        });
    });

    group.finish();
}

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chains");

    group.bench_function("then_present", |bencher| {
        bencher.iter(|| {
            let resolved = Optional::some(black_box(7))
                .then(|value| value * 6)
                .or_else(|| 0)
                .value_or(0);
            black_box(resolved)
        });
    });

    group.bench_function("then_absent", |bencher| {
        bencher.iter(|| {
            let resolved = Optional::<i32>::none()
                .then(|value| value * 6)
                .or_else(|| black_box(42))
                .value_or(0);
            black_box(resolved)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_outcome_chains,
    benchmark_capture,
    benchmark_optional_chains
);
criterion_main!(benches);
