//! Benchmark for the container combinators.
//!
//! Compares `Optional`, `Disjoint` and `Attempt` chains against the same
//! chains written with `Option` and `Result`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::num::ParseIntError;
use totality::adapters::SequenceExt;
use totality::{Attempt, Disjoint, Optional};

// =============================================================================
// Optional vs Option
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    group.bench_function("optional_map_flat_map", |bencher| {
        bencher.iter(|| {
            let value = Optional::present(black_box(42_i32));
            black_box(
                value
                    .map(|x| x * 2)
                    .flat_map(|x| if x > 0 { Optional::present(x) } else { Optional::absent() })
                    .get_or_else(0),
            )
        });
    });

    group.bench_function("option_map_and_then", |bencher| {
        bencher.iter(|| {
            let value = Some(black_box(42_i32));
            black_box(
                value
                    .map(|x| x * 2)
                    .and_then(|x| if x > 0 { Some(x) } else { None })
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("optional_flat_map2", |bencher| {
        bencher.iter(|| {
            let value = Optional::present(black_box(7_i32));
            black_box(value.flat_map2(|x| Optional::present(x + 1), |x, y| x * y))
        });
    });

    group.finish();
}

// =============================================================================
// Disjoint and Attempt vs Result
// =============================================================================

fn benchmark_error_channels(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("error_channels");

    for input in ["128", "not a number"] {
        group.bench_with_input(BenchmarkId::new("disjoint", input), input, |bencher, text| {
            bencher.iter(|| {
                let parsed: Disjoint<ParseIntError, i32> = black_box(text).parse::<i32>().into();
                black_box(parsed.map(|x| x + 1).get_or_else(-1))
            });
        });

        group.bench_with_input(BenchmarkId::new("attempt", input), input, |bencher, text| {
            bencher.iter(|| {
                let parsed: Attempt<i32, ParseIntError> = black_box(text).parse::<i32>().into();
                black_box(parsed.map(|x| x + 1).recover(|| -1))
            });
        });

        group.bench_with_input(BenchmarkId::new("result", input), input, |bencher, text| {
            bencher.iter(|| {
                let parsed = black_box(text).parse::<i32>();
                black_box(parsed.map(|x| x + 1).unwrap_or(-1))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Sequence Adapters
// =============================================================================

fn benchmark_single_matching(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("single_matching");

    for size in [16_usize, 1024] {
        let values: Vec<usize> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("adapter", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().single_matching(|x| **x == size - 1)));
        });

        group.bench_with_input(BenchmarkId::new("manual", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut matches = values.iter().filter(|x| **x == size - 1);
                black_box(match (matches.next(), matches.next()) {
                    (Some(only), None) => Some(only),
                    _ => None,
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_error_channels,
    benchmark_single_matching
);
criterion_main!(benches);
