//! Benchmarks for validity queries

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use freespace_test::{FuzzerConfig, PrimitiveQueries, ValidityFuzzer};
use freespace_validity::{AllValidChecker, BoundedChecker, StateValidityChecker};

fn bench_all_valid(c: &mut Criterion) {
    let config = FuzzerConfig::default();
    let si = config.space_information().unwrap();
    let state = si.alloc_state();
    let checker = AllValidChecker::new(&si);

    c.bench_function("all_valid_is_valid", |b| {
        b.iter(|| black_box(checker.is_valid(black_box(&state))))
    });
}

fn bench_sphere_field_clearance(c: &mut Criterion) {
    let config = FuzzerConfig::default();
    let si = config.space_information().unwrap();
    let bounds = config.bounds().unwrap();
    let mut fuzzer = ValidityFuzzer::new(config);
    let checker = fuzzer.sphere_field(&si).unwrap();
    let states = fuzzer.random_states(&bounds, 64);

    // Single pass, overridden by the checker
    c.bench_function("sphere_field_valid_with_clearance_single_pass", |b| {
        b.iter(|| {
            for s in &states {
                black_box(checker.is_valid_with_clearance(black_box(s)));
            }
        })
    });

    // Two queries through the default composition, same obstacles
    let composed = PrimitiveQueries::new(&checker);
    c.bench_function("sphere_field_valid_with_clearance_default", |b| {
        b.iter(|| {
            for s in &states {
                black_box(composed.is_valid_with_clearance(black_box(s)));
            }
        })
    });
}

fn bench_sphere_field_gradient(c: &mut Criterion) {
    let config = FuzzerConfig::default();
    let si = config.space_information().unwrap();
    let bounds = config.bounds().unwrap();
    let mut fuzzer = ValidityFuzzer::new(config);
    let checker = BoundedChecker::new(fuzzer.sphere_field(&si).unwrap());
    let states = fuzzer.random_states(&bounds, 64);
    let mut gradient = si.alloc_state();

    c.bench_function("bounded_sphere_field_valid_with_gradient", |b| {
        b.iter(|| {
            for s in &states {
                black_box(checker.is_valid_with_gradient(black_box(s), &mut gradient));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_all_valid,
    bench_sphere_field_clearance,
    bench_sphere_field_gradient,
);
criterion_main!(benches);
