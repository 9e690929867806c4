//! Guard clause benchmarks
//!
//! Measures the pass path, which is what runs on every call in production,
//! and the failure path, which allocates the message.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ensured::prelude::*;
use regex::Regex;

fn bench_pass_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("pass");

    group.bench_function("not_null", |b| {
        b.iter(|| ensure::not_null(black_box(Some(42_u64)), CheckOptions::new()));
    });

    group.bench_function("that_macro_in_range", |b| {
        b.iter(|| {
            let value = black_box(42_i64);
            that!(value).is_in_range(0, 100)
        });
    });

    group.bench_function("is_prime_u32", |b| {
        b.iter(|| that(black_box(104_729_u32)).is_prime());
    });

    group.bench_function("string_affixes", |b| {
        b.iter(|| {
            let text = black_box("guard-clause");
            that!(text)
                .starts_with("guard")
                .and_then(|text| that(text).ends_with("clause"))
        });
    });

    let regex = Regex::new(r"^[a-z]+-[a-z]+$").unwrap();
    group.bench_function("matches_regex", |b| {
        b.iter(|| that(black_box("guard-clause")).matches_regex(&regex));
    });

    group.bench_function("is_match_compiles_pattern", |b| {
        b.iter(|| that(black_box("guard-clause")).is_match(r"^[a-z]+-[a-z]+$"));
    });

    group.finish();
}

fn bench_fail_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("fail");

    group.bench_function("not_null", |b| {
        b.iter(|| ensure::not_null(black_box(None::<u64>), CheckOptions::new()));
    });

    group.bench_function("count_is_message", |b| {
        let items = vec![1, 2, 3];
        b.iter(|| that(black_box(&items)).count_is(4));
    });

    group.finish();
}

criterion_group!(benches, bench_pass_path, bench_fail_path);
criterion_main!(benches);
