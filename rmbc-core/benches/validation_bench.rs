//! Benchmarks for barcode validation.
//!
//! Measures performance of:
//! - Check digit calculation
//! - Component parsing
//! - Full validation pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rmbc_core::{calculate_check_digit, validate_barcode, BarcodeComponents};

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("calculate_check_digit", |b| {
        b.iter(|| calculate_check_digit(black_box("47312482")))
    });
}

fn bench_parse_components(c: &mut Criterion) {
    c.bench_function("parse_components", |b| {
        b.iter(|| BarcodeComponents::parse(black_box("AB473124829GB")))
    });
}

fn bench_validate_barcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_barcode");
    group.bench_function("valid", |b| {
        b.iter(|| validate_barcode(black_box("AB473124829GB")))
    });
    group.bench_function("first_rule_fails", |b| {
        b.iter(|| validate_barcode(black_box("12473124829GB")))
    });
    group.bench_function("last_rule_fails", |b| {
        b.iter(|| validate_barcode(black_box("AB473124820GB")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_check_digit,
    bench_parse_components,
    bench_validate_barcode
);
criterion_main!(benches);
