use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use dimen::{BaseDimension, Dimension, ExponentTerm, Kilometre, Metre, Quantity};

fn terms(n: usize) -> Vec<ExponentTerm> {
    (0..n)
        .map(|i| {
            let base = BaseDimension::SI[(i * 5 + 3) % BaseDimension::SI.len()];
            let exponent = (i as i32 % 7) - 3;
            ExponentTerm::new(base, exponent)
        })
        .collect()
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    for n in [4usize, 16, 64, 256] {
        let input = terms(n);
        group.bench_with_input(BenchmarkId::new("terms", n), &input, |b, input| {
            b.iter(|| Dimension::new(black_box(input.clone())));
        });
    }

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimension_algebra");

    let a = Dimension::new(terms(12));
    let b = Dimension::new(terms(9));
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&b)));
    });
    group.bench_function("divide", |bench| {
        bench.iter(|| black_box(&a).divide(black_box(&b)));
    });
    group.bench_function("invert", |bench| {
        bench.iter(|| black_box(&a).invert());
    });

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantity_conversion");

    group.bench_function("f64_km_to_m", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let q = Quantity::<Kilometre>::new(i as f64 * 0.5);
                black_box(black_box(q).to::<Metre>());
            }
        });
    });

    group.bench_function("i64_km_to_m", |b| {
        b.iter(|| {
            for i in 0..1000i64 {
                let q = Quantity::<Kilometre, i64>::new(i);
                black_box(black_box(q).to::<Metre>());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_algebra, bench_conversion);
criterion_main!(benches);
