// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate sensitivity;
use pricing::OptionParameters;
use sensitivity::{compute_grid, compute_sweep, RangeFactors, SweepAxis};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_price_grid);
criterion_main!(benches);

pub fn criterion_price_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Price surfaces and sweeps");
    let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);

    group.bench_function("50 x 50 spot/volatility grid", |b| {
        b.iter(|| {
            compute_grid(
                black_box(&base),
                RangeFactors::default(),
                RangeFactors::default(),
                black_box(50),
            )
        })
    });
    group.bench_function("100 point maturity sweep", |b| {
        b.iter(|| compute_sweep(black_box(&base), SweepAxis::Maturity, black_box(100)))
    });

    group.finish()
}
