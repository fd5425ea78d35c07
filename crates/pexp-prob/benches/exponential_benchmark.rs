use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_exponential(c: &mut Criterion) {
    let xs = pexp_prob::math::linspace(0.0, 8.0, 10_000);

    c.bench_function("exponential_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += pexp_prob::exponential::cdf(x, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("exponential_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += pexp_prob::exponential::pdf(x, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("linspace_1000", |b| {
        b.iter(|| black_box(pexp_prob::math::linspace(0.0, black_box(4.0), 1000)))
    });
}

criterion_group!(benches, bench_exponential);
criterion_main!(benches);
