use criterion::{black_box, criterion_group, criterion_main, Criterion};

use poly_tower::ring::*;
use poly_tower::rings::poly::*;
use poly_tower::rings::poly::dense_poly::DensePolyRing;
use poly_tower::rings::multivariate::*;
use poly_tower::primitive_int::StaticRing;

fn random_univariate(ring: &DensePolyRing<StaticRing<i64>>, degree: usize, rng: &mut oorandom::Rand64) -> El<DensePolyRing<StaticRing<i64>>> {
    ring.from_terms((0..=degree).map(|i| ((rng.rand_u64() % 1024) as i64 - 512, i)))
}

fn bench_univariate_mul(c: &mut Criterion) {
    let ring = DensePolyRing::new(StaticRing::<i64>::RING, "X");
    let mut rng = oorandom::Rand64::new(1);
    let lhs = random_univariate(&ring, 256, &mut rng);
    let rhs = random_univariate(&ring, 256, &mut rng);
    c.bench_function("dense_poly_mul_deg_256", |b| {
        b.iter(|| {
            let result = ring.mul_ref(black_box(&lhs), black_box(&rhs));
            black_box(result)
        })
    });
}

fn bench_bivariate_mul(c: &mut Criterion) {
    let ring = DensePolyRing::new(DensePolyRing::new(StaticRing::<i64>::RING, "x"), "y");
    let mut rng = oorandom::Rand64::new(2);
    let mut random_bivariate = |deg: usize| {
        let inner = ring.base_ring();
        ring.from_terms((0..=deg).map(|i| (random_univariate(inner, deg, &mut rng), i)))
    };
    let lhs = random_bivariate(16);
    let rhs = random_bivariate(16);
    c.bench_function("bivariate_poly_mul_deg_16_16", |b| {
        b.iter(|| {
            let result = ring.mul_ref(black_box(&lhs), black_box(&rhs));
            black_box(result)
        })
    });
}

fn bench_degree_vector(c: &mut Criterion) {
    let ring = DensePolyRing::new(DensePolyRing::new(StaticRing::<i64>::RING, "x"), "y");
    let mut rng = oorandom::Rand64::new(3);
    let inner_ring = ring.base_ring();
    let f = ring.from_terms((0..=64).map(|i| (random_univariate(inner_ring, 64, &mut rng), i)));
    c.bench_function("bivariate_degree_vector_deg_64_64", |b| {
        b.iter(|| black_box(ring.degree_vector(black_box(&f))))
    });
}

criterion_group!(benches, bench_univariate_mul, bench_bivariate_mul, bench_degree_vector);
criterion_main!(benches);
