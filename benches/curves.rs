use criterion::{criterion_group, criterion_main, Criterion};
use polarplot::{
    arclength::{arc_length, arc_length_of},
    coords::AxesConfig,
    curve::{Cardioid, Lemniscate, Limacon, PolarCurve},
    quadrature::{integrate, QuadOptions},
    sampler::sample,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Uniform;
use std::{
    f64::consts::{FRAC_PI_4, FRAC_PI_8, PI, TAU},
    hint::black_box,
};

/// Random angle pairs inside the lemniscate's right lobe, sorted
fn gen_lobe_ranges(n: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let dist = Uniform::new(-FRAC_PI_4, FRAC_PI_4).expect("Invalid range");
    (0..n)
        .map(|_| {
            let (a, b) = (rng.sample(dist), rng.sample(dist));
            (a.min(b), a.max(b))
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let map = AxesConfig::lemniscate().coord_map().expect("Failed to map axes");

    //
    // Sampling cost vs sample count, on a curve that is undefined half the time
    println!("Benchmarking sample vs n (Lemniscate, [-π, π])...");
    test_criterion_group(
        c,
        "sample_vs_n",
        &[
            CriterionTestEntry::new("n=200", 200),
            CriterionTestEntry::new("n=2_000", 2_000),
            CriterionTestEntry::new("n=20_000", 20_000),
            CriterionTestEntry::new("n=200_000", 200_000),
        ],
        |b, &n| b.iter(|| sample(&Lemniscate::default(), -PI, PI, black_box(n), &map)),
    );

    //
    // Arc length for each curve, over its usual range
    println!("Benchmarking arc length per curve...");
    let options = QuadOptions::default();
    let mut group = c.benchmark_group("arc_length");
    group.bench_function("lemniscate_eighths", |b| {
        b.iter(|| arc_length(black_box(FRAC_PI_8), black_box(3.0 * FRAC_PI_8)));
    });
    group.bench_function("lemniscate_lobe", |b| {
        b.iter(|| arc_length_of(&Lemniscate::default(), -FRAC_PI_4, FRAC_PI_4, &options));
    });
    group.bench_function("cardioid", |b| {
        b.iter(|| arc_length_of(&Cardioid::default(), 0.0, black_box(TAU), &options));
    });
    group.bench_function("limacon", |b| {
        b.iter(|| arc_length_of(&Limacon::default(), 0.0, black_box(TAU), &options));
    });
    group.finish();

    //
    // Random sub-arcs of the lobe, most of which end well away from the singular points
    println!("Benchmarking random lemniscate sub-arcs...");
    let ranges = gen_lobe_ranges(64);
    c.bench_function("arc_length_random_lobe", |b| {
        b.iter(|| {
            for &(a, b) in &ranges {
                let _ = black_box(arc_length_of(&Lemniscate::default(), a, b, &options));
            }
        });
    });

    //
    // The raw integrator against tolerance
    println!("Benchmarking integrate vs tolerance (speed of r = 2 + 4cos θ)...");
    let limacon = Limacon::default();
    test_criterion_group(
        c,
        "integrate_vs_eps",
        &[
            CriterionTestEntry::new("eps=1e-4", 1e-4),
            CriterionTestEntry::new("eps=1e-8", 1e-8),
            CriterionTestEntry::new("eps=1e-12", 1e-12),
        ],
        |b, &eps| {
            let options = QuadOptions {
                epsabs: eps,
                epsrel: eps,
                ..QuadOptions::default()
            };
            b.iter(|| integrate(|theta| limacon.speed(theta), 0.0, TAU, &options));
        },
    );
}

struct CriterionTestEntry<V> {
    id: String,
    values: V,
}
impl<V> CriterionTestEntry<V> {
    pub fn new(id: &str, values: V) -> Self {
        Self {
            id: id.to_string(),
            values,
        }
    }
}

fn test_criterion_group<F, V>(
    c: &mut Criterion,
    id: &str,
    samples: &[CriterionTestEntry<V>],
    runner: F,
) where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c V),
{
    let mut group = c.benchmark_group(id);
    for sample in samples {
        group.bench_with_input(&sample.id, &sample.values, &runner);
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
