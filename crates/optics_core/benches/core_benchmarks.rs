//! Benchmarks for optics_core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use optics_core::dispersion::Crystal;
use optics_core::math::solvers::{NelderMeadSolver, SolverConfig};

fn benchmark_dispersion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispersion");

    for wavelength in [0.4_f64, 1.064, 2.5] {
        group.bench_with_input(
            BenchmarkId::new("bbo_indices", wavelength),
            &wavelength,
            |b, &l| b.iter(|| Crystal::Bbo.indices(black_box(l))),
        );
    }

    group.finish();
}

fn benchmark_nelder_mead(c: &mut Criterion) {
    let solver = NelderMeadSolver::new(SolverConfig::<f64>::default());

    c.bench_function("nelder_mead_abs_kink", |b| {
        b.iter(|| {
            let objective = |x: f64| (0.11 * (x - 0.6)).abs();
            let _ = solver.minimise(objective, black_box(0.5));
        })
    });
}

criterion_group!(benches, benchmark_dispersion, benchmark_nelder_mead);
criterion_main!(benches);
