// ─────────────────────────────────────────────────────────────────────
// SpinRep — Generator Construction Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the exact generator pipeline.
//!
//! Covers:
//!   - Ladder coefficients (exact square roots)
//!   - Single column build + solve
//!   - Full construction, sequential vs. parallel columns
//!   - Invariant verification on its own

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use spinrep_core::verify::check_invariants;
use spinrep_core::{
    compute_irrep, partition_unknowns, solve_column, Basis, ColumnEquation, IrrepBuilder,
    SymbolPool,
};
use spinrep_types::{IrrepConfig, Spin};

// ── Basis ladder coefficients ───────────────────────────────────────

fn bench_ladder_coefficients(c: &mut Criterion) {
    let basis = Basis::new(Spin::from_twice(19));
    c.bench_function("ladder_coefficients_j19_2", |b| {
        b.iter(|| {
            for m in basis.magnetic_numbers() {
                black_box(basis.raising(m));
                black_box(basis.lowering(m));
            }
        })
    });
}

// ── Single column ───────────────────────────────────────────────────

fn bench_column_solve(c: &mut Criterion) {
    let basis = Basis::new(Spin::from_twice(9));
    let dim = basis.dimension();
    let mut symbols = SymbolPool::new().fresh(2 * dim * dim);
    let [_, u2] = match partition_unknowns(dim, &mut symbols) {
        Ok(u) => u,
        Err(e) => panic!("partition failed: {e}"),
    };
    c.bench_function("column_build_solve_j9_2", |b| {
        b.iter(|| {
            let eq = ColumnEquation::build(&u2, &basis, black_box(4)).map(|eq| solve_column(&eq));
            black_box(eq)
        })
    });
}

// ── Full construction ───────────────────────────────────────────────

fn bench_full_irrep(c: &mut Criterion) {
    let unchecked = IrrepBuilder::new(IrrepConfig {
        verify_invariants: false,
        ..Default::default()
    });
    let parallel = IrrepBuilder::new(IrrepConfig {
        verify_invariants: false,
        parallel_columns: true,
        ..Default::default()
    });
    let (Ok(unchecked), Ok(parallel)) = (unchecked, parallel) else {
        panic!("default-derived configs must validate");
    };

    let mut group = c.benchmark_group("irrep");
    for twice in [1u32, 4, 8, 16] {
        let spin = Spin::from_twice(twice);
        group.bench_with_input(BenchmarkId::new("sequential", twice), &spin, |b, &s| {
            b.iter(|| unchecked.build(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", twice), &spin, |b, &s| {
            b.iter(|| parallel.build(black_box(s)))
        });
    }
    group.finish();
}

// ── Invariant verification ──────────────────────────────────────────

fn bench_verify(c: &mut Criterion) {
    let irrep = match compute_irrep(Spin::from_twice(8)) {
        Ok(r) => r,
        Err(e) => panic!("construction failed: {e}"),
    };
    c.bench_function("check_invariants_j4", |b| {
        b.iter(|| check_invariants(black_box(&irrep)))
    });
}

criterion_group!(
    benches,
    bench_ladder_coefficients,
    bench_column_solve,
    bench_full_irrep,
    bench_verify,
);
criterion_main!(benches);
