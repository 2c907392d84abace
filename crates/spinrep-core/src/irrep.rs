// ─────────────────────────────────────────────────────────────────────
// SpinRep — Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Sequences basis construction, unknown allocation, the column solves,
//! reassembly, and simplification for both non-diagonal generators,
//! and writes `J3` down directly.

use rayon::prelude::*;
use serde::Serialize;

use spinrep_algebra::{Algebraic, ExactnessSimplifier, Matrix, MatrixEntry};
use spinrep_types::{Generator, IrrepConfig, Spin, SpinRepError, SpinRepResult};

use crate::basis::Basis;
use crate::equation::ColumnEquation;
use crate::reassemble::reassemble;
use crate::solver::{solve_column, ColumnSolution};
use crate::unknowns::{partition_unknowns, required_symbols, SymbolPool, UnknownMatrix};
use crate::verify;

/// The three generators of the spin-`j` irreducible representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Irrep {
    pub spin: Spin,
    pub j1: Matrix<Algebraic>,
    pub j2: Matrix<Algebraic>,
    pub j3: Matrix<Algebraic>,
}

impl Irrep {
    /// `D = 2j + 1`.
    pub fn dimension(&self) -> usize {
        self.j3.dim()
    }

    /// `[J1, J2, J3]`
    pub fn generators(&self) -> [&Matrix<Algebraic>; 3] {
        [&self.j1, &self.j2, &self.j3]
    }

    pub fn into_matrices(self) -> (Matrix<Algebraic>, Matrix<Algebraic>, Matrix<Algebraic>) {
        (self.j1, self.j2, self.j3)
    }

    /// `J1² + J2² + J3²`
    pub fn casimir(&self) -> SpinRepResult<Matrix<Algebraic>> {
        let mut total = Matrix::zeros(self.dimension());
        for g in self.generators() {
            total = total.try_add(&g.matmul(g)?)?;
        }
        Ok(total)
    }

    pub fn to_json(&self) -> SpinRepResult<String> {
        serde_json::to_string(self).map_err(|e| SpinRepError::Serialization(e.to_string()))
    }
}

/// Builds [`Irrep`]s under one configuration.
///
/// Holds no per-call state; every `build` starts from a fresh basis and
/// a fresh symbol pool.
#[derive(Debug, Clone)]
pub struct IrrepBuilder {
    config: IrrepConfig,
    simplifier: ExactnessSimplifier,
}

impl IrrepBuilder {
    pub fn new(config: IrrepConfig) -> SpinRepResult<Self> {
        config.validate()?;
        let simplifier = ExactnessSimplifier::from_config(&config);
        Ok(Self { config, simplifier })
    }

    pub fn config(&self) -> &IrrepConfig {
        &self.config
    }

    /// Compute `J1, J2, J3` for `spin`.
    ///
    /// Any failure aborts the whole construction.
    pub fn build(&self, spin: Spin) -> SpinRepResult<Irrep> {
        let dim = spin.dimension();
        let required = required_symbols(dim).ok_or_else(|| {
            SpinRepError::InvalidSpin(format!("j = {spin} is too large: 2D² unknowns overflow"))
        })?;
        log::debug!("building spin-{spin} irrep, D = {dim}");
        let basis = Basis::new(spin);

        let j3 = Matrix::diagonal(
            basis
                .magnetic_numbers()
                .iter()
                .cloned()
                .map(Algebraic::from_rational)
                .collect(),
        );

        let mut symbols = SymbolPool::new().fresh(required);
        let [u1, u2] = partition_unknowns(dim, &mut symbols)?;

        let j1 = self.solve_generator(&basis, &u1)?;
        let j2 = self.solve_generator(&basis, &u2)?;

        let irrep = Irrep { spin, j1, j2, j3 };
        if self.config.verify_invariants {
            verify::check_invariants(&irrep)?;
            log::debug!("spin-{spin} irrep passed invariant checks");
        }
        Ok(irrep)
    }

    fn solve_generator(
        &self,
        basis: &Basis,
        unknowns: &UnknownMatrix,
    ) -> SpinRepResult<Matrix<Algebraic>> {
        let dim = basis.dimension();
        let solve = |k: usize| -> SpinRepResult<ColumnSolution> {
            let eq = ColumnEquation::build(unknowns, basis, k)?;
            solve_column(&eq)
        };

        let solutions: Vec<ColumnSolution> = if self.config.parallel_columns {
            (0..dim).into_par_iter().map(&solve).collect::<SpinRepResult<_>>()?
        } else {
            (0..dim).map(&solve).collect::<SpinRepResult<_>>()?
        };
        log::debug!(
            "{}: solved {dim} columns{}",
            unknowns.generator(),
            if self.config.parallel_columns {
                " in parallel"
            } else {
                ""
            }
        );

        let assembled = reassemble(unknowns, solutions)?;
        let simplified = self.simplifier.simplify(&assembled);
        into_exact(unknowns.generator(), simplified)
    }
}

/// Unwrap every entry, failing on the first one left approximate.
fn into_exact(
    generator: Generator,
    m: Matrix<MatrixEntry>,
) -> SpinRepResult<Matrix<Algebraic>> {
    let dim = m.dim();
    let data = m
        .into_row_major()
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            entry.into_exact().map_err(|z| {
                log::error!("{generator} entry ({}, {}) stayed inexact: {z}", idx / dim, idx % dim);
                SpinRepError::InexactEntry {
                    generator,
                    row: idx / dim,
                    col: idx % dim,
                    value: z.to_string(),
                }
            })
        })
        .collect::<SpinRepResult<Vec<_>>>()?;
    Matrix::from_row_major(dim, data)
}

/// `[J1, J2, J3]` for `spin` under the default configuration.
pub fn compute_irrep(spin: Spin) -> SpinRepResult<Irrep> {
    IrrepBuilder::new(IrrepConfig::default())?.build(spin)
}
