// ─────────────────────────────────────────────────────────────────────
// SpinRep — Unknown Symbols
// ─────────────────────────────────────────────────────────────────────
//! Placeholder unknowns for the entries of the two non-diagonal
//! generators, laid out row-major so that column `k` of a generator is
//! exactly the set of unknowns touched by the `k`-th column equation.

use std::collections::VecDeque;
use std::fmt;

use spinrep_algebra::Matrix;
use spinrep_types::{Generator, SpinRepError, SpinRepResult};

/// An opaque unknown, identified by a serial number `x<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(usize);

impl Symbol {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Source of fresh symbols. One pool per construction; serials are
/// never reused within it.
#[derive(Debug, Default)]
pub struct SymbolPool {
    next: usize,
}

impl SymbolPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` consecutive fresh symbols.
    pub fn fresh(&mut self, count: usize) -> VecDeque<Symbol> {
        let start = self.next;
        self.next += count;
        (start..self.next).map(Symbol).collect()
    }
}

/// A `D × D` matrix of unknowns for one generator.
#[derive(Debug, Clone)]
pub struct UnknownMatrix {
    generator: Generator,
    symbols: Matrix<Symbol>,
}

impl UnknownMatrix {
    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn dim(&self) -> usize {
        self.symbols.dim()
    }

    pub fn symbols(&self) -> &Matrix<Symbol> {
        &self.symbols
    }

    /// Serial of the `(0, 0)` unknown; entries are numbered from here.
    pub fn base_index(&self) -> usize {
        self.symbols.get(0, 0).map_or(0, |s| s.index())
    }

    /// The `D` unknowns of column `k`, top to bottom.
    pub fn column(&self, k: usize) -> Option<Vec<Symbol>> {
        (k < self.dim()).then(|| (0..self.dim()).map(|r| self.symbols[(r, k)]).collect())
    }
}

/// Number of unknowns `2D²` needed for dimension `dim`, or `None` when
/// it does not fit in `usize`.
pub fn required_symbols(dim: usize) -> Option<usize> {
    dim.checked_mul(dim)?.checked_mul(2)
}

/// Split `2D²` fresh symbols into the `J1` and `J2` unknown matrices.
///
/// Consumes symbols from the front of `symbols`, each exactly once.
/// Fewer than `2D²` symbols is a construction defect.
pub fn partition_unknowns(
    dim: usize,
    symbols: &mut VecDeque<Symbol>,
) -> SpinRepResult<[UnknownMatrix; 2]> {
    let required = required_symbols(dim).unwrap_or(usize::MAX);
    if symbols.len() < required {
        log::error!(
            "unknown partition for D = {dim} needs {required} symbols, got {}",
            symbols.len()
        );
        return Err(SpinRepError::InsufficientSymbols {
            required,
            available: symbols.len(),
        });
    }
    let j1 = take_unknowns(Generator::J1, dim, symbols)?;
    let j2 = take_unknowns(Generator::J2, dim, symbols)?;
    Ok([j1, j2])
}

fn take_unknowns(
    generator: Generator,
    dim: usize,
    symbols: &mut VecDeque<Symbol>,
) -> SpinRepResult<UnknownMatrix> {
    let data: Vec<Symbol> = symbols.drain(..dim * dim).collect();
    Ok(UnknownMatrix {
        generator,
        symbols: Matrix::from_row_major(dim, data)?,
    })
}
