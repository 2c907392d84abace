// ─────────────────────────────────────────────────────────────────────
// SpinRep — Matrix Reassembler
// ─────────────────────────────────────────────────────────────────────
//! Join point for the per-column solves: merges the `D` column
//! solutions of one generator and lays the values out row-major by
//! symbol serial.

use std::collections::BTreeMap;

use spinrep_algebra::{Matrix, MatrixEntry};
use spinrep_types::{SpinRepError, SpinRepResult};

use crate::solver::ColumnSolution;
use crate::unknowns::UnknownMatrix;

fn malformed(msg: String) -> SpinRepError {
    log::error!("reassembly failed: {msg}");
    SpinRepError::MalformedSolution(msg)
}

/// Merge all column solutions for `unknowns` into one matrix.
///
/// Requires exactly `D` solutions whose symbols, taken together, are
/// the serials `base..base + D²` with no gap and no duplicate.
pub fn reassemble(
    unknowns: &UnknownMatrix,
    solutions: Vec<ColumnSolution>,
) -> SpinRepResult<Matrix<MatrixEntry>> {
    let dim = unknowns.dim();
    if solutions.len() != dim {
        return Err(malformed(format!(
            "{}: expected {dim} column solutions, got {}",
            unknowns.generator(),
            solutions.len()
        )));
    }

    let mut merged = BTreeMap::new();
    for (column, solution) in solutions.into_iter().enumerate() {
        for (symbol, value) in solution {
            if merged.insert(symbol, value).is_some() {
                return Err(malformed(format!(
                    "{}: {symbol} solved twice (again in column {column})",
                    unknowns.generator()
                )));
            }
        }
    }
    if merged.len() != dim * dim {
        return Err(malformed(format!(
            "{}: expected {} unknowns, got {}",
            unknowns.generator(),
            dim * dim,
            merged.len()
        )));
    }

    let base = unknowns.base_index();
    let mut data = Vec::with_capacity(dim * dim);
    for (offset, (symbol, value)) in merged.into_iter().enumerate() {
        if symbol.index() != base + offset {
            return Err(malformed(format!(
                "{}: expected x{} at position {offset}, found {symbol}",
                unknowns.generator(),
                base + offset
            )));
        }
        data.push(MatrixEntry::Exact(value));
    }
    Matrix::from_row_major(dim, data)
}
