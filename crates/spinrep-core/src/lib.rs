// ─────────────────────────────────────────────────────────────────────
// SpinRep — Generator Construction
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Exact matrices of the SO(3) generators `J1, J2, J3` in the spin-`j`
//! irreducible representation.
//!
//! Pipeline, per non-diagonal generator:
//!
//!   Basis → UnknownMatrix → ColumnEquation (× D) → solve_column (× D)
//!         → reassemble → ExactnessSimplifier → Matrix<Algebraic>
//!
//! `J3` is diagonal in the chosen basis and is written down directly.
//!
//! # Invariants
//!
//! 1. **Exact or nothing**: `compute_irrep` returns all three matrices
//!    with every entry exact, or an error. There is no partial result.
//!
//! 2. **Extremal states are annihilated**: `c+(j) = c-(-j) = 0` is an
//!    explicit range check in the ladder provider, not a side effect of
//!    dropping out-of-range basis vectors.
//!
//! 3. **Columns are independent**: each column solve touches only its
//!    own unknowns, so columns may run in parallel; the reassembler is
//!    the join point.

pub mod basis;
pub mod equation;
pub mod irrep;
pub mod reassemble;
pub mod solver;
pub mod unknowns;
pub mod verify;

pub use basis::{Basis, Ladder};
pub use equation::ColumnEquation;
pub use irrep::{compute_irrep, Irrep, IrrepBuilder};
pub use reassemble::reassemble;
pub use solver::{solve_column, ColumnSolution};
pub use unknowns::{partition_unknowns, required_symbols, Symbol, SymbolPool, UnknownMatrix};
pub use verify::check_invariants;
