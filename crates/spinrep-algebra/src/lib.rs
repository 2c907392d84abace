// ─────────────────────────────────────────────────────────────────────
// SpinRep — Exact Algebra
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Exact scalars and dense matrices for the SO(3) generator pipeline.
//!
//! Architecture:
//!   - Algebraic: elements of Q(i)[√2, √3, ...] in canonical form
//!   - Matrix: square, row-major, generic over the entry type
//!   - ExactnessSimplifier: float → `(p/q)·sqrt(r)` recogniser
//!
//! # Invariants
//!
//! 1. **Canonical scalars**: an `Algebraic` never stores a zero
//!    coefficient and every radicand is square-free, so `==` is value
//!    equality.
//! 2. **Exact entries are fixed points**: the simplifier only rewrites
//!    `MatrixEntry::Approx`, which makes it idempotent.

pub mod algebraic;
pub mod matrix;
pub mod simplify;

pub use algebraic::{Algebraic, Coefficient};
pub use matrix::Matrix;
pub use simplify::{ExactnessSimplifier, MatrixEntry};
