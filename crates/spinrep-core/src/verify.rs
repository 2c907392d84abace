// ─────────────────────────────────────────────────────────────────────
// SpinRep — Invariant Checks
// ─────────────────────────────────────────────────────────────────────
//! Exact post-construction checks of the SO(3) algebra:
//!
//!   [J1, J2] = iJ3,  [J2, J3] = iJ1,  [J3, J1] = iJ2
//!   J_a = J_a†
//!   J1² + J2² + J3² = j(j+1)·I
//!
//! All comparisons are exact; a non-zero residual is a construction
//! defect, not rounding noise.

use num_bigint::BigInt;
use num_rational::BigRational;

use spinrep_algebra::{Algebraic, Matrix};
use spinrep_types::{SpinRepError, SpinRepResult};

use crate::irrep::Irrep;

fn violation(msg: String) -> SpinRepError {
    log::error!("invariant violation: {msg}");
    SpinRepError::InvariantViolation(msg)
}

/// `[J1,J2] − iJ3`, `[J2,J3] − iJ1`, `[J3,J1] − iJ2`; all zero on success.
pub fn commutation_residuals(irrep: &Irrep) -> SpinRepResult<[Matrix<Algebraic>; 3]> {
    let i = Algebraic::i();
    let [j1, j2, j3] = irrep.generators();
    Ok([
        j1.commutator(j2)?.try_sub(&j3.scale(&i))?,
        j2.commutator(j3)?.try_sub(&j1.scale(&i))?,
        j3.commutator(j1)?.try_sub(&j2.scale(&i))?,
    ])
}

/// `J² − j(j+1)·I`; zero on success.
pub fn casimir_residual(irrep: &Irrep) -> SpinRepResult<Matrix<Algebraic>> {
    let t = i64::from(irrep.spin.twice());
    let jj1 = Algebraic::from_rational(BigRational::new(
        BigInt::from(t) * BigInt::from(t + 2),
        BigInt::from(4),
    ));
    irrep
        .casimir()?
        .try_sub(&Matrix::identity(irrep.dimension()).scale(&jj1))
}

/// Check every generator invariant, failing on the first violation.
pub fn check_invariants(irrep: &Irrep) -> SpinRepResult<()> {
    let dim = irrep.spin.dimension();
    for (name, g) in ["J1", "J2", "J3"].iter().zip(irrep.generators()) {
        if g.dim() != dim {
            return Err(violation(format!(
                "{name} is {0}×{0}, expected {dim}×{dim}",
                g.dim()
            )));
        }
        if !g.is_hermitian() {
            return Err(violation(format!("{name} is not Hermitian")));
        }
    }

    let relations = ["[J1,J2] = iJ3", "[J2,J3] = iJ1", "[J3,J1] = iJ2"];
    for (relation, residual) in relations.iter().zip(commutation_residuals(irrep)?) {
        if !residual.is_zero() {
            return Err(violation(format!(
                "{relation} fails for j = {}: residual {residual}",
                irrep.spin
            )));
        }
    }

    let residual = casimir_residual(irrep)?;
    if !residual.is_zero() {
        return Err(violation(format!(
            "Casimir ≠ j(j+1) for j = {}: residual {residual}",
            irrep.spin
        )));
    }
    Ok(())
}
