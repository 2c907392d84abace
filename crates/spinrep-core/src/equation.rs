// ─────────────────────────────────────────────────────────────────────
// SpinRep — Column Equations
// ─────────────────────────────────────────────────────────────────────
//! For generator `G` and basis vector `e_k` the ladder action gives
//!
//!   prefactor · G · e_k + rhs_k = 0
//!
//! with
//!
//!   J1:  prefactor = 2,   rhs_k = −c+(m_k)·e_{k−1} − c−(m_k)·e_{k+1}
//!   J2:  prefactor = 2i,  rhs_k = −c+(m_k)·e_{k−1} + c−(m_k)·e_{k+1}
//!
//! i.e. `2·J1 = J+ + J−` and `2i·J2 = J+ − J−`. `G · e_k` is column `k`
//! of `G`, so each equation involves exactly that column's unknowns.

use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use num_traits::Zero;

use spinrep_algebra::Algebraic;
use spinrep_types::{Generator, SpinRepError, SpinRepResult};

use crate::basis::{Basis, Ladder};
use crate::unknowns::{Symbol, UnknownMatrix};

/// Coefficient multiplying `G · e_k`.
pub fn prefactor(generator: Generator) -> Algebraic {
    let two = BigRational::from_integer(BigInt::from(2));
    match generator {
        Generator::J1 => Algebraic::from_rational(two),
        Generator::J2 => Algebraic::from_coefficient(Complex::new(BigRational::zero(), two)),
    }
}

/// One column's linear system, component-wise
/// `prefactor · x_r + rhs_r = 0`.
#[derive(Debug, Clone)]
pub struct ColumnEquation {
    generator: Generator,
    column: usize,
    prefactor: Algebraic,
    unknowns: Vec<Symbol>,
    rhs: Vec<Algebraic>,
}

impl ColumnEquation {
    /// Build the equation for column `column` of `unknowns`.
    pub fn build(unknowns: &UnknownMatrix, basis: &Basis, column: usize) -> SpinRepResult<Self> {
        let dim = basis.dimension();
        if unknowns.dim() != dim {
            return Err(SpinRepError::DimensionMismatch {
                expected: dim,
                actual: unknowns.dim(),
            });
        }
        let out_of_range = SpinRepError::ColumnOutOfRange {
            column,
            dimension: dim,
        };
        let raised = basis
            .ladder_image(Ladder::Raising, column)
            .ok_or_else(|| out_of_range.clone())?;
        let lowered = basis
            .ladder_image(Ladder::Lowering, column)
            .ok_or_else(|| out_of_range.clone())?;
        let symbols = unknowns.column(column).ok_or(out_of_range)?;
        let generator = unknowns.generator();

        // 2·J1 = J+ + J−, 2i·J2 = J+ − J−
        let rhs = raised
            .iter()
            .zip(&lowered)
            .map(|(up, down)| match generator {
                Generator::J1 => -(up + down),
                Generator::J2 => down - up,
            })
            .collect();

        Ok(Self {
            generator,
            column,
            prefactor: prefactor(generator),
            unknowns: symbols,
            rhs,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        generator: Generator,
        column: usize,
        prefactor: Algebraic,
        unknowns: Vec<Symbol>,
        rhs: Vec<Algebraic>,
    ) -> Self {
        Self {
            generator,
            column,
            prefactor,
            unknowns,
            rhs,
        }
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn prefactor(&self) -> &Algebraic {
        &self.prefactor
    }

    /// The `D` unknowns of column `k`, top to bottom.
    pub fn unknowns(&self) -> &[Symbol] {
        &self.unknowns
    }

    pub fn rhs(&self) -> &[Algebraic] {
        &self.rhs
    }

    /// Left-hand side `prefactor · x + rhs` for a candidate column `x`.
    pub fn residual(&self, values: &[Algebraic]) -> SpinRepResult<Vec<Algebraic>> {
        if values.len() != self.rhs.len() {
            return Err(SpinRepError::DimensionMismatch {
                expected: self.rhs.len(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(&self.rhs)
            .map(|(x, b)| &self.prefactor * x + b)
            .collect())
    }
}
