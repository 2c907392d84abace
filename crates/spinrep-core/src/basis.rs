// ─────────────────────────────────────────────────────────────────────
// SpinRep — Basis & Ladder Coefficients
// ─────────────────────────────────────────────────────────────────────
//! The `J3` eigenbasis `e_0..e_{D-1}` with `m_k = j − k`, and the
//! ladder coefficients
//!
//!   c+(m) = sqrt(j(j+1) − m(m+1)),   c−(m) = sqrt(j(j+1) − m(m−1)).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use spinrep_algebra::Algebraic;
use spinrep_types::Spin;

/// Direction of a ladder operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    /// `J+ = J1 + iJ2`, maps `m → m + 1`.
    Raising,
    /// `J− = J1 − iJ2`, maps `m → m − 1`.
    Lowering,
}

impl Ladder {
    fn step(self) -> BigRational {
        match self {
            Ladder::Raising => BigRational::one(),
            Ladder::Lowering => -BigRational::one(),
        }
    }
}

/// Magnetic quantum numbers, basis vectors, and ladder coefficients
/// for one spin.
#[derive(Debug, Clone)]
pub struct Basis {
    spin: Spin,
    j: BigRational,
    /// `j(j+1)`
    casimir: BigRational,
    /// `m_0 > m_1 > ... > m_{D-1}`
    magnetic: Vec<BigRational>,
}

impl Basis {
    pub fn new(spin: Spin) -> Self {
        let half = |twice: i64| BigRational::new(BigInt::from(twice), BigInt::from(2));
        let j = half(spin.twice() as i64);
        let casimir = &j * (&j + BigRational::one());
        let magnetic = (0..spin.dimension())
            .map(|k| half(spin.twice_magnetic(k)))
            .collect();
        Self {
            spin,
            j,
            casimir,
            magnetic,
        }
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn dimension(&self) -> usize {
        self.magnetic.len()
    }

    pub fn j(&self) -> &BigRational {
        &self.j
    }

    /// `j(j+1)`, the value of the Casimir invariant.
    pub fn casimir(&self) -> &BigRational {
        &self.casimir
    }

    pub fn magnetic_numbers(&self) -> &[BigRational] {
        &self.magnetic
    }

    pub fn magnetic(&self, k: usize) -> Option<&BigRational> {
        self.magnetic.get(k)
    }

    /// Unit column vector `e_k`.
    pub fn basis_vector(&self, k: usize) -> Option<Vec<Algebraic>> {
        let dim = self.dimension();
        (k < dim).then(|| {
            (0..dim)
                .map(|i| {
                    if i == k {
                        Algebraic::one()
                    } else {
                        Algebraic::zero()
                    }
                })
                .collect()
        })
    }

    pub fn basis_vectors(&self) -> Vec<Vec<Algebraic>> {
        (0..self.dimension())
            .filter_map(|k| self.basis_vector(k))
            .collect()
    }

    /// `J± e_k = c±(m_k) · e_{k∓1}`; the zero vector when the ladder
    /// steps off the end of the basis.
    pub fn ladder_image(&self, ladder: Ladder, k: usize) -> Option<Vec<Algebraic>> {
        let m = self.magnetic(k)?;
        let target = match ladder {
            Ladder::Raising => k.checked_sub(1),
            Ladder::Lowering => k.checked_add(1),
        };
        let image = match target.and_then(|t| self.basis_vector(t)) {
            Some(e) => {
                let c = self.coefficient(ladder, m);
                e.into_iter().map(|v| v * &c).collect()
            }
            None => vec![Algebraic::zero(); self.dimension()],
        };
        Some(image)
    }

    /// Coefficient of `J± |m⟩ = c±(m) |m ± 1⟩`.
    ///
    /// Exactly zero whenever `m ± 1` leaves `[-j, j]`: the ladder
    /// operators annihilate the extremal states.
    pub fn coefficient(&self, ladder: Ladder, m: &BigRational) -> Algebraic {
        let target = m + ladder.step();
        if target > self.j || target < -self.j.clone() {
            return Algebraic::zero();
        }
        let radicand = &self.casimir - m * &target;
        if !radicand.is_positive() {
            return Algebraic::zero();
        }
        Algebraic::sqrt(&radicand)
    }

    /// `c+(m)`
    pub fn raising(&self, m: &BigRational) -> Algebraic {
        self.coefficient(Ladder::Raising, m)
    }

    /// `c−(m)`
    pub fn lowering(&self, m: &BigRational) -> Algebraic {
        self.coefficient(Ladder::Lowering, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> BigRational {
        BigRational::new(BigInt::from(num), BigInt::from(den))
    }

    #[test]
    fn test_magnetic_numbers_descend_symmetrically() {
        for twice in 0..7 {
            let basis = Basis::new(Spin::from_twice(twice));
            let ms = basis.magnetic_numbers();
            assert_eq!(ms.len(), twice as usize + 1);
            assert_eq!(&ms[0], basis.j());
            for w in ms.windows(2) {
                assert_eq!(&w[0] - &w[1], BigRational::one());
            }
            for (a, b) in ms.iter().zip(ms.iter().rev()) {
                assert_eq!(a, &-b.clone());
            }
        }
    }

    #[test]
    fn test_basis_vectors_are_unit() {
        let basis = Basis::new(Spin::from_twice(2));
        let es = basis.basis_vectors();
        assert_eq!(es.len(), 3);
        for (k, e) in es.iter().enumerate() {
            for (i, v) in e.iter().enumerate() {
                assert_eq!(v.is_one(), i == k);
            }
        }
        assert!(basis.basis_vector(3).is_none());
    }

    #[test]
    fn test_ladder_image() {
        // spin 1: J+ e_1 = sqrt(2) e_0, J- e_1 = sqrt(2) e_2
        let basis = Basis::new(Spin::from_twice(2));
        let sqrt2 = Algebraic::sqrt_integer(2);
        let up = basis.ladder_image(Ladder::Raising, 1).unwrap();
        assert_eq!(up, vec![sqrt2.clone(), Algebraic::zero(), Algebraic::zero()]);
        let down = basis.ladder_image(Ladder::Lowering, 1).unwrap();
        assert_eq!(down, vec![Algebraic::zero(), Algebraic::zero(), sqrt2]);

        assert!(basis
            .ladder_image(Ladder::Raising, 0)
            .unwrap()
            .iter()
            .all(Zero::is_zero));
        assert!(basis
            .ladder_image(Ladder::Lowering, 2)
            .unwrap()
            .iter()
            .all(Zero::is_zero));
        assert!(basis.ladder_image(Ladder::Raising, 3).is_none());
    }

    #[test]
    fn test_extremal_states_annihilated() {
        for twice in 0..7 {
            let basis = Basis::new(Spin::from_twice(twice));
            let j = basis.j().clone();
            assert!(basis.raising(&j).is_zero(), "c+(j) for 2j = {twice}");
            assert!(basis.lowering(&-j).is_zero(), "c-(-j) for 2j = {twice}");
        }
    }

    #[test]
    fn test_spin_half_coefficients() {
        let basis = Basis::new(Spin::from_twice(1));
        assert_eq!(basis.raising(&q(-1, 2)), Algebraic::one());
        assert_eq!(basis.lowering(&q(1, 2)), Algebraic::one());
    }

    #[test]
    fn test_spin_one_coefficients() {
        let basis = Basis::new(Spin::from_twice(2));
        let sqrt2 = Algebraic::sqrt_integer(2);
        assert_eq!(basis.raising(&q(0, 1)), sqrt2);
        assert_eq!(basis.raising(&q(-1, 1)), sqrt2);
        assert_eq!(basis.lowering(&q(1, 1)), sqrt2);
        assert_eq!(basis.lowering(&q(0, 1)), sqrt2);
    }

    #[test]
    fn test_spin_three_halves_coefficients() {
        // c+(1/2) = sqrt(15/4 - 3/4), c+(-1/2) = sqrt(15/4 + 1/4)
        let basis = Basis::new(Spin::from_twice(3));
        assert_eq!(basis.raising(&q(1, 2)), Algebraic::sqrt_integer(3));
        assert_eq!(basis.raising(&q(-1, 2)), Algebraic::from_integer(2));
        assert_eq!(basis.lowering(&q(3, 2)), Algebraic::sqrt_integer(3));
    }

    #[test]
    fn test_out_of_range_is_zero() {
        let basis = Basis::new(Spin::from_twice(2));
        assert!(basis.raising(&q(5, 1)).is_zero());
        assert!(basis.lowering(&q(-5, 1)).is_zero());
    }

    #[test]
    fn test_raising_lowering_symmetry() {
        // c+(m) = c-(m+1)
        let basis = Basis::new(Spin::from_twice(5));
        for m in basis.magnetic_numbers().iter().skip(1) {
            let up = m + BigRational::one();
            assert_eq!(basis.raising(m), basis.lowering(&up));
        }
    }
}
