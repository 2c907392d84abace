// ─────────────────────────────────────────────────────────────────────
// SpinRep — Exactness Simplifier
// ─────────────────────────────────────────────────────────────────────
//! Best-effort recogniser turning floating-point matrix entries back
//! into exact algebraic numbers.
//!
//! Real and imaginary parts are matched independently against
//! `±(p/q)·sqrt(r)` with `r` square-free, trying radicands in ascending
//! order so the simplest form wins (`0.5 → 1/2` before anything with a
//! radical, `0.7071067811865475 → sqrt(2)/2`). The fraction `p/q` is
//! the best continued-fraction convergent with `q ≤ max_denominator`.

use std::fmt;

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use spinrep_types::IrrepConfig;

use crate::algebraic::Algebraic;
use crate::matrix::Matrix;

/// Upper bound on continued-fraction terms; convergents with
/// denominators below 2^53 never need more.
const MAX_CF_TERMS: usize = 64;

/// A matrix entry that is either exact or a floating-point stand-in.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixEntry {
    Exact(Algebraic),
    Approx(Complex64),
}

impl MatrixEntry {
    pub fn is_exact(&self) -> bool {
        matches!(self, MatrixEntry::Exact(_))
    }

    pub fn as_exact(&self) -> Option<&Algebraic> {
        match self {
            MatrixEntry::Exact(v) => Some(v),
            MatrixEntry::Approx(_) => None,
        }
    }

    /// The exact value, or the float back as the error.
    pub fn into_exact(self) -> Result<Algebraic, Complex64> {
        match self {
            MatrixEntry::Exact(v) => Ok(v),
            MatrixEntry::Approx(z) => Err(z),
        }
    }

    pub fn to_complex64(&self) -> Complex64 {
        match self {
            MatrixEntry::Exact(v) => v.to_complex64(),
            MatrixEntry::Approx(z) => *z,
        }
    }
}

impl From<Algebraic> for MatrixEntry {
    fn from(v: Algebraic) -> Self {
        MatrixEntry::Exact(v)
    }
}

impl From<Complex64> for MatrixEntry {
    fn from(z: Complex64) -> Self {
        MatrixEntry::Approx(z)
    }
}

impl From<f64> for MatrixEntry {
    fn from(x: f64) -> Self {
        MatrixEntry::Approx(Complex64::new(x, 0.0))
    }
}

impl fmt::Display for MatrixEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixEntry::Exact(v) => write!(f, "{v}"),
            MatrixEntry::Approx(z) => write!(f, "{z}"),
        }
    }
}

/// Float → exact rewriting with a fixed tolerance.
#[derive(Debug, Clone)]
pub struct ExactnessSimplifier {
    tolerance: f64,
    max_denominator: u64,
    /// Square-free radicands `1..=max_radicand`, ascending.
    radicands: Vec<u64>,
}

impl ExactnessSimplifier {
    pub fn new(tolerance: f64, max_radicand: u64, max_denominator: u64) -> Self {
        Self {
            tolerance,
            max_denominator,
            radicands: (1..=max_radicand).filter(|&r| is_square_free(r)).collect(),
        }
    }

    pub fn from_config(config: &IrrepConfig) -> Self {
        Self::new(
            config.simplify_tolerance,
            config.max_radicand,
            config.max_denominator,
        )
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Match a real number to `±(p/q)·sqrt(r)`.
    pub fn recognize_real(&self, x: f64) -> Option<Algebraic> {
        if !x.is_finite() {
            return None;
        }
        if x.abs() <= self.tolerance {
            return Some(Algebraic::zero());
        }
        let magnitude = x.abs();
        for &r in &self.radicands {
            let root = (r as f64).sqrt();
            let Some((p, q)) = best_rational(magnitude / root, self.max_denominator) else {
                continue;
            };
            if p == 0 {
                continue;
            }
            let candidate = p as f64 / q as f64 * root;
            if (candidate - magnitude).abs() <= self.tolerance {
                let coeff = BigRational::new(BigInt::from(p), BigInt::from(q));
                let value = &Algebraic::from_rational(coeff) * &Algebraic::sqrt_integer(r as i64);
                return Some(if x < 0.0 { -value } else { value });
            }
        }
        None
    }

    /// Match both parts of a complex number.
    pub fn recognize(&self, z: Complex64) -> Option<Algebraic> {
        let re = self.recognize_real(z.re)?;
        let im = self.recognize_real(z.im)?;
        Some(re + &Algebraic::i() * &im)
    }

    /// Rewrite an approximate entry if it is recognised; exact entries
    /// pass through untouched.
    pub fn simplify_entry(&self, entry: &MatrixEntry) -> MatrixEntry {
        match entry {
            MatrixEntry::Exact(_) => entry.clone(),
            MatrixEntry::Approx(z) => match self.recognize(*z) {
                Some(v) => MatrixEntry::Exact(v),
                None => {
                    log::debug!(
                        "no exact form for {z} within tolerance {:e}",
                        self.tolerance
                    );
                    entry.clone()
                }
            },
        }
    }

    /// Entrywise [`simplify_entry`](Self::simplify_entry).
    pub fn simplify(&self, m: &Matrix<MatrixEntry>) -> Matrix<MatrixEntry> {
        m.map(|e| self.simplify_entry(e))
    }
}

impl Default for ExactnessSimplifier {
    fn default() -> Self {
        Self::from_config(&IrrepConfig::default())
    }
}

fn is_square_free(n: u64) -> bool {
    let mut p = 2u64;
    while p * p <= n {
        if n % (p * p) == 0 {
            return false;
        }
        p += 1;
    }
    true
}

/// Last continued-fraction convergent `p/q` of `y ≥ 0` with
/// `q ≤ max_den`.
fn best_rational(y: f64, max_den: u64) -> Option<(u64, u64)> {
    if !y.is_finite() || y < 0.0 || y >= 9.0e15 {
        return None;
    }
    let (mut h0, mut h1) = (0u64, 1u64);
    let (mut k0, mut k1) = (1u64, 0u64);
    let mut x = y;
    let mut best = None;
    for _ in 0..MAX_CF_TERMS {
        // snap values a rounding error below an integer
        let a = if (x - x.round()).abs() < 1e-9 {
            x.round()
        } else {
            x.floor()
        };
        if a >= 9.0e15 {
            break;
        }
        let a = a as u64;
        let (Some(h2), Some(k2)) = (
            a.checked_mul(h1).and_then(|v| v.checked_add(h0)),
            a.checked_mul(k1).and_then(|v| v.checked_add(k0)),
        ) else {
            break;
        };
        if k2 > max_den {
            break;
        }
        best = Some((h2, k2));
        (h0, h1) = (h1, h2);
        (k0, k1) = (k1, k2);
        let frac = x - a as f64;
        if frac < 1e-12 {
            break;
        }
        x = 1.0 / frac;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_free() {
        let sf: Vec<u64> = (1..=12).filter(|&n| is_square_free(n)).collect();
        assert_eq!(sf, vec![1, 2, 3, 5, 6, 7, 10, 11]);
    }

    #[test]
    fn test_best_rational() {
        assert_eq!(best_rational(0.5, 100), Some((1, 2)));
        assert_eq!(best_rational(3.0, 100), Some((3, 1)));
        assert_eq!(best_rational(0.75, 100), Some((3, 4)));
        // 355/113 is the classic pi convergent
        assert_eq!(best_rational(std::f64::consts::PI, 200), Some((355, 113)));
        assert_eq!(best_rational(f64::NAN, 10), None);
    }

    #[test]
    fn test_recognize_half() {
        let s = ExactnessSimplifier::default();
        assert_eq!(s.recognize_real(0.5).unwrap().to_string(), "1/2");
        assert_eq!(s.recognize_real(-0.5).unwrap().to_string(), "-1/2");
    }

    #[test]
    fn test_recognize_radicals() {
        let s = ExactnessSimplifier::default();
        assert_eq!(
            s.recognize_real(0.707106781186545).unwrap().to_string(),
            "sqrt(2)/2"
        );
        assert_eq!(
            s.recognize_real(3.0f64.sqrt() / 2.0).unwrap().to_string(),
            "sqrt(3)/2"
        );
        assert_eq!(
            s.recognize_real(6.0f64.sqrt()).unwrap().to_string(),
            "sqrt(6)"
        );
    }

    #[test]
    fn test_recognize_complex() {
        let s = ExactnessSimplifier::default();
        let v = s.recognize(Complex64::new(0.0, -0.5)).unwrap();
        assert_eq!(v.to_string(), "-i/2");
        let w = s.recognize(Complex64::new(1.0, 2.0f64.sqrt())).unwrap();
        assert_eq!(w.to_string(), "1 + i*sqrt(2)");
    }

    #[test]
    fn test_recognize_tiny_is_zero() {
        let s = ExactnessSimplifier::default();
        assert!(s.recognize_real(1e-14).unwrap().is_zero());
    }

    #[test]
    fn test_unrecognised_stays_approx() {
        let s = ExactnessSimplifier::new(1e-12, 10, 100);
        let e = MatrixEntry::from(std::f64::consts::PI);
        assert_eq!(s.simplify_entry(&e), e);
        assert!(s.recognize_real(f64::INFINITY).is_none());
    }

    #[test]
    fn test_entry_accessors() {
        let exact = MatrixEntry::from(Algebraic::sqrt_integer(2));
        assert_eq!(exact.as_exact(), Some(&Algebraic::sqrt_integer(2)));
        assert!((exact.to_complex64().re - 2.0f64.sqrt()).abs() < 1e-15);
        let approx = MatrixEntry::from(0.25);
        assert!(approx.as_exact().is_none());
        assert_eq!(approx.clone().into_exact(), Err(Complex64::new(0.25, 0.0)));
    }

    #[test]
    fn test_exact_entries_untouched() {
        let s = ExactnessSimplifier::default();
        let v = &Algebraic::sqrt_integer(7) + &Algebraic::i();
        let e = MatrixEntry::Exact(v.clone());
        assert_eq!(s.simplify_entry(&e), MatrixEntry::Exact(v));
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let s = ExactnessSimplifier::default();
        let m = Matrix::from_row_major(
            2,
            vec![
                MatrixEntry::from(0.5),
                MatrixEntry::from(Complex64::new(0.0, 0.707106781186545)),
                MatrixEntry::from(std::f64::consts::E),
                MatrixEntry::Exact(Algebraic::sqrt_integer(3)),
            ],
        )
        .unwrap();
        let once = s.simplify(&m);
        let twice = s.simplify(&once);
        assert_eq!(once, twice);
        assert!(once[(0, 0)].is_exact());
        assert!(once[(0, 1)].is_exact());
        assert!(!once[(1, 0)].is_exact());
    }
}
