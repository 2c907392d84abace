// ─────────────────────────────────────────────────────────────────────
// SpinRep — Exact Scalar Field
// ─────────────────────────────────────────────────────────────────────
//! Exact complex algebraic numbers of the form
//!
//!   Σ_r (a_r + i·b_r)·sqrt(r),   a_r, b_r ∈ Q,  r square-free
//!
//! This is closed under `+ − ×` and conjugation, and covers every
//! ladder coefficient `sqrt((j − m)(j + m + 1))` as well as the `1/2`
//! and `1/(2i)` prefactors of the generator equations.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_complex::{Complex, Complex64};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Serialize, Serializer};

/// Coefficient of a single radical: an exact Gaussian rational.
pub type Coefficient = Complex<BigRational>;

/// Exact element of Q(i)[√2, √3, √5, ...].
///
/// Stored as radicand → coefficient with no zero coefficients and only
/// square-free radicands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algebraic {
    terms: BTreeMap<BigUint, Coefficient>,
}

impl Algebraic {
    /// The imaginary unit.
    pub fn i() -> Self {
        Self::from_coefficient(Complex::i())
    }

    pub fn from_integer(n: i64) -> Self {
        Self::from_rational(BigRational::from_integer(BigInt::from(n)))
    }

    /// `num / den`. Panics if `den == 0`.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_rational(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }

    pub fn from_rational(r: BigRational) -> Self {
        Self::from_coefficient(Complex::new(r, BigRational::zero()))
    }

    pub fn from_coefficient(c: Coefficient) -> Self {
        Self::monomial(c, BigUint::one())
    }

    /// `c·sqrt(radicand)`; `radicand` must already be square-free.
    fn monomial(c: Coefficient, radicand: BigUint) -> Self {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(radicand, c);
        }
        Self { terms }
    }

    /// Principal square root of a rational.
    ///
    /// `sqrt(p/q) = sqrt(p·q)/q`, with square factors pulled out of the
    /// radical. Negative arguments give `i·sqrt(|r|)`.
    pub fn sqrt(r: &BigRational) -> Self {
        if r.is_zero() {
            return Self::zero();
        }
        let q = r.denom().magnitude().clone();
        let (outside, radicand) = split_square(&(r.numer().magnitude() * &q));
        let scale = BigRational::new(BigInt::from(outside), BigInt::from(q));
        let c = if r.is_negative() {
            Complex::new(BigRational::zero(), scale)
        } else {
            Complex::new(scale, BigRational::zero())
        };
        Self::monomial(c, radicand)
    }

    pub fn sqrt_integer(n: i64) -> Self {
        Self::sqrt(&BigRational::from_integer(BigInt::from(n)))
    }

    /// Radicand/coefficient pairs in ascending radicand order.
    pub fn terms(&self) -> impl Iterator<Item = (&BigUint, &Coefficient)> {
        self.terms.iter()
    }

    pub fn is_real(&self) -> bool {
        self.terms.values().all(|c| c.im.is_zero())
    }

    /// True for zero and for plain rationals (no radical, no `i`).
    pub fn is_rational(&self) -> bool {
        match self.terms.iter().next() {
            None => true,
            Some((r, c)) => self.terms.len() == 1 && r.is_one() && c.im.is_zero(),
        }
    }

    /// The rational value, if this is one.
    pub fn as_rational(&self) -> Option<BigRational> {
        if !self.is_rational() {
            return None;
        }
        Some(
            self.terms
                .values()
                .next()
                .map(|c| c.re.clone())
                .unwrap_or_else(BigRational::zero),
        )
    }

    /// Complex conjugate. Radicals are real and positive.
    pub fn conj(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(r, c)| (r.clone(), c.conj()))
                .collect(),
        }
    }

    /// Multiply by a Gaussian rational.
    pub fn scale(&self, c: &Coefficient) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(r, v)| (r.clone(), v * c))
                .collect(),
        }
    }

    /// Divide by a single-radical element `c·sqrt(r)`.
    ///
    /// Returns `None` for a zero divisor or a divisor with several
    /// radicals; the generator equations only ever divide by `2` or `2i`.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let mut it = rhs.terms.iter();
        let (r, c) = it.next()?;
        if it.next().is_some() {
            return None;
        }
        // 1 / (c·sqrt(r)) = sqrt(r) / (c·r)
        let denom = c.scale(BigRational::from_integer(BigInt::from(r.clone())));
        let inverse = Self::monomial(denom.inv(), r.clone());
        Some(self * &inverse)
    }

    /// Floating-point value for display and numeric downstream use.
    pub fn to_complex64(&self) -> Complex64 {
        self.terms
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, (r, c)| {
                let root = r.to_f64().unwrap_or(f64::NAN).sqrt();
                let re = c.re.to_f64().unwrap_or(f64::NAN);
                let im = c.im.to_f64().unwrap_or(f64::NAN);
                acc + Complex64::new(re * root, im * root)
            })
    }

    fn accumulate(&mut self, radicand: BigUint, c: Coefficient) {
        match self.terms.entry(radicand) {
            Entry::Vacant(slot) => {
                if !c.is_zero() {
                    slot.insert(c);
                }
            }
            Entry::Occupied(mut slot) => {
                let sum = slot.get() + &c;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }
}

/// Split `n` into `(s, r)` with `n = s²·r` and `r` square-free.
fn split_square(n: &BigUint) -> (BigUint, BigUint) {
    let mut rest = n.clone();
    let mut outside = BigUint::one();
    let mut radicand = BigUint::one();
    let mut p = BigUint::from(2u32);
    while &p * &p <= rest {
        let mut odd = false;
        while (&rest % &p).is_zero() {
            rest /= &p;
            if odd {
                outside *= &p;
            }
            odd = !odd;
        }
        if odd {
            radicand *= &p;
        }
        p += 1u32;
    }
    (outside, radicand * rest)
}

impl Zero for Algebraic {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Algebraic {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl From<i64> for Algebraic {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<BigRational> for Algebraic {
    fn from(r: BigRational) -> Self {
        Self::from_rational(r)
    }
}

impl Add<&Algebraic> for &Algebraic {
    type Output = Algebraic;

    fn add(self, rhs: &Algebraic) -> Algebraic {
        let mut out = self.clone();
        for (r, c) in &rhs.terms {
            out.accumulate(r.clone(), c.clone());
        }
        out
    }
}

impl Sub<&Algebraic> for &Algebraic {
    type Output = Algebraic;

    fn sub(self, rhs: &Algebraic) -> Algebraic {
        let mut out = self.clone();
        for (r, c) in &rhs.terms {
            out.accumulate(r.clone(), -c.clone());
        }
        out
    }
}

impl Mul<&Algebraic> for &Algebraic {
    type Output = Algebraic;

    fn mul(self, rhs: &Algebraic) -> Algebraic {
        let mut out = Algebraic::zero();
        for (r1, c1) in &self.terms {
            for (r2, c2) in &rhs.terms {
                // sqrt(r1)·sqrt(r2) = g·sqrt((r1/g)(r2/g)), g = gcd(r1, r2)
                let g = r1.gcd(r2);
                let radicand = (r1 / &g) * (r2 / &g);
                let c = (c1 * c2).scale(BigRational::from_integer(BigInt::from(g)));
                out.accumulate(radicand, c);
            }
        }
        out
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Algebraic> for Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: Algebraic) -> Algebraic {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Algebraic> for Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: &Algebraic) -> Algebraic {
                (&self).$method(rhs)
            }
        }

        impl $imp<Algebraic> for &Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: Algebraic) -> Algebraic {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Neg for Algebraic {
    type Output = Algebraic;

    fn neg(self) -> Algebraic {
        Algebraic {
            terms: self.terms.into_iter().map(|(r, c)| (r, -c)).collect(),
        }
    }
}

impl Neg for &Algebraic {
    type Output = Algebraic;

    fn neg(self) -> Algebraic {
        -self.clone()
    }
}

impl Sum for Algebraic {
    fn sum<I: Iterator<Item = Algebraic>>(iter: I) -> Self {
        iter.fold(Algebraic::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Algebraic> for Algebraic {
    fn sum<I: Iterator<Item = &'a Algebraic>>(iter: I) -> Self {
        iter.fold(Algebraic::zero(), |acc, x| acc + x)
    }
}

/// Write one positive monomial, e.g. `3*i*sqrt(2)/4`.
fn write_monomial(
    f: &mut fmt::Formatter<'_>,
    q: &BigRational,
    imaginary: bool,
    radicand: &BigUint,
) -> fmt::Result {
    let mut factors: Vec<String> = Vec::with_capacity(3);
    if !q.numer().is_one() || (!imaginary && radicand.is_one()) {
        factors.push(q.numer().to_string());
    }
    if imaginary {
        factors.push("i".to_string());
    }
    if !radicand.is_one() {
        factors.push(format!("sqrt({radicand})"));
    }
    f.write_str(&factors.join("*"))?;
    if !q.denom().is_one() {
        write!(f, "/{}", q.denom())?;
    }
    Ok(())
}

/// Renders in the usual CAS notation: `sqrt(2)/2`, `-i/2`, `1 + i`.
impl fmt::Display for Algebraic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        let mut first = true;
        for (r, c) in &self.terms {
            for (q, imaginary) in [(&c.re, false), (&c.im, true)] {
                if q.is_zero() {
                    continue;
                }
                match (first, q.is_negative()) {
                    (true, true) => f.write_str("-")?,
                    (true, false) => {}
                    (false, true) => f.write_str(" - ")?,
                    (false, false) => f.write_str(" + ")?,
                }
                first = false;
                write_monomial(f, &q.abs(), imaginary, r)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Algebraic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
