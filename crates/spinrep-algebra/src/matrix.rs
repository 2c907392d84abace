// ─────────────────────────────────────────────────────────────────────
// SpinRep — Dense Square Matrices
// ─────────────────────────────────────────────────────────────────────
//! Square row-major matrices. Generic storage and layout helpers work
//! for any entry type; the linear-algebra operations needed to state
//! the SO(3) invariants are provided for `Matrix<Algebraic>`.

use std::fmt;
use std::ops::Index;

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;

use spinrep_types::{SpinRepError, SpinRepResult};

use crate::algebraic::Algebraic;

/// A `dim × dim` matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Build entry `(row, col)` from `f(row, col)`.
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dim * dim);
        for row in 0..dim {
            for col in 0..dim {
                data.push(f(row, col));
            }
        }
        Self { dim, data }
    }

    /// Lay `data` out row-major; it must hold exactly `dim²` entries.
    pub fn from_row_major(dim: usize, data: Vec<T>) -> SpinRepResult<Self> {
        if data.len() != dim * dim {
            return Err(SpinRepError::DimensionMismatch {
                expected: dim * dim,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            self.data.get(row * self.dim + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.dim {
            self.data.get(row * self.dim..(row + 1) * self.dim)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; a 0×0 matrix has no rows anyway
        self.data.chunks(self.dim.max(1))
    }

    /// `(row, col, entry)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let dim = self.dim;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, v)| (idx / dim, idx % dim, v))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            dim: self.dim,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn into_row_major(self) -> Vec<T> {
        self.data
    }

    fn check_same_dim(&self, other: &Self) -> SpinRepResult<()> {
        if self.dim != other.dim {
            return Err(SpinRepError::DimensionMismatch {
                expected: self.dim,
                actual: other.dim,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of range for {0}×{0} matrix",
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

impl Matrix<Algebraic> {
    pub fn zeros(dim: usize) -> Self {
        Self::from_fn(dim, |_, _| Algebraic::zero())
    }

    pub fn identity(dim: usize) -> Self {
        Self::from_fn(dim, |r, c| {
            if r == c {
                Algebraic::one()
            } else {
                Algebraic::zero()
            }
        })
    }

    pub fn diagonal(entries: Vec<Algebraic>) -> Self {
        let dim = entries.len();
        let mut m = Self::zeros(dim);
        for (k, v) in entries.into_iter().enumerate() {
            m.data[k * dim + k] = v;
        }
        m
    }

    pub fn scale(&self, s: &Algebraic) -> Self {
        self.map(|v| v * s)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        Self::from_fn(self.dim, |r, c| self[(c, r)].conj())
    }

    pub fn try_add(&self, other: &Self) -> SpinRepResult<Self> {
        self.check_same_dim(other)?;
        Ok(Self::from_fn(self.dim, |r, c| &self[(r, c)] + &other[(r, c)]))
    }

    pub fn try_sub(&self, other: &Self) -> SpinRepResult<Self> {
        self.check_same_dim(other)?;
        Ok(Self::from_fn(self.dim, |r, c| &self[(r, c)] - &other[(r, c)]))
    }

    pub fn matmul(&self, other: &Self) -> SpinRepResult<Self> {
        self.check_same_dim(other)?;
        let n = self.dim;
        Ok(Self::from_fn(n, |r, c| {
            (0..n)
                .map(|k| &self[(r, k)] * &other[(k, c)])
                .sum::<Algebraic>()
        }))
    }

    /// `[A, B] = AB − BA`.
    pub fn commutator(&self, other: &Self) -> SpinRepResult<Self> {
        self.matmul(other)?.try_sub(&other.matmul(self)?)
    }

    pub fn trace(&self) -> Algebraic {
        (0..self.dim).map(|k| &self[(k, k)]).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Zero::is_zero)
    }

    pub fn is_hermitian(&self) -> bool {
        self.dagger() == *self
    }

    pub fn to_complex(&self) -> Matrix<Complex64> {
        self.map(Algebraic::to_complex64)
    }
}

/// Nested-list rendering: `[[0, 1/2], [1/2, 0]]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (col, v) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
