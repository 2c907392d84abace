// ─────────────────────────────────────────────────────────────────────
// SpinRep — Spin Quantum Number
// ─────────────────────────────────────────────────────────────────────
//! Total angular momentum `j`, restricted to non-negative integers and
//! half-integers. Stored as `2j` so every valid value is exact.

use std::fmt;
use std::str::FromStr;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

use crate::error::{SpinRepError, SpinRepResult};

/// A validated spin `j ∈ {0, 1/2, 1, 3/2, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Spin {
    twice: u32,
}

impl Spin {
    /// Spin with `2j = twice`. Every `u32` is valid.
    pub fn from_twice(twice: u32) -> Self {
        Self { twice }
    }

    /// Integer spin `j = n`.
    pub fn integer(n: u32) -> SpinRepResult<Self> {
        n.checked_mul(2)
            .map(Self::from_twice)
            .ok_or_else(|| SpinRepError::InvalidSpin(format!("j = {n} is too large")))
    }

    /// Spin `j = num / den`.
    ///
    /// Rejects a zero denominator, negative values, and any reduced
    /// denominator other than 1 or 2.
    pub fn from_ratio(num: i64, den: i64) -> SpinRepResult<Self> {
        if den == 0 {
            return Err(SpinRepError::InvalidSpin(format!(
                "{num}/{den} has a zero denominator"
            )));
        }
        let (num, den) = if den < 0 {
            match (num.checked_neg(), den.checked_neg()) {
                (Some(n), Some(d)) => (n, d),
                _ => {
                    return Err(SpinRepError::InvalidSpin(format!(
                        "{num}/{den} is out of range"
                    )))
                }
            }
        } else {
            (num, den)
        };
        if num < 0 {
            return Err(SpinRepError::InvalidSpin(format!(
                "j must be non-negative, got {num}/{den}"
            )));
        }
        let g = num.gcd(&den);
        let (num, den) = (num / g, den / g);
        let twice = match den {
            1 => num.checked_mul(2),
            2 => Some(num),
            _ => {
                return Err(SpinRepError::InvalidSpin(format!(
                    "j must be an integer or half-integer, got {num}/{den}"
                )))
            }
        };
        twice
            .and_then(|t| u32::try_from(t).ok())
            .map(Self::from_twice)
            .ok_or_else(|| SpinRepError::InvalidSpin(format!("j = {num}/{den} is too large")))
    }

    /// `2j`.
    pub fn twice(&self) -> u32 {
        self.twice
    }

    /// Representation dimension `D = 2j + 1`.
    pub fn dimension(&self) -> usize {
        self.twice as usize + 1
    }

    pub fn is_half_integer(&self) -> bool {
        self.twice % 2 == 1
    }

    /// `j` as a reduced `(numerator, denominator)` pair.
    pub fn as_ratio(&self) -> (u64, u64) {
        if self.is_half_integer() {
            (self.twice as u64, 2)
        } else {
            (self.twice as u64 / 2, 1)
        }
    }

    /// `2·m_k` for the `k`-th magnetic quantum number `m_k = j - k`.
    pub fn twice_magnetic(&self, k: usize) -> i64 {
        self.twice as i64 - 2 * k as i64
    }
}

impl TryFrom<(i64, i64)> for Spin {
    type Error = SpinRepError;

    fn try_from((num, den): (i64, i64)) -> SpinRepResult<Self> {
        Self::from_ratio(num, den)
    }
}

/// Accepts `"3/2"`, `"2"`, and decimal halves such as `"1.5"`.
impl FromStr for Spin {
    type Err = SpinRepError;

    fn from_str(s: &str) -> SpinRepResult<Self> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| SpinRepError::InvalidSpin(format!("cannot parse {s:?}: {e}")))
        };

        if let Some((num, den)) = s.split_once('/') {
            return Self::from_ratio(parse(num)?, parse(den)?);
        }

        if let Some((whole, frac)) = s.split_once('.') {
            let whole = if whole.is_empty() || whole == "-" {
                format!("{whole}0")
            } else {
                whole.to_string()
            };
            let whole = parse(&whole)?;
            let frac = frac.trim_end_matches('0');
            if s.starts_with('-') {
                return Err(SpinRepError::InvalidSpin(format!(
                    "j must be non-negative, got {s}"
                )));
            }
            return match frac {
                "" => Self::from_ratio(whole, 1),
                "5" => whole
                    .checked_mul(2)
                    .and_then(|t| t.checked_add(1))
                    .ok_or_else(|| SpinRepError::InvalidSpin(format!("j = {s} is too large")))
                    .and_then(|t| Self::from_ratio(t, 2)),
                _ => Err(SpinRepError::InvalidSpin(format!(
                    "j must be an integer or half-integer, got {s}"
                ))),
            };
        }

        Self::from_ratio(parse(s)?, 1)
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ratio() {
            (n, 1) => write!(f, "{n}"),
            (n, d) => write!(f, "{n}/{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension() {
        for (twice, d) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)] {
            assert_eq!(Spin::from_twice(twice).dimension(), d);
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(Spin::integer(3).unwrap().twice(), 6);
        assert!(!Spin::integer(3).unwrap().is_half_integer());
        assert!(Spin::integer(u32::MAX).is_err());
        assert_eq!(Spin::try_from((5, 2)).unwrap().as_ratio(), (5, 2));
    }

    #[test]
    fn test_from_ratio_reduces() {
        assert_eq!(Spin::from_ratio(3, 2).unwrap().twice(), 3);
        assert_eq!(Spin::from_ratio(4, 2).unwrap().twice(), 4);
        assert_eq!(Spin::from_ratio(-3, -2).unwrap().twice(), 3);
        assert_eq!(Spin::from_ratio(0, 5).unwrap().twice(), 0);
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            Spin::from_ratio(-1, 1),
            Err(SpinRepError::InvalidSpin(_))
        ));
        assert!(Spin::from_ratio(1, -2).is_err());
    }

    #[test]
    fn test_rejects_bad_denominator() {
        assert!(matches!(
            Spin::from_ratio(2, 3),
            Err(SpinRepError::InvalidSpin(_))
        ));
        assert!(Spin::from_ratio(1, 4).is_err());
        assert!(Spin::from_ratio(1, 0).is_err());
    }

    #[test]
    fn test_rejects_extreme_ratio() {
        assert!(matches!(
            Spin::from_ratio(i64::MIN, -1),
            Err(SpinRepError::InvalidSpin(_))
        ));
        assert!(matches!(
            Spin::from_ratio(1, i64::MIN),
            Err(SpinRepError::InvalidSpin(_))
        ));
        assert!(matches!(
            "1/-9223372036854775808".parse::<Spin>(),
            Err(SpinRepError::InvalidSpin(_))
        ));
        assert!(Spin::from_ratio(i64::MAX, 1).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("3/2".parse::<Spin>().unwrap(), Spin::from_twice(3));
        assert_eq!("2".parse::<Spin>().unwrap(), Spin::from_twice(4));
        assert_eq!("0.5".parse::<Spin>().unwrap(), Spin::from_twice(1));
        assert_eq!("1.50".parse::<Spin>().unwrap(), Spin::from_twice(3));
        assert_eq!(" 1.0 ".parse::<Spin>().unwrap(), Spin::from_twice(2));
        assert!("2/3".parse::<Spin>().is_err());
        assert!("-1".parse::<Spin>().is_err());
        assert!("-0.5".parse::<Spin>().is_err());
        assert!("0.25".parse::<Spin>().is_err());
        assert!("one".parse::<Spin>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for twice in 0..8 {
            let spin = Spin::from_twice(twice);
            assert_eq!(spin.to_string().parse::<Spin>().unwrap(), spin);
        }
        assert_eq!(Spin::from_twice(5).to_string(), "5/2");
        assert_eq!(Spin::from_twice(6).to_string(), "3");
    }

    #[test]
    fn test_magnetic_sequence() {
        let spin = Spin::from_twice(3);
        let ms: Vec<i64> = (0..spin.dimension()).map(|k| spin.twice_magnetic(k)).collect();
        assert_eq!(ms, vec![3, 1, -1, -3]);
    }
}
