// ─────────────────────────────────────────────────────────────────────
// SpinRep — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

use crate::generator::Generator;

/// Root error type for all SpinRep failures.
///
/// `InvalidSpin` and `Config` are caller mistakes. Every other variant
/// signals an internal construction defect and aborts the whole call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpinRepError {
    /// `j` is negative or not an integer/half-integer.
    #[error("invalid spin: {0}")]
    InvalidSpin(String),

    /// Fewer fresh unknowns were supplied than the two generators need.
    #[error("insufficient unknown symbols: need {required}, got {available}")]
    InsufficientSymbols { required: usize, available: usize },

    /// Column index past the end of the basis.
    #[error("column {column} out of range for dimension {dimension}")]
    ColumnOutOfRange { column: usize, dimension: usize },

    /// A column equation had no exact solution.
    #[error("unsolvable column equation for {generator}, column {column}: {reason}")]
    UnsolvableColumn {
        generator: Generator,
        column: usize,
        reason: String,
    },

    /// Column solutions do not tile the unknown matrix.
    #[error("malformed column solutions: {0}")]
    MalformedSolution(String),

    /// An entry survived simplification as a floating-point value.
    #[error("inexact entry in {generator} at ({row}, {col}): {value}")]
    InexactEntry {
        generator: Generator,
        row: usize,
        col: usize,
        value: String,
    },

    /// Commutation, Hermiticity, or Casimir check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Operand sizes disagree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Result could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type SpinRepResult<T> = Result<T, SpinRepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsolvable_column_message() {
        let err = SpinRepError::UnsolvableColumn {
            generator: Generator::J2,
            column: 3,
            reason: "zero prefactor".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsolvable column equation for J2, column 3: zero prefactor"
        );
    }

    #[test]
    fn test_insufficient_symbols_message() {
        let err = SpinRepError::InsufficientSymbols {
            required: 8,
            available: 5,
        };
        assert!(err.to_string().contains("need 8, got 5"));
    }
}
