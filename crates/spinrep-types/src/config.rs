// ─────────────────────────────────────────────────────────────────────
// SpinRep — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SpinRepError, SpinRepResult};

/// Runtime configuration for generator construction.
///
/// None of these fields change the mathematical result for a valid `j`;
/// they tune the exactness simplifier and how the column solves run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrepConfig {
    /// Absolute tolerance when matching a float to `(p/q)·sqrt(r)`.
    /// Default: 1e-10.
    pub simplify_tolerance: f64,

    /// Largest square-free radicand the simplifier tries.
    /// Default: 64.
    pub max_radicand: u64,

    /// Largest denominator the simplifier accepts.
    /// Default: 1024.
    pub max_denominator: u64,

    /// Solve the `D` columns of each generator on the rayon pool.
    /// Default: false.
    pub parallel_columns: bool,

    /// Check commutation, Hermiticity, and Casimir before returning.
    /// Default: true.
    pub verify_invariants: bool,
}

impl Default for IrrepConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: 1e-10,
            max_radicand: 64,
            max_denominator: 1024,
            parallel_columns: false,
            verify_invariants: true,
        }
    }
}

impl IrrepConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> SpinRepResult<()> {
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance <= 0.0 {
            return Err(SpinRepError::Config(format!(
                "simplify_tolerance must be finite and > 0, got {}",
                self.simplify_tolerance
            )));
        }
        if self.simplify_tolerance >= 0.5 {
            return Err(SpinRepError::Config(format!(
                "simplify_tolerance must be < 0.5, got {}",
                self.simplify_tolerance
            )));
        }
        if self.max_radicand < 1 {
            return Err(SpinRepError::Config(format!(
                "max_radicand must be >= 1, got {}",
                self.max_radicand
            )));
        }
        if self.max_denominator < 1 {
            return Err(SpinRepError::Config(format!(
                "max_denominator must be >= 1, got {}",
                self.max_denominator
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SpinRepResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpinRepError::Config(format!("JSON parse error: {e}")))
    }

    pub fn to_json(&self) -> SpinRepResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SpinRepError::Config(format!("JSON encode error: {e}")))
    }
}
