// ─────────────────────────────────────────────────────────────────────
// SpinRep — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the SpinRep generator pipeline, for
//! notebook use.
//!
//! Exposes `compute_irrep`, `Irrep`, and `IrrepConfig` via PyO3.
//!
//! # FFI Contract
//!
//! - Invalid `j` or config → `ValueError`; internal failures →
//!   `RuntimeError`. Nothing partial is ever returned.
//! - The GIL is released for the duration of the construction.
//! - Exact entries cross the boundary as strings (`"sqrt(2)/2"`),
//!   numeric views as `(re, im)` tuples.
//!
//! Install: `pip install -e crates/spinrep-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from spinrep import compute_irrep
//!
//! irrep = compute_irrep("3/2")
//! print(irrep.j1)         # exact entries
//! print(irrep.numeric())  # [[[(re, im), ...], ...], ...]
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use spinrep_algebra::{Algebraic, Matrix};
use spinrep_core::{Irrep, IrrepBuilder};
use spinrep_types::{IrrepConfig, Spin, SpinRepError};

fn to_py_err(e: SpinRepError) -> PyErr {
    match e {
        SpinRepError::InvalidSpin(_) | SpinRepError::Config(_) => {
            PyValueError::new_err(e.to_string())
        }
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

fn exact_rows(m: &Matrix<Algebraic>) -> Vec<Vec<String>> {
    m.rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

fn numeric_rows(m: &Matrix<Algebraic>) -> Vec<Vec<(f64, f64)>> {
    m.to_complex()
        .rows()
        .map(|row| row.iter().map(|z| (z.re, z.im)).collect())
        .collect()
}

// ─── PyIrrepConfig ──────────────────────────────────────────────────

/// Python-visible construction settings.
#[pyclass(name = "IrrepConfig")]
#[derive(Clone)]
struct PyIrrepConfig {
    inner: IrrepConfig,
}

#[pymethods]
impl PyIrrepConfig {
    #[new]
    #[pyo3(signature = (
        simplify_tolerance = 1e-10,
        max_radicand = 64,
        max_denominator = 1024,
        parallel_columns = false,
        verify_invariants = true,
    ))]
    fn new(
        simplify_tolerance: f64,
        max_radicand: u64,
        max_denominator: u64,
        parallel_columns: bool,
        verify_invariants: bool,
    ) -> PyResult<Self> {
        let config = IrrepConfig {
            simplify_tolerance,
            max_radicand,
            max_denominator,
            parallel_columns,
            verify_invariants,
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = IrrepConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    #[getter]
    fn parallel_columns(&self) -> bool {
        self.inner.parallel_columns
    }

    #[getter]
    fn verify_invariants(&self) -> bool {
        self.inner.verify_invariants
    }

    fn __repr__(&self) -> String {
        format!(
            "IrrepConfig(tolerance={:e}, max_radicand={}, max_denominator={}, parallel={}, verify={})",
            self.inner.simplify_tolerance,
            self.inner.max_radicand,
            self.inner.max_denominator,
            self.inner.parallel_columns,
            self.inner.verify_invariants
        )
    }
}

// ─── PyIrrep ────────────────────────────────────────────────────────

/// Python-visible generator triple.
#[pyclass(name = "Irrep")]
struct PyIrrep {
    inner: Irrep,
}

#[pymethods]
impl PyIrrep {
    /// `j` as `"3/2"` or `"2"`.
    #[getter]
    fn spin(&self) -> String {
        self.inner.spin.to_string()
    }

    #[getter]
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    #[getter]
    fn j1(&self) -> Vec<Vec<String>> {
        exact_rows(&self.inner.j1)
    }

    #[getter]
    fn j2(&self) -> Vec<Vec<String>> {
        exact_rows(&self.inner.j2)
    }

    #[getter]
    fn j3(&self) -> Vec<Vec<String>> {
        exact_rows(&self.inner.j3)
    }

    /// `[J1, J2, J3]` as floating-point `(re, im)` tuples.
    fn numeric(&self) -> Vec<Vec<Vec<(f64, f64)>>> {
        self.inner.generators().into_iter().map(numeric_rows).collect()
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("spin", self.spin())?;
        dict.set_item("dimension", self.dimension())?;
        dict.set_item("j1", self.j1())?;
        dict.set_item("j2", self.j2())?;
        dict.set_item("j3", self.j3())?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Irrep(j={}, D={}, J1={}, J2={}, J3={})",
            self.inner.spin,
            self.inner.dimension(),
            self.inner.j1,
            self.inner.j2,
            self.inner.j3
        )
    }
}

// ─── Functions ──────────────────────────────────────────────────────

/// Exact SO(3) generators for spin `j` (e.g. `"1/2"`, `"2"`, `"1.5"`).
#[pyfunction]
#[pyo3(signature = (j, config = None))]
fn compute_irrep(py: Python<'_>, j: &str, config: Option<PyIrrepConfig>) -> PyResult<PyIrrep> {
    let spin: Spin = j.parse().map_err(to_py_err)?;
    let config = config.map(|c| c.inner).unwrap_or_default();
    let builder = IrrepBuilder::new(config).map_err(to_py_err)?;
    let inner = py
        .allow_threads(|| builder.build(spin))
        .map_err(to_py_err)?;
    Ok(PyIrrep { inner })
}

// ─── Module Registration ────────────────────────────────────────────

/// SpinRep — exact SO(3) generator matrices for any spin.
///
/// - `compute_irrep(j, config=None)` — build `J1, J2, J3`
/// - `Irrep` — the result, exact and numeric views
/// - `IrrepConfig` — construction settings
#[pymodule]
fn spinrep(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIrrepConfig>()?;
    m.add_class::<PyIrrep>()?;
    m.add_function(wrap_pyfunction!(compute_irrep, m)?)?;
    Ok(())
}
