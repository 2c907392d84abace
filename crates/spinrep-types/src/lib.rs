// ─────────────────────────────────────────────────────────────────────
// SpinRep — Core Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Spin quantum numbers, generator labels, configuration, and the
//! error hierarchy shared by every SpinRep crate.

pub mod config;
pub mod error;
pub mod generator;
pub mod spin;

pub use config::IrrepConfig;
pub use error::{SpinRepError, SpinRepResult};
pub use generator::Generator;
pub use spin::Spin;
