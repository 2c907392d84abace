// ─────────────────────────────────────────────────────────────────────
// SpinRep — Generator Labels
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two non-diagonal SO(3) generators, solved column by column.
///
/// `J1` is built from raising + lowering, `J2` from raising − lowering.
/// `J3` is diagonal by choice of basis and never solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generator {
    J1,
    J2,
}

impl Generator {
    /// Both solved generators, in output order.
    pub const SOLVED: [Generator; 2] = [Generator::J1, Generator::J2];

    /// Position within the unknown partition (0 for `J1`, 1 for `J2`).
    pub fn index(self) -> usize {
        match self {
            Generator::J1 => 0,
            Generator::J2 => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Generator::J1 => "J1",
            Generator::J2 => "J2",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
