// ─────────────────────────────────────────────────────────────────────
// SpinRep — Column Solver
// ─────────────────────────────────────────────────────────────────────
//! Each column equation is diagonal in its unknowns with the same
//! coefficient on every row, so the solution is the closed form
//! `x_r = −rhs_r / prefactor`. The answer is substituted back before
//! it is returned.

use std::collections::BTreeMap;

use num_traits::Zero;

use spinrep_algebra::Algebraic;
use spinrep_types::{SpinRepError, SpinRepResult};

use crate::equation::ColumnEquation;
use crate::unknowns::Symbol;

/// Solved values for one column's unknowns.
pub type ColumnSolution = BTreeMap<Symbol, Algebraic>;

/// Solve one column equation exactly.
///
/// No solution means the equation was built wrong upstream; that is
/// reported as `UnsolvableColumn` and never recovered from.
pub fn solve_column(eq: &ColumnEquation) -> SpinRepResult<ColumnSolution> {
    let unsolvable = |reason: String| {
        log::error!(
            "column {} of {} has no solution: {reason}",
            eq.column(),
            eq.generator()
        );
        SpinRepError::UnsolvableColumn {
            generator: eq.generator(),
            column: eq.column(),
            reason,
        }
    };

    if eq.unknowns().len() != eq.rhs().len() {
        return Err(unsolvable(format!(
            "{} unknowns but {} equations",
            eq.unknowns().len(),
            eq.rhs().len()
        )));
    }

    let values = eq
        .rhs()
        .iter()
        .map(|b| (-b).checked_div(eq.prefactor()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| unsolvable(format!("prefactor {} is not invertible", eq.prefactor())))?;

    let residual = eq.residual(&values)?;
    if let Some(row) = residual.iter().position(|r| !r.is_zero()) {
        return Err(unsolvable(format!(
            "residual {} in row {row}",
            residual[row]
        )));
    }

    Ok(eq.unknowns().iter().copied().zip(values).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::Basis;
    use crate::unknowns::{partition_unknowns, SymbolPool, UnknownMatrix};
    use num_traits::One;
    use spinrep_types::{Generator, Spin};

    fn setup(twice: u32) -> (Basis, [UnknownMatrix; 2]) {
        let basis = Basis::new(Spin::from_twice(twice));
        let dim = basis.dimension();
        let mut symbols = SymbolPool::new().fresh(2 * dim * dim);
        (basis, partition_unknowns(dim, &mut symbols).unwrap())
    }

    #[test]
    fn test_spin_half_j1_column() {
        let (basis, [u1, _]) = setup(1);
        let eq = ColumnEquation::build(&u1, &basis, 0).unwrap();
        let sol = solve_column(&eq).unwrap();
        let col = u1.column(0).unwrap();
        assert!(sol[&col[0]].is_zero());
        assert_eq!(sol[&col[1]], Algebraic::from_ratio(1, 2));
    }

    #[test]
    fn test_spin_half_j2_columns() {
        let (basis, [_, u2]) = setup(1);
        let half_i = &Algebraic::i() * &Algebraic::from_ratio(1, 2);

        let sol0 = solve_column(&ColumnEquation::build(&u2, &basis, 0).unwrap()).unwrap();
        assert_eq!(sol0[&u2.symbols()[(1, 0)]], half_i);

        let sol1 = solve_column(&ColumnEquation::build(&u2, &basis, 1).unwrap()).unwrap();
        assert_eq!(sol1[&u2.symbols()[(0, 1)]], -half_i);
    }

    #[test]
    fn test_solution_covers_exactly_the_column() {
        let (basis, [u1, u2]) = setup(4);
        for u in [&u1, &u2] {
            for k in 0..basis.dimension() {
                let sol = solve_column(&ColumnEquation::build(u, &basis, k).unwrap()).unwrap();
                let keys: Vec<Symbol> = sol.keys().copied().collect();
                assert_eq!(keys, u.column(k).unwrap());
            }
        }
    }

    #[test]
    fn test_zero_prefactor_is_unsolvable() {
        let symbols: Vec<Symbol> = SymbolPool::new().fresh(2).into_iter().collect();
        let eq = ColumnEquation::from_parts(
            Generator::J2,
            1,
            Algebraic::zero(),
            symbols,
            vec![Algebraic::one(), Algebraic::zero()],
        );
        match solve_column(&eq) {
            Err(SpinRepError::UnsolvableColumn {
                generator, column, ..
            }) => {
                assert_eq!(generator, Generator::J2);
                assert_eq!(column, 1);
            }
            other => panic!("expected UnsolvableColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_is_unsolvable() {
        let symbols: Vec<Symbol> = SymbolPool::new().fresh(3).into_iter().collect();
        let eq = ColumnEquation::from_parts(
            Generator::J1,
            0,
            Algebraic::from_integer(2),
            symbols,
            vec![Algebraic::one(), Algebraic::zero()],
        );
        assert!(matches!(
            solve_column(&eq),
            Err(SpinRepError::UnsolvableColumn { .. })
        ));
    }
}
