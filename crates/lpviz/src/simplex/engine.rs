//! Pivot loop: all-slack start, Dantzig entering rule, minimum-ratio leaving rule.

use crate::geom2::{usable_constraints, Constraint, Objective};

use super::tableau::{Tableau, N_STRUCT};
use super::types::{SimplexCfg, SimplexTrace, Snapshot, Terminal};

/// Solve with default tolerances and pivot cap.
pub fn solve(constraints: &[Constraint], objective: Objective, maximize: bool) -> SimplexTrace {
    solve_with_cfg(constraints, objective, maximize, SimplexCfg::default())
}

/// Run the tableau simplex and record every iterate.
///
/// Degenerate or non-finite constraints are dropped first, so tableau row `i`
/// is the `i`-th usable constraint. The start basis is all slacks, i.e. `(0, 0)`;
/// when the origin is infeasible the run still proceeds on the raw tableau.
pub fn solve_with_cfg(
    constraints: &[Constraint],
    objective: Objective,
    maximize: bool,
    cfg: SimplexCfg,
) -> SimplexTrace {
    let cs = usable_constraints(constraints, cfg.eps);
    let m = cs.len();
    let cap = cfg.pivot_cap(m);
    let mut tableau = Tableau::initial(&cs, objective, maximize);
    let mut basis: Vec<usize> = (N_STRUCT..N_STRUCT + m).collect();
    let mut steps = vec![snapshot(&tableau, &basis)];

    let terminal = loop {
        let Some(enter) = tableau.entering(cfg.eps) else {
            break Terminal::Optimal;
        };
        let Some(leave) = tableau.leaving(enter, cfg.eps) else {
            break Terminal::Unbounded { entering: enter };
        };
        if steps.len() > cap {
            break Terminal::DidNotConverge { pivots: cap };
        }
        if !tableau.pivot(leave, enter, cfg.eps) {
            // leaving() only returns entries > eps
            break Terminal::DidNotConverge {
                pivots: steps.len() - 1,
            };
        }
        basis[leave] = enter;
        let snap = snapshot(&tableau, &basis);
        tracing::debug!(
            step = steps.len(),
            enter,
            leave,
            x = snap.solution.x,
            y = snap.solution.y,
            "pivot"
        );
        steps.push(snap);
    };
    tracing::debug!(?terminal, pivots = steps.len() - 1, "simplex finished");
    SimplexTrace {
        steps,
        terminal,
        objective,
        maximize,
    }
}

fn snapshot(tableau: &Tableau, basis: &[usize]) -> Snapshot {
    Snapshot {
        tableau: tableau.clone(),
        basis: basis.to_vec(),
        solution: tableau.solution(basis),
    }
}
