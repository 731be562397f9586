//! Trace and configuration types for the tableau simplex.

use std::fmt;

use serde::Serialize;

use super::tableau::Tableau;
use crate::geom2::{Objective, Point};

/// How the pivot loop halted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Terminal {
    /// No objective-row entry improves; the last snapshot is optimal.
    Optimal,
    /// Column `entering` improves but no row limits it.
    Unbounded { entering: usize },
    /// Pivot cap hit (degenerate cycling or a numerically broken model).
    DidNotConverge { pivots: usize },
}

/// One recorded iterate: tableau, basis, and the (x, y) it encodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tableau: Tableau,
    pub basis: Vec<usize>,
    pub solution: Point,
}

/// Simplex configuration.
#[derive(Clone, Copy, Debug)]
pub struct SimplexCfg {
    /// Zero threshold for reduced costs, ratio-test entries, and pivots.
    pub eps: f64,
    /// Pivot budget. `None` uses the number of distinct bases, `C(m + 2, 2)`:
    /// a run that never revisits a basis cannot exceed it.
    pub max_pivots: Option<usize>,
}
impl Default for SimplexCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            max_pivots: None,
        }
    }
}
impl SimplexCfg {
    pub fn pivot_cap(&self, m: usize) -> usize {
        self.max_pivots
            .unwrap_or_else(|| (m + 2).saturating_mul(m + 1) / 2)
    }
}

/// Full solver history: the initial snapshot plus one per pivot.
#[derive(Clone, Debug)]
pub struct SimplexTrace {
    pub steps: Vec<Snapshot>,
    pub terminal: Terminal,
    pub objective: Objective,
    pub maximize: bool,
}

impl SimplexTrace {
    #[inline]
    pub fn pivots(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
    #[inline]
    pub fn last(&self) -> Option<&Snapshot> {
        self.steps.last()
    }
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.terminal == Terminal::Optimal
    }
    /// Optimal point and objective value; None unless the terminal state is `Optimal`.
    pub fn optimum(&self) -> Option<(Point, f64)> {
        if !self.is_optimal() {
            return None;
        }
        let sol = self.last()?.solution;
        Some((sol, self.objective.eval(sol)))
    }
    /// Sequence of (x, y) visited by the solver.
    pub fn path(&self) -> Vec<Point> {
        self.steps.iter().map(|s| s.solution).collect()
    }
}

/// Text panel: one block per step with the tableau rounded to 3 decimals.
impl fmt::Display for SimplexTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, st) in self.steps.iter().enumerate() {
            writeln!(f, "Step {k}")?;
            for row in st.tableau.to_rows() {
                let cells: Vec<String> = row.iter().map(|v| round3(*v).to_string()).collect();
                writeln!(f, "{}", cells.join("\t"))?;
            }
            let basis: Vec<String> = st.basis.iter().map(|b| b.to_string()).collect();
            writeln!(f, "Basic vars: {}", basis.join(", "))?;
            writeln!(
                f,
                "Solution (x,y): ({:.3},{:.3})",
                st.solution.x, st.solution.y
            )?;
        }
        match self.terminal {
            Terminal::Optimal => writeln!(f, "Optimal"),
            Terminal::Unbounded { entering } => {
                writeln!(f, "Unbounded (entering column {entering})")
            }
            Terminal::DidNotConverge { pivots } => {
                writeln!(f, "Did not converge after {pivots} pivots")
            }
        }
    }
}

#[inline]
fn round3(v: f64) -> f64 {
    // + 0.0 folds -0 into 0
    (v * 1000.0).round() / 1000.0 + 0.0
}
