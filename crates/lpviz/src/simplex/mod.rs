//! Tableau simplex over (x, y) plus one slack per constraint, with a full trace.
//!
//! Purpose
//! - Start from the all-slack basic solution at the origin and pivot until no
//!   objective-row entry improves (optimal), the entering column has no positive
//!   entry (unbounded), or the pivot cap is hit (did not converge).
//! - Record a snapshot before the first pivot and after every pivot, so callers
//!   can animate the path the solver takes.
//!
//! Conventions
//! - The objective row stores `sign·(objA, objB)` with `sign = −1` to maximize and
//!   `+1` to minimize. Either way the loop minimizes that row, so the entering
//!   column is always the most negative entry (leftmost on ties) and the leaving
//!   row is the minimum ratio (topmost on ties).
//! - Minimize results differ from earlier chart versions: their "most positive
//!   entry when minimizing" rule repeated the maximization pivots.
//! - x and y are implicitly non-negative, as in any standard-form tableau. Regions
//!   reaching into x < 0 or y < 0 are optimized over their first-quadrant part only;
//!   pass `x >= 0`, `y >= 0` explicitly to make the vertex set and the simplex agree.
//! - No anti-cycling rule; the pivot cap turns a cycle into `Terminal::DidNotConverge`.
//!
//! References
//! - Code cross-refs: `geom2::{Constraint, Objective, Point}`, `crate::contour`, `crate::scene`
//!
//! Layout: `tableau.rs` (matrix and row operations), `engine.rs` (pivot loop),
//! `types.rs` (trace, terminal state, config).

mod engine;
mod tableau;
mod types;

pub use engine::{solve, solve_with_cfg};
pub use tableau::{Tableau, N_STRUCT};
pub use types::{SimplexCfg, SimplexTrace, Snapshot, Terminal};
