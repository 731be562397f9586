//! Feasible-region vertices from pairwise boundary intersections.
//!
//! Purpose
//! - Enumerate the corners of `{ a_k·x + b_k·y <= c_k  for all k }` by intersecting
//!   every pair of boundary lines and keeping the points that satisfy all constraints.
//!
//! Numerics
//! - Parallel pairs (`|det| < eps_det`) are skipped.
//! - Feasibility is checked against the full constraint set with slack `eps_feas`,
//!   since a point on two boundaries may still violate a third.
//! - Dedup uses squared distance `eps_dedup_sq`; the first accepted point wins.
//!
//! Cost is O(m³), fine for the handful of constraints a plot can show.
//!
//! References
//! - Code cross-refs: `types::{Constraint, Point, LpCfg}`, `polygon::order_polygon`

use nalgebra::Matrix2;

use super::types::{usable_constraints, Constraint, LpCfg, Point};

/// Intersection of the boundary lines `c1` and `c2` by Cramer's rule.
/// None for parallel or identical lines.
pub fn line_intersection(c1: Constraint, c2: Constraint, eps: f64) -> Option<Point> {
    let a = Matrix2::new(c1.a, c1.b, c2.a, c2.b);
    let det = a.determinant();
    if det.abs() < eps {
        return None;
    }
    let det_x = Matrix2::new(c1.c, c1.b, c2.c, c2.b).determinant();
    let det_y = Matrix2::new(c1.a, c1.c, c2.a, c2.c).determinant();
    Some(Point::new(det_x / det, det_y / det))
}

/// Membership check against every constraint with slack `eps`.
#[inline]
pub fn is_feasible(constraints: &[Constraint], p: Point, eps: f64) -> bool {
    constraints.iter().all(|c| c.satisfies_eps(p, eps))
}

/// Feasible vertex set (unordered, deduplicated). Empty when no two boundaries
/// meet inside the region; that covers both unbounded strips and infeasible systems.
pub fn enumerate_vertices(constraints: &[Constraint], cfg: LpCfg) -> Vec<Point> {
    let cs = usable_constraints(constraints, cfg.eps_det);
    let mut out: Vec<Point> = Vec::new();
    for i in 0..cs.len() {
        for j in (i + 1)..cs.len() {
            let Some(p) = line_intersection(cs[i], cs[j], cfg.eps_det) else {
                tracing::trace!(i, j, "parallel boundaries");
                continue;
            };
            if !is_feasible(&cs, p, cfg.eps_feas) {
                continue;
            }
            if out.iter().any(|q| q.approx_eq(p, cfg.eps_dedup_sq)) {
                continue;
            }
            out.push(p);
        }
    }
    tracing::debug!(constraints = cs.len(), vertices = out.len(), "enumerated vertices");
    out
}
