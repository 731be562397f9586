//! Basic 2D types and tolerances for half-plane LPs.
//!
//! - `LpCfg`: centralizes epsilons for determinant, feasibility, and dedup checks.
//! - `Constraint`: closed half-plane `a·x + b·y <= c` with helper predicates.
//! - `Point`, `Objective`, `ConstraintSet`: fixed-field records for the problem input.
//!
//! References
//! - Code cross-refs: `vertices::enumerate_vertices`, `polygon::order_polygon`, `crate::simplex`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct LpCfg {
    /// Parallel-line threshold on `|det|` and degenerate-coefficient threshold.
    pub eps_det: f64,
    /// Slack allowed when testing `a·x + b·y <= c`.
    pub eps_feas: f64,
    /// Squared-distance threshold for treating two vertices as the same point.
    pub eps_dedup_sq: f64,
}

impl Default for LpCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-9,
            eps_feas: 1e-9,
            eps_dedup_sq: 1e-12,
        }
    }
}

/// Closed half-plane `a·x + b·y <= c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }
    /// Left-hand side `a·x + b·y` at `p`.
    #[inline]
    pub fn lhs(&self, p: Point) -> f64 {
        self.normal().dot(&p.to_vec2())
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Point, eps: f64) -> bool {
        self.lhs(p) <= self.c + eps
    }
    /// Both coefficients ~0: the boundary is not a line.
    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.a.abs() <= eps && self.b.abs() <= eps
    }
    /// Finite and non-degenerate; everything else is ignored by the algorithms.
    #[inline]
    pub fn is_usable(&self, eps: f64) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && !self.is_degenerate(eps)
    }
    /// Display label used by charting, e.g. `1x+-2y≤5`.
    pub fn label(&self) -> String {
        format!("{}x+{}y≤{}", self.a, self.b, self.c)
    }
}

/// Point in the (x, y) decision plane. Compare with `approx_eq`, never `==`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn dist_sq(self, other: Point) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm_squared()
    }
    #[inline]
    pub fn approx_eq(self, other: Point, eps_sq: f64) -> bool {
        self.dist_sq(other) < eps_sq
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Linear objective `a·x + b·y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub a: f64,
    pub b: f64,
}

impl Objective {
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y
    }
}

/// Problem input as submitted by the caller. Read-only to every algorithm.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub objective: Option<Objective>,
    #[serde(default = "default_maximize")]
    pub maximize: bool,
}

fn default_maximize() -> bool {
    true
}

impl ConstraintSet {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self {
            constraints,
            objective: None,
            maximize: true,
        }
    }
    pub fn with_objective(mut self, objective: Objective, maximize: bool) -> Self {
        self.objective = Some(objective);
        self.maximize = maximize;
        self
    }
    /// Default problem of the interactive page: `x+y≤5`, `−x+2y≤5`, `x≥0`, `y≥0`, max `x+y`.
    pub fn demo() -> Self {
        Self::new(vec![
            Constraint::new(1.0, 1.0, 5.0),
            Constraint::new(-1.0, 2.0, 5.0),
            Constraint::new(-1.0, 0.0, 0.0),
            Constraint::new(0.0, -1.0, 0.0),
        ])
        .with_objective(Objective::new(1.0, 1.0), true)
    }
}

/// Drop constraints that are degenerate or non-finite, in input order.
pub fn usable_constraints(constraints: &[Constraint], eps: f64) -> Vec<Constraint> {
    constraints
        .iter()
        .enumerate()
        .filter_map(|(i, c)| {
            if c.is_usable(eps) {
                Some(*c)
            } else {
                tracing::warn!(index = i, a = c.a, b = c.b, c = c.c, "ignoring unusable constraint");
                None
            }
        })
        .collect()
}
