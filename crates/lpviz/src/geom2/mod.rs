//! 2D half-plane geometry for two-variable LPs.
//!
//! Purpose
//! - Hold the problem input (`ConstraintSet`) as plain fixed-field records.
//! - Enumerate feasible-region vertices and order them into a drawable boundary.
//! - Keep the API minimal and numerically explicit (eps-aware, see `LpCfg`).
//!
//! All functions are pure: inputs are borrowed, outputs freshly allocated.
//!
//! References
//! - Code cross-refs: `Constraint`, `Point`, `LpCfg`, `enumerate_vertices`, `order_polygon`

pub mod polygon;
pub mod rand;
mod types;
mod util;
pub mod vertices;

pub use polygon::{is_simple_polygon, order_polygon};
pub use types::{usable_constraints, Constraint, ConstraintSet, LpCfg, Objective, Point};
pub use util::sample_axis;
pub use vertices::{enumerate_vertices, is_feasible, line_intersection};
