//! Two-variable linear programs: feasible region, simplex trace, and plot geometry.
//!
//! Pipeline
//! - `geom2`: problem input, feasible vertices, boundary ordering.
//! - `simplex`: tableau simplex recording every iterate.
//! - `contour`: iso-objective lines around the optimum.
//! - `scene`: everything above as serializable series for a chart.
//!
//! API Policy
//! - Every entry point is a pure function of its (borrowed) input and returns
//!   freshly allocated output; concurrent calls need no locking.

pub mod api;
pub mod contour;
pub mod geom2;
pub mod scene;
pub mod simplex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Constraint, ConstraintSet, LpCfg, Objective, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::{build_contours, ContourCfg, ContourLine};
    pub use crate::geom2::rand::{draw_bounded_problem, ConstraintCount, RadialCfg, ReplayToken};
    pub use crate::geom2::{
        enumerate_vertices, is_simple_polygon, order_polygon, Constraint, ConstraintSet, LpCfg,
        Objective, Point,
    };
    pub use crate::scene::{build_scene, Scene, SceneCfg};
    pub use crate::simplex::{solve, solve_with_cfg, SimplexCfg, SimplexTrace, Terminal};
}
