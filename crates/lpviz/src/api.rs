//! Curated entry points for front ends.
//!
//! Prefer these over reaching into submodules; they take a `ConstraintSet`
//! as submitted by a request and use default tolerances.

pub use crate::contour::{build_contours, ContourCfg, ContourLine};
pub use crate::geom2::{
    enumerate_vertices, order_polygon, Constraint, ConstraintSet, LpCfg, Objective, Point,
};
pub use crate::scene::{build_scene, Scene, SceneCfg, Viewport};
pub use crate::simplex::{solve, SimplexTrace, Terminal};

/// Ordered feasible-region boundary (not closed).
pub fn feasible_polygon(set: &ConstraintSet) -> Vec<Point> {
    order_polygon(&enumerate_vertices(&set.constraints, LpCfg::default()))
}

/// Simplex trace for the set's objective; None without an objective.
pub fn trace(set: &ConstraintSet) -> Option<SimplexTrace> {
    set.objective
        .map(|obj| solve(&set.constraints, obj, set.maximize))
}

/// Scene with default configuration.
pub fn scene(set: &ConstraintSet) -> Scene {
    build_scene(set, SceneCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_of_box_with_cut() {
        let set = ConstraintSet::new(vec![
            Constraint::new(1.0, 0.0, 4.0),
            Constraint::new(0.0, 1.0, 4.0),
            Constraint::new(1.0, 1.0, 6.0),
            Constraint::new(-1.0, 0.0, 0.0),
            Constraint::new(0.0, -1.0, 0.0),
        ])
        .with_objective(Objective::new(1.0, 1.0), true);
        let poly = feasible_polygon(&set);
        assert_eq!(poly.len(), 5);
        assert!(crate::geom2::is_simple_polygon(&poly));
        let t = trace(&set).expect("objective present");
        let (_, v) = t.optimum().expect("bounded");
        assert!((v - 6.0).abs() < 1e-12);
    }

    #[test]
    fn trace_needs_objective() {
        let set = ConstraintSet::new(vec![Constraint::new(1.0, 1.0, 5.0)]);
        assert!(trace(&set).is_none());
        assert!(feasible_polygon(&set).is_empty());
        assert!(scene(&set).region.is_none());
    }
}
