//! Renderable output for a charting front end.
//!
//! `build_scene` runs the whole pipeline for one problem and returns plain
//! numeric series: closed region outline, constraint boundary samples, the
//! simplex trace and path, the optimal value, contour lines, and a fixed viewport.
//! Nothing here is stateful; one call per request.

use serde::Serialize;

use crate::contour::{build_contours, ContourCfg, ContourLine};
use crate::geom2::{
    enumerate_vertices, order_polygon, sample_axis, usable_constraints, Constraint,
    ConstraintSet, LpCfg, Point,
};
use crate::simplex::{solve_with_cfg, SimplexCfg, SimplexTrace, Terminal};

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneCfg {
    pub geom: LpCfg,
    pub simplex: SimplexCfg,
    pub contour: ContourCfg,
    pub viewport: Viewport,
}

/// Fixed axis ranges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub x: [f64; 2],
    pub y: [f64; 2],
}
impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: [-1.0, 10.0],
            y: [-1.0, 10.0],
        }
    }
}

/// Parallel coordinate sequences.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
impl Series {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
        }
    }
    /// Same as `from_points` with the first point repeated at the end.
    pub fn closed(points: &[Point]) -> Self {
        let mut s = Self::from_points(points);
        if let Some(first) = points.first() {
            s.x.push(first.x);
            s.y.push(first.y);
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstraintLine {
    pub label: String,
    #[serde(flatten)]
    pub series: Series,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceStep {
    pub tableau: Vec<Vec<f64>>,
    pub basis: Vec<usize>,
    pub solution: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceView {
    pub steps: Vec<TraceStep>,
    pub terminal: Terminal,
    pub path: Series,
}
impl From<&SimplexTrace> for TraceView {
    fn from(trace: &SimplexTrace) -> Self {
        Self {
            steps: trace
                .steps
                .iter()
                .map(|s| TraceStep {
                    tableau: s.tableau.to_rows(),
                    basis: s.basis.clone(),
                    solution: s.solution,
                })
                .collect(),
            terminal: trace.terminal,
            path: Series::from_points(&trace.path()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// Feasible region outline, closed. None when no vertices were found.
    pub region: Option<Series>,
    pub vertices: Vec<Point>,
    pub constraint_lines: Vec<ConstraintLine>,
    pub trace: Option<TraceView>,
    /// Only set when the solver ended in `Terminal::Optimal`.
    pub optimal_value: Option<f64>,
    pub contours: Vec<ContourLine>,
    pub viewport: Viewport,
}

/// Boundary samples for one constraint on the shared x-grid; a vertical segment when `b ≈ 0`.
pub fn constraint_line(c: Constraint, cfg: &ContourCfg) -> ConstraintLine {
    let series = if c.b.abs() > cfg.eps {
        let x = sample_axis(cfg.x_lo, cfg.x_hi, cfg.step);
        let y = x.iter().map(|xi| (c.c - c.a * xi) / c.b).collect();
        Series { x, y }
    } else {
        let xv = c.c / c.a;
        Series {
            x: vec![xv, xv],
            y: vec![cfg.x_lo, cfg.x_hi],
        }
    };
    ConstraintLine {
        label: c.label(),
        series,
    }
}

/// Full pipeline for one problem.
pub fn build_scene(set: &ConstraintSet, cfg: SceneCfg) -> Scene {
    let cs = usable_constraints(&set.constraints, cfg.geom.eps_det);
    let vertices = order_polygon(&enumerate_vertices(&cs, cfg.geom));
    let region = (!vertices.is_empty()).then(|| Series::closed(&vertices));
    let constraint_lines = cs.iter().map(|c| constraint_line(*c, &cfg.contour)).collect();

    let trace = match set.objective {
        Some(obj) if !cs.is_empty() => Some(solve_with_cfg(&cs, obj, set.maximize, cfg.simplex)),
        _ => None,
    };
    let optimal_value = trace.as_ref().and_then(|t| t.optimum()).map(|(_, v)| v);
    let contours = match (set.objective, optimal_value) {
        (Some(obj), Some(v)) => build_contours(v, obj, &vertices, cfg.contour),
        _ => Vec::new(),
    };
    if let Some(t) = &trace {
        tracing::info!(
            vertices = vertices.len(),
            pivots = t.pivots(),
            terminal = ?t.terminal,
            optimal_value = ?optimal_value,
            "scene built"
        );
    }
    Scene {
        region,
        vertices,
        constraint_lines,
        trace: trace.as_ref().map(TraceView::from),
        optimal_value,
        contours,
        viewport: cfg.viewport,
    }
}
