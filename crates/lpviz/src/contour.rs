//! Iso-objective lines drawn around the optimum.
//!
//! Levels are evenly spaced between the smallest and largest objective value
//! attained at the feasible vertices. Each level becomes either a sampled line
//! `y = (v − a·x)/b` on the plot grid or, when `b ≈ 0`, the vertical segment
//! `x = v/a`. The optimal level is skipped in the generic pass and appended
//! last as the highlighted line.

use serde::Serialize;

use crate::geom2::{sample_axis, Objective, Point};

/// Contour configuration. The x-grid matches the constraint-line sampling.
#[derive(Clone, Copy, Debug)]
pub struct ContourCfg {
    /// Number of intervals between `vmin` and `vmax`.
    pub levels: usize,
    pub x_lo: f64,
    pub x_hi: f64,
    pub step: f64,
    /// Threshold below which an objective coefficient counts as zero.
    pub eps: f64,
    /// Levels this close to the optimum are left to the highlighted line.
    pub eps_level: f64,
}
impl Default for ContourCfg {
    fn default() -> Self {
        Self {
            levels: 5,
            x_lo: -10.0,
            x_hi: 10.0,
            step: 0.5,
            eps: 1e-9,
            eps_level: 1e-6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContourLine {
    pub level: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub highlighted: bool,
}

/// Levels `vmin + k·step` up to `vmax`; a single level when all values agree.
pub fn contour_levels(values: &[f64], cfg: ContourCfg) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let intervals = cfg.levels.max(1);
    let span = vmax - vmin;
    if span == 0.0 {
        return vec![vmin];
    }
    (0..=intervals)
        .map(|k| vmin + span * k as f64 / intervals as f64)
        .collect()
}

/// Line `objective(x, y) = level` clipped to the plot grid, if the objective is not ~0.
pub fn level_line(level: f64, objective: Objective, cfg: ContourCfg) -> Option<(Vec<f64>, Vec<f64>)> {
    if objective.b.abs() > cfg.eps {
        let x = sample_axis(cfg.x_lo, cfg.x_hi, cfg.step);
        let y = x
            .iter()
            .map(|xi| (level - objective.a * xi) / objective.b)
            .collect();
        Some((x, y))
    } else if objective.a.abs() > cfg.eps {
        let xv = level / objective.a;
        Some((vec![xv, xv], vec![cfg.x_lo, cfg.x_hi]))
    } else {
        None
    }
}

/// Generic contour family plus the highlighted optimal line (last).
/// No vertices means no range to spread levels over, so nothing is drawn.
pub fn build_contours(
    optimal: f64,
    objective: Objective,
    vertices: &[Point],
    cfg: ContourCfg,
) -> Vec<ContourLine> {
    let values: Vec<f64> = vertices.iter().map(|p| objective.eval(*p)).collect();
    if values.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<ContourLine> = contour_levels(&values, cfg)
        .into_iter()
        .filter(|v| (v - optimal).abs() >= cfg.eps_level)
        .filter_map(|v| {
            level_line(v, objective, cfg).map(|(x, y)| ContourLine {
                level: v,
                x,
                y,
                highlighted: false,
            })
        })
        .collect();
    if let Some((x, y)) = level_line(optimal, objective, cfg) {
        out.push(ContourLine {
            level: optimal,
            x,
            y,
            highlighted: true,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_vertices() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0 / 3.0, 10.0 / 3.0),
            Point::new(0.0, 2.5),
        ]
    }

    #[test]
    fn levels_span_vertex_values() {
        let lv = contour_levels(&[0.0, 5.0, 2.5], ContourCfg::default());
        assert_eq!(lv, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(contour_levels(&[2.0, 2.0], ContourCfg::default()), vec![2.0]);
        assert!(contour_levels(&[], ContourCfg::default()).is_empty());
    }

    #[test]
    fn optimal_level_drawn_once_highlighted() {
        let lines = build_contours(
            5.0,
            Objective::new(1.0, 1.0),
            &demo_vertices(),
            ContourCfg::default(),
        );
        assert_eq!(lines.len(), 6);
        assert!(lines[..5].iter().all(|l| !l.highlighted));
        let last = lines.last().unwrap();
        assert!(last.highlighted);
        assert_eq!(last.level, 5.0);
        assert_eq!(last.x.len(), 41);
        // y = 5 - x
        assert_eq!(last.x[0], -10.0);
        assert_eq!(last.y[0], 15.0);
        assert_eq!(last.y[40], -5.0);
        let levels: Vec<f64> = lines.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn vertical_lines_when_b_is_zero() {
        let lines = build_contours(
            5.0,
            Objective::new(2.0, 0.0),
            &demo_vertices(),
            ContourCfg::default(),
        );
        // values 0, 10, 10/3, 0 -> levels 0, 2, …, 10, none at the optimum 5
        assert_eq!(lines.len(), 7);
        let hl = lines.last().unwrap();
        assert_eq!(hl.x, vec![2.5, 2.5]);
        assert_eq!(hl.y, vec![-10.0, 10.0]);
    }

    #[test]
    fn zero_objective_draws_nothing() {
        let lines = build_contours(
            0.0,
            Objective::new(0.0, 0.0),
            &demo_vertices(),
            ContourCfg::default(),
        );
        assert!(lines.is_empty());
        assert!(build_contours(1.0, Objective::new(1.0, 1.0), &[], ContourCfg::default()).is_empty());
    }
}
