//! Random bounded two-variable LPs (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of problems the tableau simplex can
//!   solve exactly: the random half-planes contain the origin strictly and bound
//!   the region, and the explicit bounds `x >= 0`, `y >= 0` are appended last.
//!   The simplex assumes non-negative x and y, so without those two rows it would
//!   optimize over a smaller region than `enumerate_vertices` sees.
//!
//! Model
//! - Start from `k` equally spaced normal directions on [0, 2π), add bounded angular
//!   jitter, and place each boundary at distance `base_radius * (1 + u)` from the
//!   origin. With `k >= 4` and jitter below half a spacing, consecutive normals are
//!   less than π apart, which keeps the region bounded.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! References
//! - Code cross-refs: `ConstraintSet`, `enumerate_vertices`, `crate::simplex::solve`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Constraint, ConstraintSet, Objective};

/// Constraint count distribution.
#[derive(Clone, Copy, Debug)]
pub enum ConstraintCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl ConstraintCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ConstraintCount::Fixed(n) => n.max(4),
            ConstraintCount::Uniform { min, max } => {
                let lo = min.max(4);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub constraint_count: ConstraintCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/k. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Offsets = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base distance from the origin to each boundary line.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            constraint_count: ConstraintCount::Uniform { min: 4, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 4.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a bounded problem in the first quadrant with the origin as a vertex,
/// a random objective direction, and a random optimization sense.
///
/// The last two constraints are always `x >= 0` and `y >= 0`.
pub fn draw_bounded_problem(cfg: RadialCfg, tok: ReplayToken) -> ConstraintSet {
    let mut rng = tok.to_std_rng();
    let k = cfg.constraint_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = 2.0 * std::f64::consts::PI / (k as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut constraints: Vec<Constraint> = (0..k)
        .map(|i| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (i as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            Constraint::new(th.cos(), th.sin(), r0 * (1.0 + u))
        })
        .collect();
    constraints.push(Constraint::new(-1.0, 0.0, 0.0));
    constraints.push(Constraint::new(0.0, -1.0, 0.0));
    let phi = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let maximize = rng.gen_bool(0.5);
    ConstraintSet::new(constraints).with_objective(Objective::new(phi.cos(), phi.sin()), maximize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            constraint_count: ConstraintCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_bounded_problem(cfg, tok);
        let p2 = draw_bounded_problem(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.constraints.len(), 12);
        let p3 = draw_bounded_problem(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn first_quadrant_with_origin_feasible() {
        for index in 0..32 {
            let p = draw_bounded_problem(RadialCfg::default(), ReplayToken { seed: 3, index });
            let (radial, bounds) = p.constraints.split_at(p.constraints.len() - 2);
            assert!(radial.len() >= 4);
            assert!(radial.iter().all(|c| c.c > 0.0));
            assert_eq!(bounds, &[Constraint::new(-1.0, 0.0, 0.0), Constraint::new(0.0, -1.0, 0.0)]);
            assert!(p.objective.is_some());
        }
    }
}
