use nalgebra::Vector2;

use super::types::Point;

/// Angle of `p` seen from `center`, in (-π, π].
#[inline]
pub(crate) fn angle_from(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.to_vec2() - a.to_vec2();
    let ac = c.to_vec2() - a.to_vec2();
    ab.x * ac.y - ab.y * ac.x
}

/// Arithmetic mean of the points (origin for an empty slice).
pub(crate) fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let sum = points
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.to_vec2());
    Point::from(sum / points.len() as f64)
}

/// Evenly spaced samples `lo, lo + step, …` up to and including `hi` (when hit).
///
/// Computed as `lo + k·step` rather than by repeated addition.
pub fn sample_axis(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(hi >= lo) {
        return vec![lo];
    }
    let n = ((hi - lo) / step + 1e-9).floor() as usize;
    (0..=n).map(|k| lo + step * k as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_axis_matches_plot_grid() {
        let xs = sample_axis(-10.0, 10.0, 0.5);
        assert_eq!(xs.len(), 41);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[20], 0.0);
        assert_eq!(xs[40], 10.0);
        assert_eq!(sample_axis(1.0, 0.0, 0.5), vec![1.0]);
    }

    #[test]
    fn centroid_and_cross() {
        let pts = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 3.0)];
        let c = centroid(&pts);
        assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
        assert!(cross(pts[0], pts[1], pts[2]) > 0.0);
        assert!(cross(pts[0], pts[2], pts[1]) < 0.0);
    }
}
