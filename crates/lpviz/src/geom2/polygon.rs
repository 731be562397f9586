//! Boundary ordering for a convex vertex set.
//!
//! `order_polygon` sorts by angle around the centroid, which traces a simple
//! boundary whenever the input is the full set of extreme points of a convex
//! region (always the case for feasible regions of linear constraints).
//! The orderer does not close the loop; `crate::scene` repeats the first point.

use std::cmp::Ordering;

use super::types::Point;
use super::util::{angle_from, centroid, cross};

/// Vertices sorted by `atan2(y − cy, x − cx)` ascending (stable on ties).
/// Inputs with fewer than two points come back unchanged.
pub fn order_polygon(vertices: &[Point]) -> Vec<Point> {
    let mut pts = vertices.to_vec();
    if pts.len() < 2 {
        return pts;
    }
    let c = centroid(&pts);
    pts.sort_by(|p, q| {
        angle_from(c, *p)
            .partial_cmp(&angle_from(c, *q))
            .unwrap_or(Ordering::Equal)
    });
    pts
}

/// True if the closed boundary `pts[0] → … → pts[n-1] → pts[0]` has no two
/// non-adjacent edges that touch. Fewer than three points never form a polygon.
pub fn is_simple_polygon(pts: &[Point]) -> bool {
    let n = pts.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let (p1, p2) = (pts[i], pts[(i + 1) % n]);
        for j in (i + 1)..n {
            // skip the edge itself and its neighbours
            if j == i || (j + 1) % n == i || j == (i + 1) % n {
                continue;
            }
            let (q1, q2) = (pts[j], pts[(j + 1) % n]);
            if segments_intersect(p1, p2, q1, q2) {
                return false;
            }
        }
    }
    true
}

fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // collinear touching cases
    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
