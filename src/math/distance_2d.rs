use super::{Point2, TOLERANCE};

/// Projection parameter of `p` onto the segment `a → b`, clamped to `[0, 1]`.
///
/// A zero-length segment projects everything onto its start (`t = 0`).
#[must_use]
pub fn segment_param(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return 0.0;
    }

    ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

/// Returns the point on the segment `a → b` closest to `p`, with its parameter.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> (Point2, f64) {
    let t = segment_param(p, a, b);
    (a + (b - a) * t, t)
}

/// Returns the minimum distance from `p` to the line segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let (closest, _) = closest_point_on_segment(p, a, b);
    nalgebra::distance(p, &closest)
}

/// Tests whether `p` lies on the segment `a → b` within `tolerance`.
///
/// The point must be within `tolerance` of the line and project between the
/// two endpoints (inclusive, with the same tolerance at either end).
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, tolerance: f64) -> bool {
    let d = b - a;
    let len = d.norm();
    let tol = tolerance.max(TOLERANCE);

    if len < TOLERANCE {
        return nalgebra::distance(p, a) <= tol;
    }

    let along = (p - a).dot(&d) / len;
    if along < -tol || along > len + tol {
        return false;
    }
    point_to_segment_dist(p, a, b) <= tol
}
