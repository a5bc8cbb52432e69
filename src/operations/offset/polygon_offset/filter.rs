use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Point2, TOLERANCE};

/// Keeps only runs that stay clear of the original polygon.
///
/// Every interior vertex of a run must sit at least the offset distance from
/// the original. A bare two-point run has no interior vertex, so its midpoint
/// is held to half the offset distance instead.
#[must_use]
pub fn apply<'a>(runs: &'a [Vec<Point2>], original: &[Point2], distance: f64) -> Vec<&'a [Point2]> {
    let required = clearance(distance);
    let half = distance.abs() * 0.5;

    runs.iter()
        .filter(|r| match r.len() {
            0 | 1 => false,
            2 => min_dist_to_polygon(&nalgebra::center(&r[0], &r[1]), original) >= half,
            len => r[1..len - 1]
                .iter()
                .all(|p| min_dist_to_polygon(p, original) >= required),
        })
        .map(Vec::as_slice)
        .collect()
}

/// Distance an offset vertex must keep from the original, less rounding slack.
pub(super) fn clearance(distance: f64) -> f64 {
    distance.abs() * (1.0 - 1e-6) - TOLERANCE
}

/// Minimum distance from a point to the edges of a closed polygon.
pub(super) fn min_dist_to_polygon(p: &Point2, polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| point_to_segment_dist(p, &polygon[i], &polygon[(i + 1) % n]))
        .fold(f64::MAX, f64::min)
}
