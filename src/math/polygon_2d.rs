use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the enclosed area of a closed polygon, regardless of winding.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` for fewer than 3 vertices.
pub fn polygon_area(points: &[Point2]) -> Result<f64> {
    if points.len() < 3 {
        return Err(GeometryError::TooFewVertices {
            required: 3,
            found: points.len(),
        }
        .into());
    }
    Ok(signed_area(points).abs())
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the axis-aligned extents `(min, max)` of a point set.
#[must_use]
pub fn extents(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Drops consecutive duplicate vertices, including a repeated closing vertex.
#[must_use]
pub fn dedup_closed(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points {
        if out
            .last()
            .is_some_and(|last| nalgebra::distance(last, pt) < TOLERANCE)
        {
            continue;
        }
        out.push(*pt);
    }
    while out.len() > 1
        && nalgebra::distance(&out[0], &out[out.len() - 1]) < TOLERANCE
    {
        out.pop();
    }
    out
}
