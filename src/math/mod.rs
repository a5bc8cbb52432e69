pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};

/// 2D point type on the horizontal working plane.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type; `z` carries the elevation.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Euclidean distance between two points on the working plane.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance between two points that the caller needs to be non-zero.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the points coincide.
pub fn nonzero_distance(a: &Point2, b: &Point2) -> Result<f64> {
    let d = distance(a, b);
    if d < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero length between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d)
}

/// Folds an angle in radians into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Angle of a vector in `[0, 2π)`, zero along +X, counter-clockwise positive.
#[must_use]
pub fn angle_of(v: &Vector2) -> f64 {
    normalize_angle(v.y.atan2(v.x))
}
