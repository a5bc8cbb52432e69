use crate::math::polygon_2d::{extents, signed_area};
use crate::math::{Point2, Point3};

/// A closed plan boundary held at a single elevation.
///
/// The last vertex connects back to the first; the closing vertex is not
/// repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve {
    pub vertices: Vec<Point2>,
    pub elevation: f64,
}

impl BoundaryCurve {
    #[must_use]
    pub fn new(vertices: Vec<Point2>, elevation: f64) -> Self {
        Self {
            vertices,
            elevation,
        }
    }

    /// Enclosed plan area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Centre of the axis-aligned extents, or `None` for an empty curve.
    #[must_use]
    pub fn extents_center(&self) -> Option<Point2> {
        let (min, max) = extents(&self.vertices)?;
        Some(nalgebra::center(&min, &max))
    }

    /// Returns the vertices as 3D points at the boundary's elevation.
    #[must_use]
    pub fn to_points3(&self) -> Vec<Point3> {
        self.vertices
            .iter()
            .map(|p| Point3::new(p.x, p.y, self.elevation))
            .collect()
    }
}
