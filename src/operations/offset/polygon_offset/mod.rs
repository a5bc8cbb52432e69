mod filter;
mod raw_offset;
mod self_intersect;
mod slice;
mod stitch;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::polygon_2d::signed_area;
use crate::math::{Point2, TOLERANCE};

/// Offsets a closed straight-edged polygon using the slice-and-filter
/// algorithm.
///
/// Positive distance moves edges to the left of travel (inward for a
/// counter-clockwise polygon), negative to the right. Loops are returned
/// largest first; collapsed loops are dropped.
#[derive(Debug)]
pub struct PolygonOffset2D {
    vertices: Vec<Point2>,
    distance: f64,
}

impl PolygonOffset2D {
    /// Creates a new polygon offset operation.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, distance: f64) -> Self {
        Self { vertices, distance }
    }

    /// Executes the offset, returning one or more closed loops.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than 3 vertices,
    /// `GeometryError::Degenerate` for a zero-length edge, or
    /// `OperationError::OffsetFailed` if the offset collapses entirely.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        if self.vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                required: 3,
                found: self.vertices.len(),
            }
            .into());
        }

        if self.distance.abs() < TOLERANCE {
            return Ok(vec![self.vertices.clone()]);
        }

        // Step 1: Build raw offset polygon.
        let raw = raw_offset::build(&self.vertices, self.distance)?;

        // Step 2: Find every crossing, touch and overlap.
        let splits = self_intersect::find_splits(&raw);

        let loops = if splits.is_empty() {
            vec![raw]
        } else {
            // Step 3: Cut into runs between splits.
            let runs = slice::build(&raw, &splits);

            // Step 4: Filter runs by distance to original.
            let valid = filter::apply(&runs, &self.vertices, self.distance);

            // Step 5: Stitch valid runs into closed loops.
            stitch::connect(&valid)
        };

        // Step 6: Drop loops that wrap the wrong way or come closer to the
        // original than the offset distance: the offset passed through them.
        let winding = signed_area(&self.vertices).signum();
        let clearance = filter::clearance(self.distance);
        let mut result: Vec<(f64, Vec<Point2>)> = loops
            .into_iter()
            .map(|l| (signed_area(&l), l))
            .filter(|(area, l)| {
                area.abs() > TOLERANCE
                    && area.signum() == winding
                    && l.iter()
                        .all(|p| filter::min_dist_to_polygon(p, &self.vertices) >= clearance)
            })
            .collect();

        if result.is_empty() {
            tracing::warn!(distance = self.distance, "polygon offset collapsed");
            return Err(OperationError::OffsetFailed("offset collapsed completely".to_owned()).into());
        }

        result.sort_by(|a, b| {
            b.0.abs()
                .partial_cmp(&a.0.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(result.into_iter().map(|(_, l)| l).collect())
    }
}

/// True when no two non-adjacent edges of the closed polygon meet and no
/// edge doubles back over its neighbour.
#[must_use]
pub fn is_simple(vertices: &[Point2]) -> bool {
    self_intersect::find_splits(vertices).is_empty() && !self_intersect::folds_back(vertices)
}
