use crate::error::{GeometryError, OperationError, Result, SiteLevelError};
use crate::geometry::BoundaryCurve;
use crate::math::polygon_2d::{dedup_closed, polygon_area, signed_area};
use crate::math::{Point2, TOLERANCE};

use super::offset::{is_simple, PolygonOffset2D};

/// Derives the inner boundary of a closed polygon.
///
/// Both parallel offsets at `±offset_distance` are generated and the one
/// enclosing the smaller area is kept, so the result shrinks inward whatever
/// the polygon's winding. If only one side can be offset, its loop is used
/// as long as it is smaller than the polygon.
#[derive(Debug)]
pub struct InnerBoundary {
    polygon: Vec<Point2>,
    offset_distance: f64,
    elevation: f64,
}

impl InnerBoundary {
    #[must_use]
    pub fn new(polygon: Vec<Point2>, offset_distance: f64, elevation: f64) -> Self {
        Self {
            polygon,
            offset_distance,
            elevation,
        }
    }

    /// Executes the derivation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::OffsetFailed` if the polygon is degenerate,
    /// self-intersecting, or no offset smaller than it can be produced.
    /// `OperationError::InvalidInput` is returned for a zero or non-finite
    /// offset distance and `GeometryError::NonFinite` for a non-finite
    /// elevation.
    pub fn execute(&self) -> Result<BoundaryCurve> {
        if !self.elevation.is_finite() {
            return Err(GeometryError::NonFinite("boundary elevation").into());
        }
        let d = self.offset_distance.abs();
        if !d.is_finite() || d < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "offset distance {} must be finite and non-zero",
                self.offset_distance
            ))
            .into());
        }
        if self.polygon.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite("boundary vertex").into());
        }

        let vertices = dedup_closed(&self.polygon);
        if vertices.len() < 3 {
            return Err(offset_failed(format!(
                "polygon has {} distinct vertices",
                vertices.len()
            )));
        }
        if signed_area(&vertices).abs() < TOLERANCE {
            return Err(offset_failed("polygon encloses no area".to_owned()));
        }
        if !is_simple(&vertices) {
            return Err(offset_failed("polygon self-intersects".to_owned()));
        }

        let chosen = match (offset_loop(&vertices, d), offset_loop(&vertices, -d)) {
            (Ok(left), Ok(right)) => {
                let left_area = polygon_area(&left)?;
                let right_area = polygon_area(&right)?;
                tracing::debug!(left_area, right_area, "boundary offset areas");
                if left_area <= right_area {
                    left
                } else {
                    right
                }
            }
            (Ok(only), Err(e)) | (Err(e), Ok(only)) => {
                let area = polygon_area(&only)?;
                let original = polygon_area(&vertices)?;
                if area >= original {
                    return Err(e);
                }
                tracing::debug!(area, error = %e, "one boundary side failed to offset");
                only
            }
            (Err(e), Err(_)) => return Err(e),
        };
        Ok(BoundaryCurve::new(chosen, self.elevation))
    }
}

/// Largest loop of one offset side.
fn offset_loop(vertices: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let loops = PolygonOffset2D::new(vertices.to_vec(), distance)
        .execute()
        .map_err(|e| match e {
            SiteLevelError::Operation(OperationError::OffsetFailed(_)) => e,
            other => offset_failed(other.to_string()),
        })?;
    loops
        .into_iter()
        .next()
        .ok_or_else(|| offset_failed(format!("no loop at offset {distance}")))
}

fn offset_failed(reason: String) -> SiteLevelError {
    OperationError::OffsetFailed(reason).into()
}
