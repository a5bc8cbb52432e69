use crate::error::{OperationError, Result};
use crate::geometry::BoundaryCurve;
use crate::math::Point2;

use super::boundary::InnerBoundary;

/// Default gap between a plot outline and its finish floor level line.
pub const DEFAULT_FFL_OFFSET: f64 = 0.01;

/// A finish floor level outline and where its level marker goes.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishFloorLayout {
    pub boundary: BoundaryCurve,
    /// Centre of the boundary's extents.
    pub marker: Point2,
}

/// Draws the finish floor level line just inside a plot outline.
#[derive(Debug)]
pub struct FinishFloorOutline {
    plot: Vec<Point2>,
    ffl: f64,
    offset: f64,
}

impl FinishFloorOutline {
    #[must_use]
    pub fn new(plot: Vec<Point2>, ffl: f64) -> Self {
        Self {
            plot,
            ffl,
            offset: DEFAULT_FFL_OFFSET,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`InnerBoundary::execute`].
    pub fn execute(&self) -> Result<FinishFloorLayout> {
        let boundary = InnerBoundary::new(self.plot.clone(), self.offset, self.ffl).execute()?;
        let marker = boundary
            .extents_center()
            .ok_or_else(|| OperationError::OffsetFailed("empty boundary".to_owned()))?;
        tracing::debug!(ffl = self.ffl, x = marker.x, y = marker.y, "finish floor marker");
        Ok(FinishFloorLayout { boundary, marker })
    }
}
