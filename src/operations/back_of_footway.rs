use crate::error::{OperationError, Result};
use crate::geometry::{Chain, LevelPoint};
use crate::math::distance_2d::closest_point_on_segment;
use crate::math::{distance, Point2};

/// Kerb upstand for a standard footway.
pub const BACK_OF_FOOTWAY_HIGH: f64 = 0.177;
/// Kerb upstand for a dropped or shared footway.
pub const BACK_OF_FOOTWAY_LOW: f64 = 0.105;

/// Level at the back of a footway, taken from a road level string.
///
/// The road string is read as a 3D path; the level at the point nearest the
/// picked position is rounded to millimetres before the upstand is added.
#[derive(Debug)]
pub struct BackOfFootway<'a> {
    road: &'a Chain,
    upstand: f64,
}

impl<'a> BackOfFootway<'a> {
    #[must_use]
    pub fn new(road: &'a Chain, upstand: f64) -> Self {
        Self { road, upstand }
    }

    /// Level at `point`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the road string has fewer
    /// than two points.
    pub fn execute(&self, point: Point2) -> Result<LevelPoint> {
        if self.road.len() < 2 {
            return Err(OperationError::InvalidInput(format!(
                "road string has {} points",
                self.road.len()
            ))
            .into());
        }

        let (offset, road_level) = self
            .road
            .segments()
            .map(|seg| {
                let (closest, t) =
                    closest_point_on_segment(&point, &seg.start.position, &seg.end.position);
                (distance(&point, &closest), seg.start.elevation + t * seg.rise())
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .ok_or_else(|| OperationError::InvalidInput("road string has no segments".to_owned()))?;

        let elevation = round_mm(road_level) + self.upstand;
        tracing::debug!(offset, road_level, elevation, "back of footway level");
        Ok(LevelPoint::new(point, elevation))
    }
}

fn round_mm(level: f64) -> f64 {
    (level * 1000.0).round() / 1000.0
}
