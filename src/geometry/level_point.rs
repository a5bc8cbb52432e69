use crate::error::{GeometryError, Result};
use crate::math::{normalize_angle, Point2, Point3};

/// A single surveyed or derived level observation on the working plane.
///
/// `rotation` and `rotate_flag` are carried through from existing level
/// markers; the engine never derives them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPoint {
    pub position: Point2,
    pub elevation: f64,
    /// Marker rotation in radians, `[0, 2π)` when present.
    pub rotation: Option<f64>,
    pub rotate_flag: Option<f64>,
}

impl LevelPoint {
    /// Creates a level observation without marker orientation.
    #[must_use]
    pub fn new(position: Point2, elevation: f64) -> Self {
        Self {
            position,
            elevation,
            rotation: None,
            rotate_flag: None,
        }
    }

    /// Creates a level observation from raw coordinates.
    #[must_use]
    pub fn at(x: f64, y: f64, elevation: f64) -> Self {
        Self::new(Point2::new(x, y), elevation)
    }

    /// Sets the marker rotation, folded into `[0, 2π)`.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(normalize_angle(rotation));
        self
    }

    /// Sets the marker's dynamic rotate value.
    #[must_use]
    pub fn with_rotate_flag(mut self, flag: f64) -> Self {
        self.rotate_flag = Some(flag);
        self
    }

    /// Returns the observation as a 3D point with `z = elevation`.
    #[must_use]
    pub fn point3(&self) -> Point3 {
        Point3::new(self.position.x, self.position.y, self.elevation)
    }

    /// Checks that coordinates and elevation are finite.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` naming the offending value.
    pub fn validate(&self) -> Result<()> {
        if !self.elevation.is_finite() {
            return Err(GeometryError::NonFinite("elevation").into());
        }
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(GeometryError::NonFinite("position").into());
        }
        Ok(())
    }

    /// Exact `(x, y, elevation)` match, used for chain de-duplication.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_location(&self, other: &Self) -> bool {
        self.position.x == other.position.x
            && self.position.y == other.position.y
            && self.elevation == other.elevation
    }
}

/// A directed pair of level observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: LevelPoint,
    pub end: LevelPoint,
}

impl Segment {
    #[must_use]
    pub fn new(start: LevelPoint, end: LevelPoint) -> Self {
        Self { start, end }
    }

    /// Horizontal (plan) length, ignoring elevation.
    #[must_use]
    pub fn horizontal_length(&self) -> f64 {
        nalgebra::distance(&self.start.position, &self.end.position)
    }

    /// Difference in elevation from start to end.
    #[must_use]
    pub fn rise(&self) -> f64 {
        self.end.elevation - self.start.elevation
    }
}

/// Formats a level the way level markers display it (three decimals).
#[must_use]
pub fn format_level(level: f64) -> String {
    format!("{level:.3}")
}
