use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, LevelError, Result};
use crate::geometry::LevelPoint;
use crate::math::{angle_of, normalize_angle, Point2, TOLERANCE};

use super::level::{gradient_between, orient_downhill};

/// Default shift of the marker past the line midpoint, in drawing units.
pub const ARROW_FULL_LENGTH: f64 = 2.0;

/// Placement of a directional gradient marker between two levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientAnnotation {
    /// Marker insertion point.
    pub position: Point2,
    /// Unsigned "1 in N" fall from the higher to the lower level.
    pub gradient_ratio: f64,
    /// Marker rotation in `[0, 2π)`, already turned by π when flipped.
    pub rotation: f64,
    /// Marker faces against +X and is mirrored to stay legible.
    pub flip: bool,
    /// Plan length of the line between the two levels.
    pub length: f64,
}

impl GradientAnnotation {
    /// Text written into the marker: `N` rounded to a whole number.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.0}", self.gradient_ratio)
    }
}

/// Computes a downhill gradient marker between two level observations.
///
/// The marker always reads from the higher level to the lower one,
/// whichever order the levels are supplied in.
#[derive(Debug)]
pub struct GradientLine {
    a: LevelPoint,
    b: LevelPoint,
    arrow_offset: f64,
}

impl GradientLine {
    /// Creates a gradient line with the default arrow offset.
    #[must_use]
    pub fn new(a: LevelPoint, b: LevelPoint) -> Self {
        Self {
            a,
            b,
            arrow_offset: ARROW_FULL_LENGTH,
        }
    }

    /// Sets the distance the marker is shifted downhill past the midpoint.
    #[must_use]
    pub fn with_arrow_offset(mut self, arrow_offset: f64) -> Self {
        self.arrow_offset = arrow_offset;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::EqualLevels` if both levels are equal and
    /// `GeometryError::Degenerate` if both share a plan position.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<GradientAnnotation> {
        self.a.validate()?;
        self.b.validate()?;
        if self.a.elevation == self.b.elevation {
            return Err(LevelError::EqualLevels {
                level: self.a.elevation,
            }
            .into());
        }

        let (high, low) = orient_downhill(self.a, self.b);
        let v = low.position - high.position;
        let length = v.norm();
        if length < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "levels share position ({}, {})",
                high.position.x, high.position.y
            ))
            .into());
        }

        let gradient = gradient_between(high.elevation, low.elevation, length)?;
        let direction = v / length;
        let position = high.position + v * 0.5 + direction * self.arrow_offset;

        let angle = angle_of(&v);
        let flip = angle > FRAC_PI_2 && angle < 3.0 * FRAC_PI_2;
        let rotation = if flip {
            normalize_angle(angle + PI)
        } else {
            angle
        };

        tracing::info!("gradient line length {length:.3}");
        tracing::debug!(
            ratio = gradient.one_in(),
            rotation,
            flip,
            x = position.x,
            y = position.y,
            "gradient marker"
        );

        Ok(GradientAnnotation {
            position,
            gradient_ratio: gradient.one_in(),
            rotation,
            flip,
            length,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn right_pointing_line_is_not_flipped() {
        let ann = GradientLine::new(LevelPoint::at(0.0, 0.0, 100.0), LevelPoint::at(20.0, 0.0, 98.0))
            .execute()
            .unwrap();
        assert!(!ann.flip);
        assert_abs_diff_eq!(ann.rotation, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ann.gradient_ratio, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ann.length, 20.0, epsilon = 1e-12);
        // Midpoint (10, 0) shifted 2 units downhill.
        assert_abs_diff_eq!(ann.position.x, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ann.position.y, 0.0, epsilon = 1e-12);
        assert_eq!(ann.label(), "10");
    }

    #[test]
    fn left_pointing_line_is_flipped_to_face_right() {
        let ann = GradientLine::new(LevelPoint::at(20.0, 0.0, 100.0), LevelPoint::at(0.0, 0.0, 98.0))
            .execute()
            .unwrap();
        assert!(ann.flip);
        assert_abs_diff_eq!(ann.rotation, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ann.position.x, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn supplied_order_does_not_matter() {
        let high = LevelPoint::at(3.0, 4.0, 55.0);
        let low = LevelPoint::at(-9.0, 13.0, 54.5);
        let ab = GradientLine::new(high, low).execute().unwrap();
        let ba = GradientLine::new(low, high).execute().unwrap();
        assert_eq!(ab, ba);
        assert_abs_diff_eq!(ab.gradient_ratio, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_stays_in_range_for_all_directions() {
        for step in 0..16 {
            let theta = f64::from(step) * PI / 8.0 + 0.01;
            let low = LevelPoint::at(10.0 * theta.cos(), 10.0 * theta.sin(), 9.0);
            let ann = GradientLine::new(LevelPoint::at(0.0, 0.0, 10.0), low)
                .with_arrow_offset(0.0)
                .execute()
                .unwrap();
            assert!((0.0..2.0 * PI).contains(&ann.rotation));
            // Unflipped markers never face backwards.
            let facing = ann.rotation > FRAC_PI_2 && ann.rotation < 3.0 * FRAC_PI_2;
            assert!(!facing, "theta {theta} rotation {}", ann.rotation);
            assert_abs_diff_eq!(ann.position.x, 5.0 * theta.cos(), epsilon = 1e-9);
        }
    }

    #[test]
    fn vertical_lines_are_not_flipped() {
        let up = GradientLine::new(LevelPoint::at(0.0, 0.0, 10.0), LevelPoint::at(0.0, 5.0, 9.0))
            .execute()
            .unwrap();
        assert!(!up.flip);
        assert_abs_diff_eq!(up.rotation, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn equal_levels_are_reported_not_defaulted() {
        let err = GradientLine::new(LevelPoint::at(0.0, 0.0, 100.0), LevelPoint::at(9.0, 0.0, 100.0))
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EqualLevels);
    }

    #[test]
    fn coincident_positions_are_degenerate() {
        let err = GradientLine::new(LevelPoint::at(1.0, 1.0, 100.0), LevelPoint::at(1.0, 1.0, 99.0))
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }
}
