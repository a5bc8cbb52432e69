//! Level and gradient derivation between known levels.
//!
//! Gradients are signed "1 in N" ratios: horizontal run over rise. A fall
//! from the start level to the end level gives a negative ratio, and
//! [`level_at_distance`] applies a ratio with the same convention, so the two
//! functions invert each other.

use crate::config::InvertUnits;
use crate::error::{GeometryError, LevelError, Result};
use crate::geometry::{Gradient, LevelPoint, Segment};
use crate::math::distance_2d::{point_on_segment, point_to_segment_dist};
use crate::math::{distance, nonzero_distance, Point2, TOLERANCE};

/// Level reached after `horizontal_distance` at `gradient_ratio` from `start_level`.
///
/// # Errors
///
/// Returns `LevelError::InvalidGradient` if `gradient_ratio` is zero or not
/// finite, and `GeometryError::NonFinite` for a non-finite level or distance.
#[allow(clippy::float_cmp)]
pub fn level_at_distance(
    start_level: f64,
    gradient_ratio: f64,
    horizontal_distance: f64,
) -> Result<f64> {
    if !start_level.is_finite() {
        return Err(GeometryError::NonFinite("level").into());
    }
    if !horizontal_distance.is_finite() {
        return Err(GeometryError::NonFinite("horizontal distance").into());
    }
    if gradient_ratio == 0.0 || !gradient_ratio.is_finite() {
        return Err(LevelError::InvalidGradient.into());
    }
    Ok(start_level + horizontal_distance * (1.0 / gradient_ratio))
}

/// Gradient from `start_level` to `end_level` over `horizontal_distance`.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` for a non-finite level or distance,
/// `GeometryError::Degenerate` if the distance is zero (or negative), and
/// `LevelError::EqualLevels` if the levels are equal.
#[allow(clippy::float_cmp)]
pub fn gradient_between(
    start_level: f64,
    end_level: f64,
    horizontal_distance: f64,
) -> Result<Gradient> {
    if !(start_level.is_finite() && end_level.is_finite()) {
        return Err(GeometryError::NonFinite("level").into());
    }
    if !horizontal_distance.is_finite() {
        return Err(GeometryError::NonFinite("horizontal distance").into());
    }
    if horizontal_distance.is_nan() || horizontal_distance < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "horizontal distance {horizontal_distance} between levels"
        ))
        .into());
    }
    if start_level == end_level {
        return Err(LevelError::EqualLevels { level: start_level }.into());
    }
    let gradient = Gradient::new(horizontal_distance / (end_level - start_level));
    tracing::debug!(
        start_level,
        end_level,
        horizontal_distance,
        ratio = gradient.ratio,
        "gradient between levels"
    );
    Ok(gradient)
}

/// Orders two observations so the first is the higher ("always point downhill").
///
/// On equal elevations `a` stays first.
#[must_use]
pub fn orient_downhill(a: LevelPoint, b: LevelPoint) -> (LevelPoint, LevelPoint) {
    if b.elevation > a.elevation {
        (b, a)
    } else {
        (a, b)
    }
}

/// Level at `candidate`, a point picked on the line between two known levels.
///
/// The elevation is interpolated linearly by the candidate's plan distance
/// from `seg.start`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero plan length
/// and `LevelError::PointNotOnSegment` if `candidate` is further than
/// `tolerance` from the segment.
pub fn level_between_levels(
    seg: &Segment,
    candidate: Point2,
    tolerance: f64,
) -> Result<LevelPoint> {
    let a = &seg.start.position;
    let b = &seg.end.position;
    let length = nonzero_distance(a, b)?;

    if !point_on_segment(&candidate, a, b, tolerance) {
        return Err(LevelError::PointNotOnSegment {
            x: candidate.x,
            y: candidate.y,
            distance: point_to_segment_dist(&candidate, a, b),
        }
        .into());
    }

    let t = (distance(a, &candidate) / length).min(1.0);
    let elevation = seg.start.elevation + t * seg.rise();
    tracing::debug!(t, elevation, "level between levels");
    Ok(LevelPoint::new(candidate, elevation))
}

/// Level at `target`, reached from `start` along `gradient_ratio`.
///
/// # Errors
///
/// Returns `LevelError::InvalidGradient` if `gradient_ratio` is zero or not
/// finite.
pub fn level_at_point(
    start: &LevelPoint,
    gradient_ratio: f64,
    target: Point2,
) -> Result<LevelPoint> {
    let run = distance(&start.position, &target);
    let elevation = level_at_distance(start.elevation, gradient_ratio, run)?;
    tracing::debug!(run, elevation, "level at gradient");
    Ok(LevelPoint::new(target, elevation))
}

/// Level below `start_level` by an invert depth.
#[must_use]
pub fn level_from_invert(start_level: f64, invert: f64, units: InvertUnits) -> f64 {
    start_level - units.to_metres(invert)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SiteLevelError};
    use approx::assert_abs_diff_eq;

    #[test]
    fn fall_of_two_over_twenty_is_one_in_ten() {
        let g = gradient_between(100.0, 98.0, 20.0).unwrap();
        assert_abs_diff_eq!(g.one_in(), 10.0, epsilon = 1e-12);
        assert!(g.is_fall());
        let mid = level_at_distance(100.0, g.ratio, 10.0).unwrap();
        assert_abs_diff_eq!(mid, 99.0, epsilon = 1e-12);
    }

    #[test]
    fn equal_levels_are_reported() {
        let err = gradient_between(100.0, 100.0, 12.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EqualLevels);
    }

    #[test]
    fn zero_distance_is_degenerate() {
        let err = gradient_between(100.0, 99.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
        let err = gradient_between(100.0, 99.0, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }

    #[test]
    fn zero_ratio_is_invalid() {
        let err = level_at_distance(100.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGradient);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = gradient_between(f64::NAN, 1.0, 5.0).unwrap_err();
        assert!(matches!(
            err,
            SiteLevelError::Geometry(GeometryError::NonFinite("level"))
        ));
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
        assert!(gradient_between(1.0, f64::INFINITY, 5.0).is_err());
        assert!(gradient_between(1.0, 2.0, f64::INFINITY).is_err());

        let err = level_at_distance(f64::INFINITY, 20.0, 5.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
        assert!(level_at_distance(10.0, 20.0, f64::NAN).is_err());
        let err = level_at_distance(10.0, f64::INFINITY, 5.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGradient);
    }

    #[test]
    fn level_at_distance_is_monotonic_with_ratio_sign() {
        for ratio in [-200.0, -40.0, -1.0, 0.5, 12.0, 80.0] {
            let mut prev = level_at_distance(50.0, ratio, 0.0).unwrap();
            assert_abs_diff_eq!(prev, 50.0, epsilon = 1e-12);
            for step in 1..=20 {
                let d = f64::from(step) * 2.5;
                let level = level_at_distance(50.0, ratio, d).unwrap();
                if ratio > 0.0 {
                    assert!(level > prev, "ratio {ratio} at {d}");
                } else {
                    assert!(level < prev, "ratio {ratio} at {d}");
                }
                prev = level;
            }
        }
    }

    #[test]
    fn gradient_and_level_invert_each_other() {
        let cases = [
            (100.0, 98.0, 20.0),
            (98.0, 100.0, 20.0),
            (45.125, 45.100, 3.7),
            (-2.0, 7.5, 140.0),
            (12.0, 11.999, 0.25),
        ];
        for (start, end, d) in cases {
            let g = gradient_between(start, end, d).unwrap();
            let back = level_at_distance(start, g.ratio, d).unwrap();
            assert_abs_diff_eq!(back, end, epsilon = 1e-9);
        }
    }

    #[test]
    fn orient_downhill_puts_higher_first() {
        let a = LevelPoint::at(0.0, 0.0, 98.0);
        let b = LevelPoint::at(10.0, 0.0, 100.0);
        let (high, low) = orient_downhill(a, b);
        assert!(high.elevation >= low.elevation);
        assert_eq!(orient_downhill(a, b), orient_downhill(b, a));
        assert_eq!(high, b);
    }

    #[test]
    fn orient_downhill_keeps_first_on_tie() {
        let a = LevelPoint::at(0.0, 0.0, 50.0);
        let b = LevelPoint::at(5.0, 5.0, 50.0);
        assert_eq!(orient_downhill(a, b), (a, b));
        assert_eq!(orient_downhill(b, a), (b, a));
    }

    #[test]
    fn level_between_levels_interpolates() {
        let seg = Segment::new(LevelPoint::at(0.0, 0.0, 100.0), LevelPoint::at(20.0, 0.0, 98.0));
        let lp = level_between_levels(&seg, Point2::new(5.0, 0.0), 1e-6).unwrap();
        assert_abs_diff_eq!(lp.elevation, 99.5, epsilon = 1e-12);
        assert_eq!(lp.position, Point2::new(5.0, 0.0));
    }

    #[test]
    fn level_between_equal_levels_is_flat() {
        let seg = Segment::new(LevelPoint::at(0.0, 0.0, 10.0), LevelPoint::at(0.0, 8.0, 10.0));
        let lp = level_between_levels(&seg, Point2::new(0.0, 3.0), 1e-6).unwrap();
        assert_abs_diff_eq!(lp.elevation, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn level_between_levels_rejects_off_line_point() {
        let seg = Segment::new(LevelPoint::at(0.0, 0.0, 100.0), LevelPoint::at(20.0, 0.0, 98.0));
        let err = level_between_levels(&seg, Point2::new(5.0, 1.0), 1e-6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PointNotOnSegment);
        let err = level_between_levels(&seg, Point2::new(25.0, 0.0), 1e-6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PointNotOnSegment);
    }

    #[test]
    fn level_between_coincident_levels_is_degenerate() {
        let seg = Segment::new(LevelPoint::at(1.0, 1.0, 100.0), LevelPoint::at(1.0, 1.0, 98.0));
        let err = level_between_levels(&seg, Point2::new(1.0, 1.0), 1e-6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }

    #[test]
    fn level_at_point_follows_gradient() {
        let start = LevelPoint::at(0.0, 0.0, 20.0);
        let lp = level_at_point(&start, -60.0, Point2::new(36.0, 48.0)).unwrap();
        assert_abs_diff_eq!(lp.elevation, 19.0, epsilon = 1e-12);
    }

    #[test]
    fn invert_is_subtracted_in_configured_units() {
        assert_abs_diff_eq!(
            level_from_invert(50.0, 1.25, InvertUnits::Metres),
            48.75,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            level_from_invert(50.0, 1250.0, InvertUnits::Millimetres),
            48.75,
            epsilon = 1e-12
        );
    }
}
