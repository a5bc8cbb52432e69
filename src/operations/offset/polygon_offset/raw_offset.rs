use crate::error::{OperationError, Result};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};

/// Maximum miter distance as a multiple of `|distance|`.
const MITER_LIMIT: f64 = 4.0;

/// Threshold for flat cap: `cos(angle) < this` → near-180° reversal.
const FLAT_CAP_COS: f64 = -0.98;

/// An edge moved sideways by the offset distance.
struct OffsetEdge {
    start: Point2,
    end: Point2,
    dir: Vector2,
}

/// Builds the raw (untrimmed) offset of a closed polygon by moving each edge
/// along its left normal and joining neighbours at the corners.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for zero-length edges or
/// `OperationError::OffsetFailed` for fewer than three vertices.
pub fn build(vertices: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let n = vertices.len();
    if n < 3 {
        return Err(OperationError::OffsetFailed("no edges to offset".to_owned()).into());
    }

    // Phase A: parallel edges.
    let mut edges: Vec<OffsetEdge> = Vec::with_capacity(n);
    for i in 0..n {
        let v0 = &vertices[i];
        let v1 = &vertices[(i + 1) % n];
        let dir = segment_direction(v0, v1)?;
        let shift = left_normal(dir) * distance;
        edges.push(OffsetEdge {
            start: v0 + shift,
            end: v1 + shift,
            dir,
        });
    }

    // Phase B: join consecutive edges at each original vertex.
    let mut verts = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = if i == 0 { n - 1 } else { i - 1 };
        push_corner(&mut verts, &edges[prev], &edges[i], &vertices[i], distance);
    }

    Ok(verts)
}

/// Pushes the corner vertex/vertices between two consecutive offset edges.
///
/// 1. Near-antiparallel (>~169°): flat cap (two vertices)
/// 2. Miter too long: bevel (two vertices)
/// 3. Normal corner: single miter intersection point
fn push_corner(
    verts: &mut Vec<Point2>,
    prev: &OffsetEdge,
    next: &OffsetEdge,
    orig: &Point2,
    distance: f64,
) {
    let cos_angle = prev.dir.dot(&next.dir);

    if cos_angle < FLAT_CAP_COS {
        verts.push(prev.end);
        verts.push(next.start);
        return;
    }

    if let Some((t, _)) = line_line_intersect_2d(&prev.end, &prev.dir, &next.start, &next.dir) {
        let corner = prev.end + prev.dir * t;
        let limit = MITER_LIMIT * distance.abs();

        if (corner - orig).norm_squared() > limit * limit {
            verts.push(prev.end);
            verts.push(next.start);
        } else {
            verts.push(corner);
        }
    } else {
        // Collinear edges: the offset corner is the shifted original vertex.
        verts.push(orig + left_normal(prev.dir) * distance);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;

    fn square(side: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(side, 0.0),
            Point2::new(side, side),
            Point2::new(0.0, side),
        ]
    }

    #[test]
    fn ccw_square_left_offset_shrinks() {
        let raw = build(&square(10.0), 1.0).unwrap();
        assert_eq!(raw.len(), 4);
        assert!((raw[0].x - 1.0).abs() < 1e-9 && (raw[0].y - 1.0).abs() < 1e-9);
        assert!((signed_area(&raw) - 64.0).abs() < 1e-9);
    }

    #[test]
    fn ccw_square_right_offset_grows() {
        let raw = build(&square(10.0), -1.0).unwrap();
        assert!((signed_area(&raw) - 144.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_vertex_keeps_single_corner() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let raw = build(&pts, 1.0).unwrap();
        assert_eq!(raw.len(), 5);
        assert!((raw[1].x - 5.0).abs() < 1e-9 && (raw[1].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sharp_spike_is_capped() {
        // The tip at (20, 0.5) nearly reverses direction, so it is capped flat.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.5),
            Point2::new(0.0, 1.0),
        ];
        let raw = build(&pts, -0.1).unwrap();
        assert!(raw.len() > 3);
    }

    #[test]
    fn zero_length_edge_fails() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert!(build(&pts, 0.5).is_err());
    }
}
