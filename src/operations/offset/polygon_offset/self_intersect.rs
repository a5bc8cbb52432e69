use crate::math::distance_2d::{point_on_segment, segment_param};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, TOLERANCE};

/// Distance under which a vertex counts as touching another edge.
const CONTACT_TOL: f64 = 1e-9;

/// Edge parameters this close to 0 or 1 snap to the vertex.
const PARAM_EPS: f64 = 1e-9;

/// A position on a closed polygon where the boundary must be cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Edge running from vertex `edge` to vertex `edge + 1`.
    pub edge: usize,
    /// Parameter along the edge in `[0, 1)`.
    pub t: f64,
}

/// Finds every place where two non-adjacent edges of a closed polygon meet.
///
/// Proper crossings, a vertex resting on another edge, vertex-to-vertex
/// pinches and collinear overlaps all cut both edges involved. The result is
/// sorted in walking order with duplicates removed.
#[must_use]
pub fn find_splits(vertices: &[Point2]) -> Vec<Split> {
    let n = vertices.len();
    let mut splits = Vec::new();
    if n < 4 {
        return splits;
    }

    for i in 0..n {
        for j in (i + 2)..n {
            // First and last edges share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }

            let a = (vertices[i], vertices[(i + 1) % n]);
            let b = (vertices[j], vertices[(j + 1) % n]);

            // Vertex contacts. A collinear overlap shows up here as the
            // overlapping endpoints of either edge.
            for (p, own, t_own, other, (o0, o1)) in [
                (a.0, i, 0.0, j, b),
                (a.1, i, 1.0, j, b),
                (b.0, j, 0.0, i, a),
                (b.1, j, 1.0, i, a),
            ] {
                if point_on_segment(&p, &o0, &o1, CONTACT_TOL) {
                    push_split(&mut splits, n, own, t_own);
                    push_split(&mut splits, n, other, segment_param(&p, &o0, &o1));
                }
            }

            if let Some((_, t, u)) = segment_segment_intersect_2d(&a.0, &a.1, &b.0, &b.1) {
                push_split(&mut splits, n, i, t);
                push_split(&mut splits, n, j, u);
            }
        }
    }

    splits.sort_by(|a, b| a.edge.cmp(&b.edge).then(a.t.total_cmp(&b.t)));
    splits.dedup_by(|next, kept| next.edge == kept.edge && (next.t - kept.t).abs() < PARAM_EPS);
    splits
}

/// True when two consecutive edges run back over each other.
#[must_use]
pub fn folds_back(vertices: &[Point2]) -> bool {
    let n = vertices.len();
    (0..n).any(|i| {
        let d1 = vertices[(i + 1) % n] - vertices[i];
        let d2 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
        let scale = d1.norm() * d2.norm();
        scale > TOLERANCE && d1.perp(&d2).abs() <= TOLERANCE * scale && d1.dot(&d2) < 0.0
    })
}

fn push_split(splits: &mut Vec<Split>, n: usize, edge: usize, t: f64) {
    let split = if t >= 1.0 - PARAM_EPS {
        Split {
            edge: (edge + 1) % n,
            t: 0.0,
        }
    } else {
        Split {
            edge,
            t: if t <= PARAM_EPS { 0.0 } else { t },
        }
    };
    splits.push(split);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_square_has_no_splits() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(find_splits(&pts).is_empty());
        assert!(!folds_back(&pts));
    }

    #[test]
    fn bow_tie_splits_both_crossing_edges() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        let splits = find_splits(&pts);
        assert_eq!(splits.len(), 2);
        assert_eq!((splits[0].edge, splits[1].edge), (0, 2));
        assert!((splits[0].t - 0.5).abs() < 1e-9);
        assert!((splits[1].t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn vertex_resting_on_edge_cuts_both() {
        // Vertex 2 sits exactly on edge 4 → 0.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let splits = find_splits(&pts);
        assert!(splits.contains(&Split { edge: 2, t: 0.0 }));
        assert!(splits.iter().any(|s| s.edge == 4 && (s.t - 0.5).abs() < 1e-9));
    }

    #[test]
    fn collinear_overlap_cuts_at_both_ends() {
        // Edges 1 and 5 overlap along y = 1 between x = 2 and x = 3.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 2.0),
            Point2::new(5.0, 2.0),
            Point2::new(2.0, 1.0),
            Point2::new(5.0, 1.0),
            Point2::new(5.0, 0.0),
        ];
        let splits = find_splits(&pts);
        assert!(splits.contains(&Split { edge: 1, t: 0.0 }));
        assert!(splits.contains(&Split { edge: 5, t: 0.0 }));
        assert!(splits.iter().any(|s| s.edge == 1 && (s.t - 1.0 / 3.0).abs() < 1e-9));
        assert!(splits.iter().any(|s| s.edge == 5 && (s.t - 1.0 / 3.0).abs() < 1e-9));
    }

    #[test]
    fn spike_folding_back_is_detected() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 7.0),
            Point2::new(2.0, 5.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(folds_back(&pts));
    }
}
