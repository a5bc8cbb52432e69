use super::level_point::{LevelPoint, Segment};
use crate::math::Point3;

/// A finalized, ordered path of level observations.
///
/// Produced by [`ChainBuilder`](crate::operations::ChainBuilder). Points keep
/// the order they were supplied in; a closed chain connects the last point
/// back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    points: Vec<LevelPoint>,
    closed: bool,
}

impl Chain {
    pub(crate) fn new(points: Vec<LevelPoint>, closed: bool) -> Self {
        Self { points, closed }
    }

    #[must_use]
    pub fn points(&self) -> &[LevelPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the path vertices as 3D points with `z = elevation`.
    #[must_use]
    pub fn to_points3(&self) -> Vec<Point3> {
        self.points.iter().map(LevelPoint::point3).collect()
    }

    /// Returns the number of segments in this chain.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates consecutive point pairs, including the closing pair when closed.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..self.segment_count())
            .map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Total horizontal length of the path.
    #[must_use]
    pub fn horizontal_length(&self) -> f64 {
        self.segments().map(|s| s.horizontal_length()).sum()
    }
}
