use crate::math::Point2;

use super::self_intersect::Split;

/// Squared distance under which two consecutive run vertices are merged.
const SAME_POINT_SQ: f64 = 1e-20;

/// Cuts a closed polygon at every split, producing open runs in walking order.
///
/// Each run starts at one split and ends at the next. A single split yields
/// one run all the way round back to itself.
#[must_use]
pub fn build(vertices: &[Point2], splits: &[Split]) -> Vec<Vec<Point2>> {
    if splits.is_empty() || vertices.is_empty() {
        return Vec::new();
    }

    let total = splits.len();
    (0..total)
        .map(|k| run(vertices, splits[k], splits[(k + 1) % total]))
        .filter(|r| r.len() >= 2)
        .collect()
}

/// Vertices from `from` forward to `to`.
fn run(vertices: &[Point2], from: Split, to: Split) -> Vec<Point2> {
    let n = vertices.len();
    let mut verts = vec![point_on_edge(vertices, from)];

    if from.edge != to.edge || to.t <= from.t {
        let mut edge = from.edge;
        loop {
            edge = (edge + 1) % n;
            push_distinct(&mut verts, vertices[edge]);
            if edge == to.edge {
                break;
            }
        }
    }
    push_distinct(&mut verts, point_on_edge(vertices, to));
    verts
}

fn push_distinct(verts: &mut Vec<Point2>, p: Point2) {
    if verts
        .last()
        .is_some_and(|last| (p - last).norm_squared() < SAME_POINT_SQ)
    {
        return;
    }
    verts.push(p);
}

fn point_on_edge(vertices: &[Point2], split: Split) -> Point2 {
    let v0 = &vertices[split.edge];
    let v1 = &vertices[(split.edge + 1) % vertices.len()];
    v0 + (v1 - v0) * split.t
}
