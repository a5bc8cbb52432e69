mod polygon_offset;

pub use polygon_offset::{is_simple, PolygonOffset2D};
