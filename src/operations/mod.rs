mod back_of_footway;
mod boundary;
mod chain_builder;
mod finish_floor;
mod gradient_line;
pub mod level;
pub mod offset;

pub use back_of_footway::{BackOfFootway, BACK_OF_FOOTWAY_HIGH, BACK_OF_FOOTWAY_LOW};
pub use boundary::InnerBoundary;
pub use chain_builder::{AppendOutcome, ChainBuilder};
pub use finish_floor::{FinishFloorLayout, FinishFloorOutline, DEFAULT_FFL_OFFSET};
pub use gradient_line::{GradientAnnotation, GradientLine, ARROW_FULL_LENGTH};
pub use offset::PolygonOffset2D;
