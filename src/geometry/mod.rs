pub mod boundary;
pub mod chain;
pub mod gradient;
pub mod level_point;

pub use boundary::BoundaryCurve;
pub use chain::Chain;
pub use gradient::Gradient;
pub use level_point::{format_level, LevelPoint, Segment};
