//! Site levels, gradients and plot boundaries for housing layouts.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::{InvertUnits, SiteSettings};
pub use error::{ErrorKind, Result, SiteLevelError};
