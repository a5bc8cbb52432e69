use std::fmt;

use thiserror::Error;

/// Top-level error type for the site level engine.
#[derive(Debug, Error)]
pub enum SiteLevelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("at least {required} vertices required, found {found}")]
    TooFewVertices { required: usize, found: usize },

    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Errors related to level and gradient derivation.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("levels are equal ({level:.3}); gradient is undefined")]
    EqualLevels { level: f64 },

    #[error("gradient ratio of zero cannot be applied")]
    InvalidGradient,

    #[error("point ({x:.3}, {y:.3}) is {distance:.6} from the line between the levels")]
    PointNotOnSegment { x: f64, y: f64, distance: f64 },
}

/// Lifecycle state of a [`ChainBuilder`](crate::operations::ChainBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    Empty,
    Building,
    Finalized,
}

impl fmt::Display for ChainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Building => "building",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// Errors raised by chain building outside the valid state.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("chain is already finalized")]
    AlreadyFinalized,

    #[error("chain builder is {found}, expected {expected}")]
    InvalidState {
        expected: ChainState,
        found: ChainState,
    },
}

/// Errors related to site operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("offset generation failed: {0}")]
    OffsetFailed(String),
}

/// Errors related to loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Flat classification of every failure the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DegenerateGeometry,
    EqualLevels,
    InvalidGradient,
    PointNotOnSegment,
    ChainAlreadyFinalized,
    InvalidState,
    OffsetGenerationFailed,
    InvalidInput,
    InvalidConfig,
}

impl SiteLevelError {
    /// Returns the kind of failure, independent of which layer raised it.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(_) => ErrorKind::DegenerateGeometry,
            Self::Level(LevelError::EqualLevels { .. }) => ErrorKind::EqualLevels,
            Self::Level(LevelError::InvalidGradient) => ErrorKind::InvalidGradient,
            Self::Level(LevelError::PointNotOnSegment { .. }) => ErrorKind::PointNotOnSegment,
            Self::Chain(ChainError::AlreadyFinalized) => ErrorKind::ChainAlreadyFinalized,
            Self::Chain(ChainError::InvalidState { .. }) => ErrorKind::InvalidState,
            Self::Operation(OperationError::OffsetFailed(_)) => ErrorKind::OffsetGenerationFailed,
            Self::Operation(OperationError::InvalidInput(_)) => ErrorKind::InvalidInput,
            Self::Config(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Convenience type alias for results using [`SiteLevelError`].
pub type Result<T> = std::result::Result<T, SiteLevelError>;
