use crate::error::{ChainError, ChainState, Result};
use crate::geometry::{Chain, LevelPoint};

/// Result of offering a point to a [`ChainBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    /// An identical `(x, y, elevation)` point is already in the chain.
    DuplicateSkipped,
}

/// Accumulates level observations into an ordered 3D path.
///
/// `Empty → Building → Finalized`. One builder serves one chain-building
/// session; abandoning it before [`finalize`](Self::finalize) discards the
/// points.
#[derive(Debug)]
pub struct ChainBuilder {
    points: Vec<LevelPoint>,
    state: ChainState,
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            state: ChainState::Empty,
        }
    }

    #[must_use]
    pub fn state(&self) -> ChainState {
        self.state
    }

    /// Points accepted so far, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[LevelPoint] {
        &self.points
    }

    /// Starts the chain at `initial`.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidState` unless the builder is empty,
    /// `ChainError::AlreadyFinalized` once finalized, and
    /// `GeometryError::NonFinite` for a non-finite point.
    pub fn start(&mut self, initial: LevelPoint) -> Result<()> {
        self.expect_state(ChainState::Empty)?;
        initial.validate()?;
        self.points.push(initial);
        self.state = ChainState::Building;
        Ok(())
    }

    /// Appends `point` unless an identical point is already present.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidState` before [`start`](Self::start),
    /// `ChainError::AlreadyFinalized` after [`finalize`](Self::finalize), and
    /// `GeometryError::NonFinite` for a non-finite point.
    pub fn append(&mut self, point: LevelPoint) -> Result<AppendOutcome> {
        self.expect_state(ChainState::Building)?;
        point.validate()?;

        if self.points.iter().any(|p| p.same_location(&point)) {
            tracing::info!(
                x = point.position.x,
                y = point.position.y,
                elevation = point.elevation,
                "level already in chain, skipped"
            );
            return Ok(AppendOutcome::DuplicateSkipped);
        }

        self.points.push(point);
        Ok(AppendOutcome::Added)
    }

    /// Freezes the chain, closing it back to the first point if `closed`.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidState` before [`start`](Self::start) and
    /// `ChainError::AlreadyFinalized` if called twice.
    pub fn finalize(&mut self, closed: bool) -> Result<Chain> {
        self.expect_state(ChainState::Building)?;
        self.state = ChainState::Finalized;
        let points = std::mem::take(&mut self.points);
        tracing::debug!(points = points.len(), closed, "chain finalized");
        Ok(Chain::new(points, closed))
    }

    fn expect_state(&self, expected: ChainState) -> Result<()> {
        if self.state == expected {
            return Ok(());
        }
        if self.state == ChainState::Finalized {
            return Err(ChainError::AlreadyFinalized.into());
        }
        Err(ChainError::InvalidState {
            expected,
            found: self.state,
        }
        .into())
    }
}
