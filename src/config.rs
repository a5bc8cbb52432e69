use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Units in which an invert depth is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertUnits {
    /// Applied directly in elevation units.
    #[default]
    Metres,
    /// Divided by 1000 before being applied.
    Millimetres,
}

impl InvertUnits {
    /// Converts an invert depth into elevation units.
    #[must_use]
    pub fn to_metres(self, invert: f64) -> f64 {
        match self {
            Self::Metres => invert,
            Self::Millimetres => invert / 1000.0,
        }
    }
}

/// Drawing-wide parameters for level, gradient and boundary derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Distance a gradient marker is shifted downhill past the line midpoint.
    pub arrow_offset: f64,
    /// Scale applied to gradient markers by the host.
    pub marker_scale: f64,
    /// Offset between a plot outline and its finish floor level line.
    pub boundary_offset: f64,
    /// Maximum distance a picked point may sit off the line between two levels.
    pub on_segment_tolerance: f64,
    /// Units for invert depths.
    pub invert_units: InvertUnits,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            arrow_offset: 2.0,
            marker_scale: 0.2,
            boundary_offset: 0.01,
            on_segment_tolerance: 1e-6,
            invert_units: InvertUnits::Metres,
        }
    }
}

impl SiteSettings {
    /// Parses settings from TOML, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` if the parsed values fail [`Self::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Self = toml::from_str(source).map_err(ConfigError::from)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        if !self.arrow_offset.is_finite() {
            return Err(ConfigError::Invalid("arrow_offset must be finite".into()).into());
        }
        if self.marker_scale.is_nan() || self.marker_scale <= 0.0 {
            return Err(ConfigError::Invalid("marker_scale must be positive".into()).into());
        }
        if !self.boundary_offset.is_finite() || self.boundary_offset <= 0.0 {
            return Err(ConfigError::Invalid("boundary_offset must be positive".into()).into());
        }
        if self.on_segment_tolerance.is_nan() || self.on_segment_tolerance < 0.0 {
            return Err(
                ConfigError::Invalid("on_segment_tolerance must not be negative".into()).into(),
            );
        }
        Ok(())
    }
}
