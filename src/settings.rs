//! # Resolver settings
//!
//! Knobs of the [`PositionResolver`](crate::resolver::PositionResolver), loadable from TOML:
//!
//! ```toml
//! ascendant = "rigorous"                  # or "heuristic"
//! sidereal_time = "apparent"              # or "mean"
//! ecliptic_conversion = "right_ascension" # or "equatorial"
//! heuristic_tolerance = 5.0               # degrees, in (0, 90]
//! ```
//!
//! Missing keys take their default value; unknown keys are rejected.
use serde::{Deserialize, Serialize};

use crate::ascendant::SiderealTimeModel;
use crate::constants::{Degree, DEFAULT_HEURISTIC_TOLERANCE, DUE_EAST};
use crate::starsign_errors::StarsignError;

/// How the ascendant is resolved. Exactly one method is used per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AscendantMode {
    /// Sidereal time, obliquity and latitude.
    #[default]
    Rigorous,
    /// Body closest to due east in the observation table.
    Heuristic,
}

impl TryFrom<&str> for AscendantMode {
    type Error = StarsignError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rigorous" => Ok(AscendantMode::Rigorous),
            "heuristic" => Ok(AscendantMode::Heuristic),
            other => Err(StarsignError::InvalidSettings(format!(
                "unknown ascendant mode {other:?}"
            ))),
        }
    }
}

/// How Sun and Moon right ascensions become ecliptic longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EclipticConversion {
    /// `λ ≈ α · 15`, ignoring declination.
    #[default]
    RightAscension,
    /// Full rotation of (α, δ) by the obliquity.
    Equatorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSettings {
    pub ascendant: AscendantMode,
    pub sidereal_time: SiderealTimeModel,
    pub ecliptic_conversion: EclipticConversion,
    /// Half-width of the due-east window of the heuristic ascendant, degrees.
    pub heuristic_tolerance: Degree,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        ResolverSettings {
            ascendant: AscendantMode::Rigorous,
            sidereal_time: SiderealTimeModel::Apparent,
            ecliptic_conversion: EclipticConversion::RightAscension,
            heuristic_tolerance: DEFAULT_HEURISTIC_TOLERANCE,
        }
    }
}

impl ResolverSettings {
    /// Parse and validate settings from a TOML document.
    ///
    /// Errors
    /// ----------
    /// * [`StarsignError::InvalidSettings`] on TOML errors, unknown keys or values, or an
    ///   out-of-range tolerance.
    pub fn from_toml_str(input: &str) -> Result<Self, StarsignError> {
        let settings: ResolverSettings = toml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_ascendant(mut self, mode: AscendantMode) -> Self {
        self.ascendant = mode;
        self
    }

    pub fn with_sidereal_time(mut self, model: SiderealTimeModel) -> Self {
        self.sidereal_time = model;
        self
    }

    pub fn with_ecliptic_conversion(mut self, conversion: EclipticConversion) -> Self {
        self.ecliptic_conversion = conversion;
        self
    }

    pub fn with_heuristic_tolerance(mut self, tolerance: Degree) -> Self {
        self.heuristic_tolerance = tolerance;
        self
    }

    /// The tolerance must be finite and in `(0, 90]`.
    pub fn validate(&self) -> Result<(), StarsignError> {
        let tol = self.heuristic_tolerance;
        if !tol.is_finite() || tol <= 0.0 || tol > DUE_EAST {
            return Err(StarsignError::InvalidSettings(format!(
                "heuristic_tolerance must be in (0, 90], got {tol}"
            )));
        }
        Ok(())
    }
}
