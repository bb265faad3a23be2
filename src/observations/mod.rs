//! # Celestial body observations
//!
//! One [`CelestialBodyObservation`] per tracked body (Sun, Moon, planets) at a single
//! instant, as reported by an external ephemeris provider. Observations are plain
//! immutable values; the resolvers only borrow slices of them.
//!
//! - [`provider`] decodes the provider's JSON payload into observations.
//! - [`display`] renders an observation set as a table with the mapped zodiac signs.
pub mod display;
pub mod provider;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::starsign_errors::StarsignError;

/// Position on the celestial equator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    /// Right ascension α, hours in `[0, 24)`.
    pub right_ascension_hours: Hour,
    /// Declination δ, degrees in `[-90, 90]`.
    pub declination_degrees: Degree,
}

/// Position relative to the observer's local horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    /// Azimuth, degrees clockwise from north (90 = due east).
    pub azimuth_degrees: Degree,
    pub altitude_degrees: Degree,
}

/// Constellation label attached to an observation by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    pub id: String,
    /// IAU three-letter abbreviation, e.g. `"Sco"`.
    pub short: String,
    /// Full IAU name, e.g. `"Scorpius"`.
    pub name: String,
}

/// A single body at the requested instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBodyObservation {
    /// Provider identifier, e.g. `"sun"`, `"moon"`, `"mars"`.
    pub body_id: String,
    pub name: String,
    pub equatorial: EquatorialCoordinates,
    pub horizontal: HorizontalCoordinates,
    pub constellation: Constellation,
    /// Distance from Earth in AU, when the provider reports it.
    pub distance_au: Option<f64>,
    /// Apparent visual magnitude, when the provider reports it.
    pub magnitude: Option<f64>,
}

impl CelestialBodyObservation {
    /// Build an observation from raw coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `body_id`: provider identifier (`"sun"`, `"moon"`, ...), also used as display name
    /// * `right_ascension_hours`, `declination_degrees`: equatorial position
    /// * `azimuth_degrees`, `altitude_degrees`: horizontal position
    /// * `constellation`: the constellation label, used for `short` and `name`
    ///
    /// Return
    /// ------
    /// * a new observation with no distance or magnitude
    pub fn new(
        body_id: impl Into<String>,
        right_ascension_hours: Hour,
        declination_degrees: Degree,
        azimuth_degrees: Degree,
        altitude_degrees: Degree,
        constellation: impl Into<String>,
    ) -> Self {
        let body_id = body_id.into();
        let constellation = constellation.into();
        CelestialBodyObservation {
            name: body_id.clone(),
            body_id,
            equatorial: EquatorialCoordinates {
                right_ascension_hours,
                declination_degrees,
            },
            horizontal: HorizontalCoordinates {
                azimuth_degrees,
                altitude_degrees,
            },
            constellation: Constellation {
                id: constellation.to_ascii_lowercase(),
                short: constellation.clone(),
                name: constellation,
            },
            distance_au: None,
            magnitude: None,
        }
    }

    /// Label used for constellation lookups: the full name, or the abbreviation when the
    /// provider left the name empty.
    pub fn constellation_label(&self) -> &str {
        if self.constellation.name.trim().is_empty() {
            &self.constellation.short
        } else {
            &self.constellation.name
        }
    }
}

/// Find the observation of `body_id` (exact, case-sensitive match).
///
/// Return
/// ------
/// * the first matching observation, or [`StarsignError::BodyNotFound`]
pub fn find_body<'a>(
    observations: &'a [CelestialBodyObservation],
    body_id: &str,
) -> Result<&'a CelestialBodyObservation, StarsignError> {
    observations
        .iter()
        .find(|obs| obs.body_id == body_id)
        .ok_or_else(|| {
            warn!("Body {body_id:?} missing from {} observations", observations.len());
            StarsignError::BodyNotFound(body_id.to_string())
        })
}
