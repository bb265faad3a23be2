//! # Astrological position resolver
//!
//! Turns an observation table into astrological positions:
//!
//! - [`resolve_body_sign`]: sign and degree of a body from its right ascension
//!   (`λ ≈ α · 15`).
//! - [`resolve_body_sign_ecliptic`]: same, through the exact equatorial → ecliptic rotation.
//! - [`PositionResolver`]: Sun, Moon and ascendant of a chart in one call, following
//!   [`ResolverSettings`].
//!
//! ## Example
//!
//! ```rust
//! use starsign::observations::CelestialBodyObservation;
//! use starsign::observer::{GeoLocation, ObserverContext};
//! use starsign::resolver::PositionResolver;
//! use starsign::settings::ResolverSettings;
//! use starsign::zodiac::ZodiacSign;
//!
//! let observations = vec![
//!     CelestialBodyObservation::new("sun", 7.63, 21.5, 250.3, 38.1, "Gemini"),
//!     CelestialBodyObservation::new("moon", 13.02, -8.1, 120.4, 25.7, "Virgo"),
//! ];
//! let vancouver = GeoLocation::new(49.2827, -123.1207);
//! let observer = ObserverContext::from_local_clock(vancouver, "1990-07-15", "14:30", -420)?;
//!
//! let chart = PositionResolver::new(ResolverSettings::default())
//!     .resolve_chart(&observer, &observations)?;
//! assert_eq!(chart.sun.sign, ZodiacSign::Cancer);
//! assert_eq!(chart.moon.sign, ZodiacSign::Libra);
//! assert_eq!(chart.ascendant.sign, ZodiacSign::Scorpio);
//! # Ok::<(), starsign::starsign_errors::StarsignError>(())
//! ```
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ascendant::{resolve_ascendant_heuristic, resolve_ascendant_with};
use crate::constants::{normalize_degrees, Degree, HOURS_TO_DEGREES};
use crate::constellations::map_constellation_to_sign;
use crate::earth_orientation::mean_obliquity;
use crate::observations::{find_body, CelestialBodyObservation};
use crate::observer::ObserverContext;
use crate::ref_system::equatorial_to_ecliptic_longitude;
use crate::settings::{AscendantMode, EclipticConversion, ResolverSettings};
use crate::starsign_errors::StarsignError;
use crate::time::{epoch_to_jd, jd_to_mjd};
use crate::zodiac::{ZodiacPosition, ZodiacSign};

/// Body identifier of the Sun in provider tables.
pub const SUN_ID: &str = "sun";
/// Body identifier of the Moon in provider tables.
pub const MOON_ID: &str = "moon";

/// Zodiac position of a body, approximating its ecliptic longitude by `α · 15`.
///
/// Arguments
/// -----------------
/// * `observations`: the observation table.
/// * `body_id`: identifier of the body, e.g. `"sun"`.
///
/// Return
/// ----------
/// * The sign and degree within the sign.
///
/// Errors
/// ----------
/// * [`StarsignError::BodyNotFound`] when `body_id` is absent. No default sign is assumed.
/// * [`StarsignError::InvalidGeometry`] when the right ascension is not finite.
pub fn resolve_body_sign(
    observations: &[CelestialBodyObservation],
    body_id: &str,
) -> Result<ZodiacPosition, StarsignError> {
    let body = find_body(observations, body_id)?;
    let ra = finite_right_ascension(body)?;

    let position = ZodiacPosition::from_longitude(normalize_degrees(ra * HOURS_TO_DEGREES));
    debug!("{body_id}: RA {ra:.4} h -> {position}");
    Ok(position)
}

/// Zodiac position of a body from the exact ecliptic longitude of (α, δ).
///
/// Arguments
/// -----------------
/// * `obliquity`: obliquity of the ecliptic ε, degrees.
///
/// Errors
/// ----------
/// * As [`resolve_body_sign`], plus [`StarsignError::InvalidGeometry`] for a non-finite
///   declination or obliquity.
pub fn resolve_body_sign_ecliptic(
    observations: &[CelestialBodyObservation],
    body_id: &str,
    obliquity: Degree,
) -> Result<ZodiacPosition, StarsignError> {
    let body = find_body(observations, body_id)?;
    let ra = finite_right_ascension(body)?;
    let dec = body.equatorial.declination_degrees;

    if !dec.is_finite() || !obliquity.is_finite() {
        return Err(StarsignError::InvalidGeometry(format!(
            "{body_id}: non-finite declination {dec} or obliquity {obliquity}"
        )));
    }

    let longitude = equatorial_to_ecliptic_longitude(ra, dec, obliquity);
    let position = ZodiacPosition::from_longitude(longitude);
    debug!("{body_id}: λ {longitude:.4}° -> {position}");
    Ok(position)
}

fn finite_right_ascension(body: &CelestialBodyObservation) -> Result<f64, StarsignError> {
    let ra = body.equatorial.right_ascension_hours;
    if ra.is_finite() {
        Ok(ra)
    } else {
        Err(StarsignError::InvalidGeometry(format!(
            "{}: right ascension {ra} is not finite",
            body.body_id
        )))
    }
}

/// Sun, Moon and ascendant of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatalSigns {
    pub sun: ZodiacPosition,
    pub moon: ZodiacPosition,
    pub ascendant: ZodiacPosition,
}

impl fmt::Display for NatalSigns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sun:       {}", self.sun)?;
        writeln!(f, "Moon:      {}", self.moon)?;
        write!(f, "Ascendant: {}", self.ascendant)
    }
}

/// Resolves charts according to a fixed set of [`ResolverSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionResolver {
    settings: ResolverSettings,
}

impl PositionResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        PositionResolver { settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve Sun, Moon and ascendant.
    ///
    /// Any failure fails the whole chart: a chart with a missing Sun or an undefined
    /// ascendant is never returned partially.
    ///
    /// Arguments
    /// -----------------
    /// * `observer`: location and instant of the chart.
    /// * `observations`: the provider table for that instant.
    ///
    /// Errors
    /// ----------
    /// * Any error of [`resolve_body_sign`], [`resolve_body_sign_ecliptic`],
    ///   [`resolve_ascendant_with`] or [`resolve_ascendant_heuristic`], depending on the
    ///   settings.
    pub fn resolve_chart(
        &self,
        observer: &ObserverContext,
        observations: &[CelestialBodyObservation],
    ) -> Result<NatalSigns, StarsignError> {
        self.settings.validate()?;

        let (sun, moon) = match self.settings.ecliptic_conversion {
            EclipticConversion::RightAscension => (
                resolve_body_sign(observations, SUN_ID)?,
                resolve_body_sign(observations, MOON_ID)?,
            ),
            EclipticConversion::Equatorial => {
                let obliquity = mean_obliquity(jd_to_mjd(epoch_to_jd(&observer.instant())));
                (
                    resolve_body_sign_ecliptic(observations, SUN_ID, obliquity)?,
                    resolve_body_sign_ecliptic(observations, MOON_ID, obliquity)?,
                )
            }
        };

        let ascendant = match self.settings.ascendant {
            AscendantMode::Rigorous => resolve_ascendant_with(observer, self.settings.sidereal_time)?,
            AscendantMode::Heuristic => {
                resolve_ascendant_heuristic(observations, self.settings.heuristic_tolerance)?
            }
        };

        let chart = NatalSigns {
            sun,
            moon,
            ascendant,
        };
        debug!("Resolved chart: sun {sun}, moon {moon}, ascendant {ascendant}");
        Ok(chart)
    }

    /// Constellation sign of every observation, in input order.
    ///
    /// Each body carries its own result so that one unmapped constellation does not
    /// hide the others.
    pub fn resolve_constellation_signs(
        &self,
        observations: &[CelestialBodyObservation],
    ) -> Vec<(String, Result<ZodiacSign, StarsignError>)> {
        observations
            .iter()
            .map(|obs| {
                (
                    obs.body_id.clone(),
                    map_constellation_to_sign(obs.constellation_label()),
                )
            })
            .collect()
    }
}
