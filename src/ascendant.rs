//! # Ascendant resolution
//!
//! The ascendant is the point of the ecliptic rising on the eastern horizon. Two
//! independent methods are provided and never blended:
//!
//! ## Rigorous mode
//!
//! [`resolve_ascendant`] derives it from the observer's instant and position:
//!
//! 1. Julian Day of the instant ([`crate::time::epoch_to_jd`]).
//! 2. Greenwich sidereal time, mean ([`crate::time::gmst`]) or apparent
//!    ([`crate::time::gast`]), shifted by the east longitude into the local sidereal time.
//! 3. `RAMC = LST · 15`, the right ascension of the meridian in degrees.
//! 4. Mean obliquity ε of the ecliptic ([`crate::earth_orientation::obleq`]).
//! 5. [`ascendant_longitude`] with the observer latitude φ:
//!
//! ```text
//! tan λ = cos(RAMC) / −(sin(RAMC)·cos ε + tan φ·sin ε)
//! ```
//!
//! `atan` only covers half the circle: the angle must lie in the half-plane of the
//! denominator, which `atan2` gives directly, signed zero included. Dropping that
//! correction puts the ascendant in the opposite sign (the descendant).
//!
//! ## Heuristic mode
//!
//! [`resolve_ascendant_heuristic`] approximates the rising sign from the observation table:
//! the body whose azimuth is closest to due east (90°) gives its constellation's sign.
//! It only yields a whole sign and depends on which bodies happen to be tracked.
use hifitime::Epoch;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{normalize_degrees, Degree, Hour, JulianDay, DUE_EAST, HOURS_TO_DEGREES, MJD};
use crate::constellations::map_constellation_to_sign;
use crate::earth_orientation::mean_obliquity;
use crate::observations::CelestialBodyObservation;
use crate::observer::ObserverContext;
use crate::starsign_errors::StarsignError;
use crate::time::{epoch_to_jd, gast, gmst, jd_to_mjd, local_sidereal_time};
use crate::zodiac::ZodiacPosition;

/// Which Greenwich sidereal time feeds the local sidereal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiderealTimeModel {
    /// GMST plus the equation of the equinoxes.
    #[default]
    Apparent,
    /// GMST only.
    Mean,
}

/// Sidereal quantities of an observer at an instant.
///
/// Units
/// -----
/// * `julian_day`, `mjd`: days (UT).
/// * `gst_hours`, `lst_hours`: hours in `[0, 24)`.
/// * `ramc`, `obliquity`, `latitude`: degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealFrame {
    pub julian_day: JulianDay,
    pub mjd: MJD,
    pub gst_hours: Hour,
    pub lst_hours: Hour,
    pub ramc: Degree,
    pub obliquity: Degree,
    pub latitude: Degree,
}

impl SiderealFrame {
    /// Compute the sidereal frame of an observer.
    ///
    /// Arguments
    /// -----------------
    /// * `observer`: validated location and instant.
    /// * `model`: mean or apparent Greenwich sidereal time.
    ///
    /// Return
    /// ----------
    /// * The frame, or [`StarsignError::InvalidGeometry`] if any derived value is not finite.
    pub fn at(observer: &ObserverContext, model: SiderealTimeModel) -> Result<Self, StarsignError> {
        Self::from_instant(observer.instant(), observer.latitude(), observer.longitude(), model)
    }

    fn from_instant(
        instant: Epoch,
        latitude: Degree,
        longitude: Degree,
        model: SiderealTimeModel,
    ) -> Result<Self, StarsignError> {
        let julian_day = epoch_to_jd(&instant);
        let mjd = jd_to_mjd(julian_day);

        let greenwich = match model {
            SiderealTimeModel::Apparent => gast(mjd),
            SiderealTimeModel::Mean => gmst(mjd),
        };
        let gst_hours = local_sidereal_time(greenwich, 0.0);
        let lst_hours = local_sidereal_time(greenwich, longitude);

        let frame = SiderealFrame {
            julian_day,
            mjd,
            gst_hours,
            lst_hours,
            ramc: lst_hours * HOURS_TO_DEGREES,
            obliquity: mean_obliquity(mjd),
            latitude,
        };

        if ![frame.julian_day, frame.lst_hours, frame.ramc, frame.obliquity]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(StarsignError::InvalidGeometry(format!(
                "non-finite sidereal frame {frame:?}"
            )));
        }

        debug!(
            "Sidereal frame: JD {:.6}, LST {:.6} h, RAMC {:.6}°, ε {:.6}°",
            frame.julian_day, frame.lst_hours, frame.ramc, frame.obliquity
        );
        Ok(frame)
    }

    /// Ecliptic longitude of the ascendant for this frame, see [`ascendant_longitude`].
    pub fn ascendant(&self) -> Result<Degree, StarsignError> {
        ascendant_longitude(self.ramc, self.obliquity, self.latitude)
    }
}

/// Principal value of the ascendant formula, normalized into `[0, 360)` but **without**
/// the quadrant correction. Returns NaN when numerator and denominator both vanish.
pub fn ascendant_principal_value(ramc: Degree, obliquity: Degree, latitude: Degree) -> Degree {
    let (num, den) = ascendant_terms(ramc, obliquity, latitude);
    normalize_degrees((num / den).atan().to_degrees())
}

fn ascendant_terms(ramc: Degree, obliquity: Degree, latitude: Degree) -> (f64, f64) {
    let ramc = ramc.to_radians();
    let eps = obliquity.to_radians();
    let phi = latitude.to_radians();

    let num = ramc.cos();
    let den = -(ramc.sin() * eps.cos() + phi.tan() * eps.sin());
    (num, den)
}

/// Ecliptic longitude of the ascendant.
///
/// Arguments
/// -----------------
/// * `ramc`: right ascension of the meridian, degrees.
/// * `obliquity`: obliquity of the ecliptic ε, degrees.
/// * `latitude`: geographic latitude φ, degrees.
///
/// Return
/// ----------
/// * λ in `[0, 360)`, with 180° added when the denominator of the formula is negative
///   (including `-0.0`).
///
/// Errors
/// ----------
/// * [`StarsignError::InvalidGeometry`] for non-finite inputs, or when numerator and
///   denominator both vanish (the ecliptic lies in the horizon, only possible on the
///   polar circles).
///
/// Examples
/// -----------------
/// ```rust
/// use starsign::ascendant::ascendant_longitude;
///
/// // meridian at the summer solstice point: Libra rises in Vancouver
/// let asc = ascendant_longitude(90.0, 23.44, 49.2827)?;
/// assert!((asc - 180.0).abs() < 1e-9);
/// # Ok::<(), starsign::starsign_errors::StarsignError>(())
/// ```
pub fn ascendant_longitude(
    ramc: Degree,
    obliquity: Degree,
    latitude: Degree,
) -> Result<Degree, StarsignError> {
    if !(ramc.is_finite() && obliquity.is_finite() && latitude.is_finite()) {
        return Err(StarsignError::InvalidGeometry(format!(
            "non-finite ascendant input (RAMC {ramc}, ε {obliquity}, φ {latitude})"
        )));
    }

    let (num, den) = ascendant_terms(ramc, obliquity, latitude);
    if num == 0.0 && den == 0.0 {
        return Err(StarsignError::InvalidGeometry(format!(
            "ascendant undefined for RAMC {ramc}, ε {obliquity}, φ {latitude}"
        )));
    }

    // atan2 places the angle in the half-plane of the denominator, which is the
    // +180° correction, and handles a signed zero denominator.
    let lambda = num.atan2(den).to_degrees();
    if !lambda.is_finite() {
        return Err(StarsignError::InvalidGeometry(format!(
            "ascendant undefined for RAMC {ramc}, ε {obliquity}, φ {latitude}"
        )));
    }
    Ok(normalize_degrees(lambda))
}

/// Rising sign and degree of an observer, using apparent sidereal time.
///
/// Return
/// ----------
/// * The ascendant as a [`ZodiacPosition`].
///
/// See also
/// ------------
/// * [`resolve_ascendant_with`] – choose the sidereal time model.
/// * [`resolve_ascendant_heuristic`] – azimuth-based approximation.
pub fn resolve_ascendant(observer: &ObserverContext) -> Result<ZodiacPosition, StarsignError> {
    resolve_ascendant_with(observer, SiderealTimeModel::Apparent)
}

/// Rising sign and degree of an observer with an explicit sidereal time model.
pub fn resolve_ascendant_with(
    observer: &ObserverContext,
    model: SiderealTimeModel,
) -> Result<ZodiacPosition, StarsignError> {
    let frame = SiderealFrame::at(observer, model)?;
    let longitude = frame.ascendant()?;
    let position = ZodiacPosition::from_longitude(longitude);

    debug!("Ascendant λ = {longitude:.6}° ({position})");
    Ok(position)
}

/// Approximate the rising sign from the body closest to due east.
///
/// Rules
/// -----
/// 1. Pick the observation whose azimuth is closest to 90°; on ties the first one wins.
/// 2. Map its constellation to a sign.
/// 3. Within `tolerance` degrees of due east (strictly) the mapped sign is returned.
/// 4. Outside it, a body north of east (azimuth < 90°) has not risen yet: the previous
///    sign is returned. A body south of east keeps the mapped sign.
///
/// The result is whole-sign: `degree_within_sign` is always 0.
///
/// Errors
/// ----------
/// * [`StarsignError::EmptyObservationSet`] for an empty slice.
/// * [`StarsignError::InvalidGeometry`] if any azimuth is not finite.
/// * [`StarsignError::InvalidSettings`] if `tolerance` is not a positive finite angle.
/// * [`StarsignError::UnmappedConstellation`] from the constellation lookup.
pub fn resolve_ascendant_heuristic(
    observations: &[CelestialBodyObservation],
    tolerance: Degree,
) -> Result<ZodiacPosition, StarsignError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(StarsignError::InvalidSettings(format!(
            "heuristic tolerance must be a positive angle, got {tolerance}"
        )));
    }

    if let Some(bad) = observations
        .iter()
        .find(|obs| !obs.horizontal.azimuth_degrees.is_finite())
    {
        return Err(StarsignError::InvalidGeometry(format!(
            "azimuth of {} is not finite",
            bad.body_id
        )));
    }

    let closest = observations
        .iter()
        .min_by(|a, b| {
            let da = (a.horizontal.azimuth_degrees - DUE_EAST).abs();
            let db = (b.horizontal.azimuth_degrees - DUE_EAST).abs();
            da.total_cmp(&db)
        })
        .ok_or(StarsignError::EmptyObservationSet)?;

    let azimuth = closest.horizontal.azimuth_degrees;
    let mapped = map_constellation_to_sign(closest.constellation_label())?;

    let sign = if (azimuth - DUE_EAST).abs() < tolerance {
        mapped
    } else if azimuth < DUE_EAST {
        warn!(
            "Closest body to the east, {} at azimuth {azimuth:.2}°, is outside the {tolerance}° window; using {} instead of {mapped}",
            closest.body_id,
            mapped.previous()
        );
        mapped.previous()
    } else {
        warn!(
            "Closest body to the east, {} at azimuth {azimuth:.2}°, is outside the {tolerance}° window",
            closest.body_id
        );
        mapped
    };

    debug!("Heuristic ascendant from {}: {sign}", closest.body_id);
    Ok(ZodiacPosition::whole_sign(sign))
}
