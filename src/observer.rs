//! # Observer context
//!
//! Where and when a chart is cast. An [`ObserverContext`] is built once per request from a
//! validated [`GeoLocation`] and an absolute instant, and is never mutated afterwards.
//!
//! ## Conventions
//!
//! - Latitude: degrees, north positive, in `[-90, 90]`.
//! - Longitude: degrees, **east positive**, in `[-180, 180]`.
//! - Elevation: meters above sea level (carried along, unused by the zodiac math).
//! - Instant: a [`hifitime::Epoch`]; local clock inputs are converted with
//!   `UTC = local − utc_offset`.
use std::sync::LazyLock;

use hifitime::{Epoch, Unit};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Meter};
use crate::starsign_errors::StarsignError;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date pattern"));

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid time pattern"));

/// Largest UTC offset in use (UTC+14, Line Islands), in minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: Degree,
    pub longitude: Degree,
    #[serde(default)]
    pub elevation_meters: Meter,
}

impl GeoLocation {
    /// Build a location at sea level.
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        GeoLocation {
            latitude,
            longitude,
            elevation_meters: 0.0,
        }
    }

    pub fn with_elevation(mut self, elevation_meters: Meter) -> Self {
        self.elevation_meters = elevation_meters;
        self
    }

    /// Check that every coordinate is finite and in range.
    ///
    /// Errors
    /// ----------
    /// * [`StarsignError::InvalidGeometry`] naming the offending coordinate.
    pub fn validate(&self) -> Result<(), StarsignError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(StarsignError::InvalidGeometry(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(StarsignError::InvalidGeometry(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if !self.elevation_meters.is_finite() {
            return Err(StarsignError::InvalidGeometry(format!(
                "elevation {} is not finite",
                self.elevation_meters
            )));
        }
        Ok(())
    }
}

/// Location and absolute instant of a chart request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    location: GeoLocation,
    instant: Epoch,
}

impl ObserverContext {
    /// Build a context from a location and an absolute instant.
    ///
    /// Errors
    /// ----------
    /// * [`StarsignError::InvalidGeometry`] if the location fails [`GeoLocation::validate`].
    pub fn new(location: GeoLocation, instant: Epoch) -> Result<Self, StarsignError> {
        location.validate()?;
        Ok(ObserverContext { location, instant })
    }

    /// Build a context from a calendar date and a local wall-clock time.
    ///
    /// Arguments
    /// -----------------
    /// * `location`: observer position.
    /// * `date`: `"YYYY-MM-DD"`, must be a real Gregorian date.
    /// * `time`: `"HH:mm"` on a 24-hour clock.
    /// * `utc_offset_minutes`: offset of the local clock from UTC, e.g. `-420` for PDT.
    ///
    /// Return
    /// ----------
    /// * The context at `UTC = local − offset`.
    ///
    /// Examples
    /// -----------------
    /// ```rust
    /// use starsign::observer::{GeoLocation, ObserverContext};
    ///
    /// let vancouver = GeoLocation::new(49.2827, -123.1207);
    /// let ctx = ObserverContext::from_local_clock(vancouver, "1990-07-15", "14:30", -420)?;
    /// assert_eq!(ctx.instant().to_gregorian_utc(), (1990, 7, 15, 21, 30, 0, 0));
    /// # Ok::<(), starsign::starsign_errors::StarsignError>(())
    /// ```
    pub fn from_local_clock(
        location: GeoLocation,
        date: &str,
        time: &str,
        utc_offset_minutes: i32,
    ) -> Result<Self, StarsignError> {
        let (year, month, day) = parse_date(date)?;
        let (hour, minute) = parse_time(time)?;

        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(StarsignError::InvalidTime(format!(
                "UTC offset of {utc_offset_minutes} minutes"
            )));
        }

        let local = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, 0, 0)?;
        let instant = local - Unit::Minute * i64::from(utc_offset_minutes);

        ObserverContext::new(location, instant)
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn instant(&self) -> Epoch {
        self.instant
    }

    pub fn latitude(&self) -> Degree {
        self.location.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.location.longitude
    }
}

fn parse_date(date: &str) -> Result<(i32, u8, u8), StarsignError> {
    let invalid = || StarsignError::InvalidDate(date.to_string());
    let caps = DATE_REGEX.captures(date.trim()).ok_or_else(invalid)?;

    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u8 = caps[2].parse().map_err(|_| invalid())?;
    let day: u8 = caps[3].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return Err(invalid());
    }
    Ok((year, month, day))
}

fn parse_time(time: &str) -> Result<(u8, u8), StarsignError> {
    let invalid = || StarsignError::InvalidTime(time.to_string());
    let caps = TIME_REGEX.captures(time.trim()).ok_or_else(invalid)?;

    let hour: u8 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u8 = caps[2].parse().map_err(|_| invalid())?;
    Ok((hour, minute))
}

fn days_in_month(year: i32, month: u8) -> u8 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
