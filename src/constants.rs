//! # Constants and type definitions for starsign
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **type aliases** shared by the sidereal-time, obliquity and zodiac computations.
//!
//! ## Overview
//!
//! - Epochs and Julian Day offsets (J2000, MJD)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, hours ↔ degrees)
//! - Zodiac geometry (twelve signs of 30°)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours of right ascension or sidereal time → degrees
pub const HOURS_TO_DEGREES: f64 = 15.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Julian Day of J2000.0
pub const J2000_JD: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

// -------------------------------------------------------------------------------------------------
// Zodiac geometry
// -------------------------------------------------------------------------------------------------

/// Width of one zodiac sign along the ecliptic, in degrees
pub const SIGN_WIDTH: Degree = 30.0;

/// Number of signs in the zodiac
pub const SIGN_COUNT: usize = 12;

/// Azimuth of due east on the horizon, in degrees
pub const DUE_EAST: Degree = 90.0;

/// Default tolerance around due east for the heuristic ascendant, in degrees
pub const DEFAULT_HEURISTIC_TOLERANCE: Degree = 5.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or time in hours
pub type Hour = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Day (days)
pub type JulianDay = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Reduce an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can return exactly `360.0` for tiny negative inputs because of rounding;
/// that value is folded back to `0.0`.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let reduced = angle.rem_euclid(360.0);
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}
