use crate::constants::{Degree, Hour};
use crate::starsign_errors::StarsignError;

/// Parse a numeric field delivered as a string by the ephemeris provider.
///
/// Arguments
/// ---------------
/// * `field`: name of the payload field, reported back in the error
/// * `value`: the raw string, e.g. `"13.7242"` or `" -4.5 "`
///
/// Return
/// ----------
/// * The parsed value, or [`StarsignError::InvalidNumericField`] when the string is not a
///   finite number.
pub fn parse_numeric_field(field: &'static str, value: &str) -> Result<f64, StarsignError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| StarsignError::InvalidNumericField {
            field,
            value: value.to_string(),
        })?;

    if !parsed.is_finite() {
        return Err(StarsignError::InvalidNumericField {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

/// Split a right ascension in hours into `(HH, MM, SS.s)` with carry.
///
/// Seconds are rounded to `prec` fractional digits; a rounded `60.0` carries into the
/// minutes, and 24h wraps to 0h.
pub fn ra_hours_to_hms(right_ascension: Hour, prec: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(prec as i32);
    let total_seconds = (right_ascension.rem_euclid(24.0) * 3600.0 * scale).round() / scale;

    let mut h = (total_seconds / 3600.0).floor() as u32;
    let mut m = ((total_seconds - h as f64 * 3600.0) / 60.0).floor() as u32;
    let mut s = round_seconds(total_seconds - h as f64 * 3600.0 - m as f64 * 60.0, scale);

    if s >= 60.0 {
        s -= 60.0;
        m += 1;
    }
    if m >= 60 {
        m -= 60;
        h += 1;
    }
    (h % 24, m, s)
}

/// Split an angle in degrees into `(sign, DD, MM, SS.s)` with carry.
pub fn degrees_to_sdms(angle: Degree, prec: usize) -> (char, u32, u32, f64) {
    let sign = if angle < 0.0 { '-' } else { '+' };
    let scale = 10f64.powi(prec as i32);
    let total_seconds = (angle.abs() * 3600.0 * scale).round() / scale;

    let mut d = (total_seconds / 3600.0).floor() as u32;
    let mut m = ((total_seconds - d as f64 * 3600.0) / 60.0).floor() as u32;
    let mut s = round_seconds(total_seconds - d as f64 * 3600.0 - m as f64 * 60.0, scale);

    if s >= 60.0 {
        s -= 60.0;
        m += 1;
    }
    if m >= 60 {
        m -= 60;
        d += 1;
    }
    (sign, d, m, s)
}

/// Seconds snapped back onto the `prec` grid after the hour/minute subtraction, so the
/// carry sees the value that will be printed. Also folds `-0.0` into `0.0`.
fn round_seconds(seconds: f64, scale: f64) -> f64 {
    let s = (seconds * scale).round() / scale;
    if s > 0.0 { s } else { 0.0 }
}

/// `"HHhMMmSS.ss"` rendering of a right ascension in hours.
pub fn format_ra(right_ascension: Hour, prec: usize) -> String {
    let (h, m, s) = ra_hours_to_hms(right_ascension, prec);
    format!("{h:02}h{m:02}m{}s", fmt_seconds(s, prec))
}

/// `"±DD°MM'SS.s\""` rendering of an angle in degrees.
pub fn format_dms(angle: Degree, prec: usize) -> String {
    let (sign, d, m, s) = degrees_to_sdms(angle, prec);
    format!("{sign}{d:02}°{m:02}'{}\"", fmt_seconds(s, prec))
}

/// Seconds with a two-digit integer part, e.g. `"05.30"`.
fn fmt_seconds(seconds: f64, prec: usize) -> String {
    let width = if prec == 0 { 2 } else { prec + 3 };
    format!("{seconds:0width$.prec$}")
}
