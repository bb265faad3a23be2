//! # Calendar, Julian Day and sidereal time
//!
//! Conversions from an absolute instant ([`hifitime::Epoch`]) to the Julian Day used by the
//! obliquity and nutation polynomials, and the sidereal time scales needed to place the
//! observer's meridian on the celestial sphere.
//!
//! UT is approximated by UTC throughout: the |UT1 − UTC| < 0.9 s difference moves the
//! ascendant by well under a minute of arc.
use hifitime::Epoch;

use crate::constants::{
    Degree, Hour, JulianDay, Radian, DAYS_PER_CENTURY, DPI, JDTOMJD, MJD, SECONDS_PER_DAY, T2000,
};
use crate::earth_orientation::equequ;

/// Julian Day of a proleptic Gregorian calendar date and clock time (UT).
///
/// Standard algorithm from Meeus, *Astronomical Algorithms* ch. 7, with the Gregorian
/// correction applied to every date (proleptic calendar), so dates before 1582-10-15 are
/// **not** interpreted in the Julian calendar.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`: Gregorian calendar date (month 1..=12).
/// * `hour`, `minute`, `second`, `nanos`: clock time in UT.
///
/// Return
/// ------
/// * The Julian Day, e.g. `2451545.0` for 2000-01-01 12:00.
pub fn calendar_to_jd(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanos: u32,
) -> JulianDay {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let seconds = second as f64 + nanos as f64 * 1e-9;
    let day_fraction = (hour as f64 + minute as f64 / 60.0 + seconds / 3600.0) / 24.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + day_fraction + b
        - 1524.5
}

/// Julian Day (UT) of an epoch, from its UTC Gregorian breakdown.
pub fn epoch_to_jd(epoch: &Epoch) -> JulianDay {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    calendar_to_jd(year, month, day, hour, minute, second, nanos)
}

/// Transformation from julian date (JD) in modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDay) -> MJD {
    jd - JDTOMJD
}

/// Julian centuries elapsed since J2000.0 for a Modified Julian Date.
pub fn centuries_since_j2000(tjm: MJD) -> f64 {
    (tjm - T2000) / DAYS_PER_CENTURY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT time scale).
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT
///    in seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
///
/// # References
/// * IAU 1982, Explanatory Supplement to the Astronomical Almanac (1992).
/// * Meeus, *Astronomical Algorithms*, eq. 12.3.
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h UT (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    // Integer MJD is 0h UT
    let itjm = tjm.floor();
    let t = centuries_since_j2000(itjm);

    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    // Rotation accumulated since 0h, scaled from solar to sidereal rate
    let h = (tjm - itjm) * DPI;

    (gmst0 + h * RAP).rem_euclid(DPI)
}

/// Greenwich Apparent Sidereal Time in radians, `GMST + equation of the equinoxes`.
///
/// # See also
/// * [`gmst`] – mean sidereal time
/// * [`equequ`] – nutation correction
pub fn gast(tjm: MJD) -> Radian {
    (gmst(tjm) + equequ(tjm)).rem_euclid(DPI)
}

/// Local sidereal time in hours from a Greenwich sidereal angle and an east-positive
/// longitude in degrees. Result lies in `[0, 24)`.
pub fn local_sidereal_time(greenwich_sidereal: Radian, longitude: Degree) -> Hour {
    let lst = (greenwich_sidereal + longitude.to_radians()).rem_euclid(DPI);
    let hours = lst.to_degrees() / 15.0;
    if hours >= 24.0 {
        0.0
    } else {
        hours
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::constants::J2000_JD;
    use approx::assert_relative_eq;
    use hifitime::Epoch;

    #[test]
    fn test_calendar_to_jd_reference_dates() {
        // Meeus, Astronomical Algorithms, examples 7.a and table 7.A
        assert_eq!(calendar_to_jd(2000, 1, 1, 12, 0, 0, 0), 2451545.0);
        assert_eq!(calendar_to_jd(1987, 6, 19, 12, 0, 0, 0), 2446966.0);
        assert_eq!(calendar_to_jd(1987, 4, 10, 0, 0, 0, 0), 2446895.5);
        assert_eq!(calendar_to_jd(1600, 1, 1, 0, 0, 0, 0), 2305447.5);
        assert_relative_eq!(
            calendar_to_jd(1957, 10, 4, 19, 26, 24, 0),
            2436116.31,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_calendar_to_jd_january_february() {
        // months 1 and 2 are counted as 13 and 14 of the previous year
        assert_eq!(calendar_to_jd(2021, 1, 1, 0, 0, 0, 0), 2459215.5);
        assert_eq!(calendar_to_jd(2024, 2, 29, 0, 0, 0, 0), 2460369.5);
        assert_eq!(calendar_to_jd(2024, 3, 1, 0, 0, 0, 0), 2460370.5);
    }

    #[test]
    fn test_epoch_to_jd_matches_hifitime() {
        let epochs = [
            Epoch::from_gregorian_utc(2021, 1, 1, 0, 0, 0, 0),
            Epoch::from_gregorian_utc(1990, 7, 15, 21, 30, 0, 0),
            Epoch::from_gregorian_utc(2024, 3, 20, 3, 6, 0, 0),
        ];

        for epoch in epochs {
            assert_relative_eq!(epoch_to_jd(&epoch), epoch.to_jde_utc_days(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_jd_to_mjd() {
        assert_eq!(jd_to_mjd(2459215.5), 59215.0);
        assert_eq!(jd_to_mjd(J2000_JD), T2000);
    }

    #[test]
    fn test_gmst() {
        let tut = 57028.478514610404;
        assert_relative_eq!(gmst(tut), 4.851925725092499, epsilon = 1e-12);

        assert_relative_eq!(gmst(T2000), 4.894961212789145, epsilon = 1e-12);
    }

    #[test]
    fn test_gmst_meeus_examples() {
        // Meeus example 12.a: 1987-04-10 0h UT, GMST = 13h10m46.3668s
        let tjm = jd_to_mjd(2446895.5);
        let hours = gmst(tjm).to_degrees() / 15.0;
        assert_relative_eq!(hours, 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0, epsilon = 1e-7);

        // Meeus example 12.b: 1987-04-10 19h21m UT, GMST = 8h34m57.0896s
        let tjm = jd_to_mjd(calendar_to_jd(1987, 4, 10, 19, 21, 0, 0));
        let hours = gmst(tjm).to_degrees() / 15.0;
        assert_relative_eq!(hours, 8.0 + 34.0 / 60.0 + 57.0896 / 3600.0, epsilon = 1e-7);
    }

    #[test]
    fn test_gast_close_to_meeus_apparent() {
        // Meeus example 12.a apparent time: 13h10m46.1351s. The truncated nutation
        // series is good to a few milliseconds of time.
        let tjm = jd_to_mjd(2446895.5);
        let hours = gast(tjm).to_degrees() / 15.0;
        let expected = 13.0 + 10.0 / 60.0 + 46.1351 / 3600.0;
        assert!((hours - expected).abs() * 3600.0 < 0.01);
    }

    #[test]
    fn test_local_sidereal_time() {
        // west longitudes subtract from the Greenwich value
        let lst = local_sidereal_time(std::f64::consts::PI, -90.0);
        assert_relative_eq!(lst, 6.0, epsilon = 1e-12);

        let lst = local_sidereal_time(0.0, -15.0);
        assert_relative_eq!(lst, 23.0, epsilon = 1e-12);

        for lon in [-180.0, -123.1207, 0.0, 45.0, 180.0] {
            let lst = local_sidereal_time(gmst(T2000), lon);
            assert!((0.0..24.0).contains(&lst));
        }
    }
}
