use crate::{
    constants::{ArcSec, Degree, Radian, RADEG, RADSEC, MJD},
    time::centuries_since_j2000,
};

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// This function returns the mean obliquity angle ε, defined as the angle between
/// the Earth's equator and the ecliptic plane, using the standard IAU 1976 polynomial model.
/// The result is expressed in radians and is valid for dates within a few millennia
/// of the J2000 epoch.
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// The obliquity ε is computed as a cubic polynomial in Julian centuries since J2000:
///
/// ```text
/// ε(t) = ε₀ + ε₁·T + ε₂·T² + ε₃·T³
/// ```
/// where `T = (tjm - T2000) / 36525.0` and the coefficients are in arcseconds,
/// evaluated with Horner's method.
pub fn obleq(tjm: MJD) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = centuries_since_j2000(tjm);

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Mean obliquity of the ecliptic in degrees, see [`obleq`].
pub fn mean_obliquity(tjm: MJD) -> Degree {
    obleq(tjm).to_degrees()
}

/// Nutation in longitude and obliquity, truncated IAU 1980 series.
///
/// Only the four leading terms are kept: the lunar node Ω, twice the mean longitude
/// of the Sun L and of the Moon L', and 2Ω. The truncation error is about 0.5″ in Δψ
/// and 0.1″ in Δε (Meeus ch. 22), far below what a zodiac degree needs.
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in **arcseconds**.
///
/// # See also
/// * [`equequ`] – uses Δψ for apparent sidereal time
pub fn nutation(tjm: MJD) -> (ArcSec, ArcSec) {
    let t = centuries_since_j2000(tjm);

    // Fundamental arguments, degrees
    let node = 125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450000.0;
    let sun = 280.4665 + 36000.7698 * t;
    let moon = 218.3165 + 481267.8813 * t;

    let om = node * RADEG;
    let l2 = 2.0 * sun * RADEG;
    let lp2 = 2.0 * moon * RADEG;

    // (sin coefficient for Δψ, cos coefficient for Δε, argument)
    let terms = [
        (-17.20, 9.20, om),
        (-1.32, 0.57, l2),
        (-0.23, 0.10, lp2),
        (0.21, -0.09, 2.0 * om),
    ];

    terms
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), (s, c, arg)| {
            (dpsi + s * arg.sin(), deps + c * arg.cos())
        })
}

/// Compute the equation of the equinoxes (nutation correction) in radians.
///
/// This term accounts for the small difference between apparent sidereal time
/// and mean sidereal time due to the nutation of Earth's rotation axis:
///
/// ```text
/// Eq_eq = Δψ * cos(ε)
/// ```
///
/// # See also
/// * [`obleq`] – mean obliquity of the ecliptic.
/// * [`nutation`] – Δψ and Δε.
pub fn equequ(tjm: MJD) -> Radian {
    let oblm = obleq(tjm);
    let (dpsi, _deps) = nutation(tjm);

    RADSEC * dpsi * oblm.cos()
}
