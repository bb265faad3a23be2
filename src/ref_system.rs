use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{normalize_degrees, Degree, Hour, HOURS_TO_DEGREES};

/// Construct a rotation matrix around one of the principal axes (X, Y, or Z).
///
/// # Arguments
///
/// * `alpha` – Rotation angle in **radians**. Positive values rotate the vector
///   counter-clockwise when looking along the axis toward the origin.
/// * `k` – Index of the rotation axis:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: f64, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Unit vector pointing at right ascension / declination, in the equatorial frame.
pub fn radec_to_cartesian(right_ascension: Hour, declination: Degree) -> Vector3<f64> {
    let alpha = (right_ascension * HOURS_TO_DEGREES).to_radians();
    let delta = declination.to_radians();

    Vector3::new(
        alpha.cos() * delta.cos(),
        alpha.sin() * delta.cos(),
        delta.sin(),
    )
}

/// Ecliptic longitude, in degrees `[0, 360)`, of a direction given in equatorial coordinates.
///
/// The equatorial vector is rotated about the X axis (the equinox direction shared by both
/// frames) by `−ε`, which yields
///
/// ```text
/// λ = atan2(sin α cos δ cos ε + sin δ sin ε, cos α cos δ)
/// ```
///
/// Arguments
/// ---------
/// * `right_ascension`: α in hours.
/// * `declination`: δ in degrees.
/// * `obliquity`: ε in degrees.
pub fn equatorial_to_ecliptic_longitude(
    right_ascension: Hour,
    declination: Degree,
    obliquity: Degree,
) -> Degree {
    let equatorial = radec_to_cartesian(right_ascension, declination);
    let ecliptic = rotmt(-obliquity.to_radians(), 0) * equatorial;

    normalize_degrees(ecliptic.y.atan2(ecliptic.x).to_degrees())
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotmt_orthonormal() {
        let rot = rotmt(0.409, 0);
        assert_abs_diff_eq!(rot * rot.transpose(), Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_ecliptic_longitude_on_equator_and_equinoxes() {
        // the equinoxes and solstice points map onto the cardinal ecliptic longitudes
        assert_abs_diff_eq!(equatorial_to_ecliptic_longitude(0.0, 0.0, 23.44), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(
            equatorial_to_ecliptic_longitude(12.0, 0.0, 23.44),
            180.0,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            equatorial_to_ecliptic_longitude(6.0, 23.44, 23.44),
            90.0,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            equatorial_to_ecliptic_longitude(18.0, -23.44, 23.44),
            270.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_ecliptic_longitude_differs_from_ra_approximation() {
        // Sun near the summer solstice side of Gemini
        let lambda = equatorial_to_ecliptic_longitude(7.0, 22.5, 23.44);
        assert_abs_diff_eq!(lambda, 103.83457371082774, epsilon = 1e-9);

        let lambda = equatorial_to_ecliptic_longitude(19.5, -21.8, 23.44);
        assert_abs_diff_eq!(lambda, 290.81282407992995, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_obliquity_is_identity() {
        for hours in [0.5, 3.0, 11.9, 17.25, 23.5] {
            assert_abs_diff_eq!(
                equatorial_to_ecliptic_longitude(hours, 10.0, 0.0),
                hours * 15.0,
                epsilon = 1e-9
            );
        }
    }
}
