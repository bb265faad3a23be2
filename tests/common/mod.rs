#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use starsign::observations::provider::EphemerisPayload;
use starsign::observations::CelestialBodyObservation;
use starsign::observer::{GeoLocation, ObserverContext};
use starsign::zodiac::{ZodiacPosition, ZodiacSign};

pub const VANCOUVER: GeoLocation = GeoLocation {
    latitude: 49.2827,
    longitude: -123.1207,
    elevation_meters: 70.0,
};

pub const GREENWICH: GeoLocation = GeoLocation {
    latitude: 51.4769,
    longitude: -0.0005,
    elevation_meters: 46.0,
};

pub fn load_fixture() -> EphemerisPayload {
    let body = std::fs::read_to_string("tests/data/positions.json")
        .expect("tests/data/positions.json should be readable");
    EphemerisPayload::from_json(&body).expect("fixture should decode")
}

pub fn fixture_observations() -> Vec<CelestialBodyObservation> {
    load_fixture()
        .observations()
        .expect("fixture rows should be well formed")
}

/// Vancouver, 1990-07-15 14:30 PDT.
pub fn vancouver_1990() -> ObserverContext {
    ObserverContext::from_local_clock(VANCOUVER, "1990-07-15", "14:30", -420)
        .expect("valid observer")
}

pub fn body_at_azimuth(id: &str, azimuth: f64, constellation: &str) -> CelestialBodyObservation {
    CelestialBodyObservation::new(id, 0.0, 0.0, azimuth, 10.0, constellation)
}

pub fn assert_position_close(actual: &ZodiacPosition, sign: ZodiacSign, degree: f64, epsilon: f64) {
    assert_eq!(actual.sign, sign, "expected {sign}, got {actual}");
    assert_abs_diff_eq!(actual.degree_within_sign, degree, epsilon = epsilon);
}
