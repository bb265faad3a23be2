mod common;

use approx::assert_abs_diff_eq;
use common::{
    assert_position_close, body_at_azimuth, fixture_observations, vancouver_1990, GREENWICH,
    VANCOUVER,
};
use hifitime::Epoch;
use starsign::ascendant::{resolve_ascendant, resolve_ascendant_with, SiderealFrame, SiderealTimeModel};
use starsign::observer::{GeoLocation, ObserverContext};
use starsign::resolver::{resolve_body_sign, PositionResolver};
use starsign::settings::{AscendantMode, EclipticConversion, ResolverSettings};
use starsign::starsign_errors::StarsignError;
use starsign::zodiac::ZodiacSign;

#[test]
fn test_fixture_chart_rigorous() {
    let observations = fixture_observations();
    let chart = PositionResolver::default()
        .resolve_chart(&vancouver_1990(), &observations)
        .unwrap();

    assert_position_close(&chart.sun, ZodiacSign::Cancer, 24.4365, 1e-9);
    assert_position_close(&chart.moon, ZodiacSign::Libra, 18.2805, 1e-9);
    assert_position_close(&chart.ascendant, ZodiacSign::Scorpio, 0.93389, 1e-4);
}

#[test]
fn test_fixture_chart_heuristic() {
    let observations = fixture_observations();
    let settings = ResolverSettings::from_toml_str(r#"ascendant = "heuristic""#).unwrap();
    let chart = PositionResolver::new(settings)
        .resolve_chart(&vancouver_1990(), &observations)
        .unwrap();

    // mars sits at azimuth 93.2° in Aries
    assert_eq!(chart.ascendant.sign, ZodiacSign::Aries);
    assert_eq!(chart.ascendant.degree_within_sign, 0.0);
    assert_eq!(chart.sun.sign, ZodiacSign::Cancer);
}

#[test]
fn test_fixture_chart_equatorial_conversion() {
    let observations = fixture_observations();
    let settings = ResolverSettings::default().with_ecliptic_conversion(EclipticConversion::Equatorial);
    let chart = PositionResolver::new(settings)
        .resolve_chart(&vancouver_1990(), &observations)
        .unwrap();

    // the exact longitude of the Sun stays in Cancer, nearly two degrees from the RA approximation
    assert_eq!(chart.sun.sign, ZodiacSign::Cancer);
    assert!((chart.sun.degree_within_sign - 24.4365).abs() > 0.5);
    assert_eq!(chart.ascendant.sign, ZodiacSign::Scorpio);
}

#[test]
fn test_missing_body_fails_chart() {
    let observations: Vec<_> = fixture_observations()
        .into_iter()
        .filter(|obs| obs.body_id != "sun")
        .collect();

    assert_eq!(
        PositionResolver::default().resolve_chart(&vancouver_1990(), &observations),
        Err(StarsignError::BodyNotFound("sun".into()))
    );
    assert_eq!(
        resolve_body_sign(&observations, "pluto"),
        Err(StarsignError::BodyNotFound("pluto".into()))
    );
}

#[test]
fn test_heuristic_unmapped_constellation_fails_chart() {
    let mut observations = fixture_observations();
    observations.push(body_at_azimuth("comet", 90.0, "Lynx"));

    let settings = ResolverSettings::default().with_ascendant(AscendantMode::Heuristic);
    assert_eq!(
        PositionResolver::new(settings).resolve_chart(&vancouver_1990(), &observations),
        Err(StarsignError::UnmappedConstellation("Lynx".into()))
    );
}

#[test]
fn test_ascendant_reference_charts() {
    let cases = [
        (GREENWICH, (2024, 3, 20, 3, 6), ZodiacSign::Capricorn, 11.52973497985215),
        (GeoLocation::new(0.0, 0.0), (2000, 1, 1, 12, 0), ZodiacSign::Aries, 11.374002379532865),
        (
            GeoLocation::new(-33.8688, 151.2093),
            (2000, 1, 1, 12, 0),
            ZodiacSign::Virgo,
            2.48777822674802,
        ),
        (
            GeoLocation::new(64.1466, -21.9426),
            (2024, 12, 21, 6, 0),
            ZodiacSign::Scorpio,
            8.72709372095875,
        ),
    ];

    for (location, (y, m, d, h, min), sign, degree) in cases {
        let instant = Epoch::from_gregorian_utc(y, m, d, h, min, 0, 0);
        let observer = ObserverContext::new(location, instant).unwrap();
        let asc = resolve_ascendant(&observer).unwrap();
        assert_position_close(&asc, sign, degree, 1e-6);
    }
}

#[test]
fn test_mean_and_apparent_sidereal_time_agree_closely() {
    let observer = vancouver_1990();
    let apparent = SiderealFrame::at(&observer, SiderealTimeModel::Apparent).unwrap();
    let mean = SiderealFrame::at(&observer, SiderealTimeModel::Mean).unwrap();

    // equation of the equinoxes is at most ~1.2 s of time
    assert!((apparent.lst_hours - mean.lst_hours).abs() * 3600.0 < 1.5);
    assert_eq!(apparent.obliquity, mean.obliquity);

    let asc_mean = resolve_ascendant_with(&observer, SiderealTimeModel::Mean).unwrap();
    assert_position_close(&asc_mean, ZodiacSign::Scorpio, 0.9313101731056, 1e-6);
}

#[test]
fn test_observer_longitude_shifts_ramc() {
    let instant = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
    let greenwich = ObserverContext::new(GeoLocation::new(0.0, 0.0), instant).unwrap();
    let east = ObserverContext::new(GeoLocation::new(0.0, 45.0), instant).unwrap();

    let g = SiderealFrame::at(&greenwich, SiderealTimeModel::Apparent).unwrap();
    let e = SiderealFrame::at(&east, SiderealTimeModel::Apparent).unwrap();
    assert_abs_diff_eq!((e.ramc - g.ramc).rem_euclid(360.0), 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(g.ramc, 280.45704239578185, epsilon = 1e-6);
}

#[test]
fn test_vancouver_local_clock_round_trip() {
    let observer = ObserverContext::from_local_clock(VANCOUVER, "1990-07-15", "14:30", -420).unwrap();
    let utc = ObserverContext::new(VANCOUVER, Epoch::from_gregorian_utc(1990, 7, 15, 21, 30, 0, 0)).unwrap();
    assert_eq!(resolve_ascendant(&observer), resolve_ascendant(&utc));
}
