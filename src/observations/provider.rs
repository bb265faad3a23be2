//! # Ephemeris provider payload
//!
//! Decoding of the JSON body returned by the astronomy positions service. The crate does
//! not talk HTTP; callers hand the raw body to [`EphemerisPayload::from_json`].
//!
//! ## Payload shape
//!
//! ```text
//! { "data"?: { "dates": {..}, "observer": { "location": {..} },
//!              "table": { "header": [..], "rows": [ { "entry": {..}, "cells": [ {..} ] } ] } } }
//! ```
//!
//! * The body may or may not be wrapped in a top-level `data` object.
//! * Coordinates arrive as **strings** (`"13.7242"`); they are parsed when observations
//!   are extracted, and a non-numeric value is reported with the offending field name.
//! * Only the first cell of each row is used: requests cover a single instant.
use serde::Deserialize;
use serde_json::Value;

use crate::conversion::parse_numeric_field;
use crate::observations::{
    CelestialBodyObservation, Constellation, EquatorialCoordinates, HorizontalCoordinates,
};
use crate::observer::GeoLocation;
use crate::starsign_errors::StarsignError;

/// Decoded provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct EphemerisPayload {
    pub dates: Option<DateRange>,
    pub observer: Option<ObserverBlock>,
    pub table: Option<PositionTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObserverBlock {
    pub location: LocationBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationBlock {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub elevation: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionTable {
    #[serde(default)]
    pub header: Vec<String>,
    pub rows: Vec<BodyRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyRow {
    pub entry: Entry,
    #[serde(default)]
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyCell {
    pub date: Option<String>,
    pub id: String,
    pub name: String,
    pub distance: Option<Distance>,
    pub position: Position,
    #[serde(rename = "extraInfo")]
    pub extra_info: Option<ExtraInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Distance {
    #[serde(rename = "fromEarth")]
    pub from_earth: DistanceFromEarth,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceFromEarth {
    pub au: String,
    pub km: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub horizontal: Horizontal,
    pub equatorial: Equatorial,
    pub constellation: ConstellationBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Horizontal {
    pub altitude: DegreesField,
    pub azimuth: DegreesField,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Equatorial {
    #[serde(rename = "rightAscension")]
    pub right_ascension: HoursField,
    pub declination: DegreesField,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DegreesField {
    pub degrees: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoursField {
    pub hours: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstellationBlock {
    pub id: String,
    pub short: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtraInfo {
    pub magnitude: Option<f64>,
    pub elongation: Option<f64>,
}

impl EphemerisPayload {
    /// Decode a provider response body.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: the raw JSON text, wrapped in `{"data": ...}` or not.
    ///
    /// Return
    /// ----------
    /// * The decoded payload, or [`StarsignError::PayloadDecoding`] on JSON syntax or
    ///   structure errors, inside or outside the envelope.
    /// * [`StarsignError::MalformedPayload`] when the object carries none of the payload
    ///   blocks.
    pub fn from_json(body: &str) -> Result<EphemerisPayload, StarsignError> {
        let mut value: Value = serde_json::from_str(body)?;
        let inner = match value.get_mut("data") {
            Some(data) => data.take(),
            None => value,
        };

        let payload: EphemerisPayload = serde_json::from_value(inner)?;
        if payload.dates.is_none() && payload.observer.is_none() && payload.table.is_none() {
            return Err(StarsignError::MalformedPayload(
                "no dates, observer or table block".into(),
            ));
        }
        Ok(payload)
    }

    /// Extract one observation per table row, in row order.
    ///
    /// Errors
    /// ----------
    /// * [`StarsignError::MalformedPayload`] when the table is missing or a row has no cell.
    /// * [`StarsignError::InvalidNumericField`] when a coordinate string is not a number.
    pub fn observations(&self) -> Result<Vec<CelestialBodyObservation>, StarsignError> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| StarsignError::MalformedPayload("missing position table".into()))?;

        table.rows.iter().map(BodyRow::to_observation).collect()
    }

    /// Observer location echoed by the provider, if present.
    pub fn observer_location(&self) -> Option<GeoLocation> {
        self.observer.as_ref().map(|block| GeoLocation {
            latitude: block.location.latitude,
            longitude: block.location.longitude,
            elevation_meters: block.location.elevation,
        })
    }
}

impl BodyRow {
    fn to_observation(&self) -> Result<CelestialBodyObservation, StarsignError> {
        let cell = self.cells.first().ok_or_else(|| {
            StarsignError::MalformedPayload(format!("row {:?} has no cells", self.entry.id))
        })?;
        let position = &cell.position;

        let distance_au = cell
            .distance
            .as_ref()
            .map(|d| parse_numeric_field("distance.fromEarth.au", &d.from_earth.au))
            .transpose()?;

        Ok(CelestialBodyObservation {
            body_id: self.entry.id.clone(),
            name: self.entry.name.clone(),
            equatorial: EquatorialCoordinates {
                right_ascension_hours: parse_numeric_field(
                    "rightAscension.hours",
                    &position.equatorial.right_ascension.hours,
                )?,
                declination_degrees: parse_numeric_field(
                    "declination.degrees",
                    &position.equatorial.declination.degrees,
                )?,
            },
            horizontal: HorizontalCoordinates {
                azimuth_degrees: parse_numeric_field(
                    "azimuth.degrees",
                    &position.horizontal.azimuth.degrees,
                )?,
                altitude_degrees: parse_numeric_field(
                    "altitude.degrees",
                    &position.horizontal.altitude.degrees,
                )?,
            },
            constellation: Constellation {
                id: position.constellation.id.clone(),
                short: position.constellation.short.clone(),
                name: position.constellation.name.clone(),
            },
            distance_au,
            magnitude: cell.extra_info.as_ref().and_then(|extra| extra.magnitude),
        })
    }
}

#[cfg(test)]
mod provider_test {
    use super::*;

    const SUN_ROW: &str = r#"{
        "entry": { "id": "sun", "name": "Sun" },
        "cells": [ {
            "date": "1990-07-15T21:30:00.000Z", "id": "sun", "name": "Sun",
            "distance": { "fromEarth": { "au": "1.0163", "km": "152038014" } },
            "position": {
                "horizontal": { "altitude": { "degrees": "51.2", "string": "" },
                                "azimuth": { "degrees": "183.4", "string": "" } },
                "equatorial": { "rightAscension": { "hours": "7.6291", "string": "" },
                                "declination": { "degrees": "21.5", "string": "" } },
                "constellation": { "id": "gem", "short": "Gem", "name": "Gemini" }
            },
            "extraInfo": { "elongation": 0.0, "magnitude": -26.7 }
        } ]
    }"#;

    fn body(rows: &str) -> String {
        format!(
            r#"{{ "dates": {{ "from": "1990-07-15", "to": "1990-07-15" }},
                 "observer": {{ "location": {{ "longitude": -123.1207, "latitude": 49.2827, "elevation": 70 }} }},
                 "table": {{ "header": ["1990-07-15"], "rows": [{rows}] }} }}"#
        )
    }

    #[test]
    fn test_bare_payload() {
        let payload = EphemerisPayload::from_json(&body(SUN_ROW)).unwrap();
        let obs = payload.observations().unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].body_id, "sun");
        assert_eq!(obs[0].name, "Sun");
        assert_eq!(obs[0].equatorial.right_ascension_hours, 7.6291);
        assert_eq!(obs[0].horizontal.azimuth_degrees, 183.4);
        assert_eq!(obs[0].constellation.short, "Gem");
        assert_eq!(obs[0].distance_au, Some(1.0163));
        assert_eq!(obs[0].magnitude, Some(-26.7));

        let location = payload.observer_location().unwrap();
        assert_eq!(location.latitude, 49.2827);
        assert_eq!(location.elevation_meters, 70.0);
    }

    #[test]
    fn test_wrapped_payload() {
        let wrapped = format!(r#"{{ "data": {} }}"#, body(SUN_ROW));
        let payload = EphemerisPayload::from_json(&wrapped).unwrap();
        assert_eq!(payload.observations().unwrap()[0].body_id, "sun");
        assert_eq!(payload.dates.unwrap().from, "1990-07-15");
    }

    #[test]
    fn test_wrapped_payload_keeps_decode_error() {
        let broken = SUN_ROW.replace(r#""position": {"#, r#""placement": {"#);
        let wrapped = format!(r#"{{ "data": {} }}"#, body(&broken));
        assert!(matches!(
            EphemerisPayload::from_json(&wrapped),
            Err(StarsignError::PayloadDecoding(_))
        ));
        assert!(matches!(
            EphemerisPayload::from_json(&body(&broken)),
            Err(StarsignError::PayloadDecoding(_))
        ));
    }

    #[test]
    fn test_unrelated_object_is_rejected() {
        assert!(matches!(
            EphemerisPayload::from_json(r#"{ "hello": 1 }"#),
            Err(StarsignError::MalformedPayload(_))
        ));
        assert!(matches!(
            EphemerisPayload::from_json(r#"{ "data": 3 }"#),
            Err(StarsignError::PayloadDecoding(_))
        ));
        assert!(matches!(
            EphemerisPayload::from_json("[1, 2]"),
            Err(StarsignError::PayloadDecoding(_))
        ));
    }

    #[test]
    fn test_non_numeric_field() {
        let bad = SUN_ROW.replace(r#""hours": "7.6291""#, r#""hours": "seven""#);
        let payload = EphemerisPayload::from_json(&body(&bad)).unwrap();
        assert_eq!(
            payload.observations(),
            Err(StarsignError::InvalidNumericField {
                field: "rightAscension.hours",
                value: "seven".into()
            })
        );
    }

    #[test]
    fn test_row_without_cells() {
        let row = r#"{ "entry": { "id": "mars", "name": "Mars" }, "cells": [] }"#;
        let payload = EphemerisPayload::from_json(&body(row)).unwrap();
        assert!(matches!(
            payload.observations(),
            Err(StarsignError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_missing_table_and_bad_json() {
        let payload = EphemerisPayload::from_json(r#"{ "dates": { "from": "a", "to": "b" } }"#)
            .unwrap();
        assert!(matches!(
            payload.observations(),
            Err(StarsignError::MalformedPayload(_))
        ));
        assert!(payload.observer_location().is_none());

        assert!(matches!(
            EphemerisPayload::from_json("{ not json"),
            Err(StarsignError::PayloadDecoding(_))
        ));
    }
}
