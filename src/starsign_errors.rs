use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarsignError {
    #[error("Celestial body not found in the observation set: {0}")]
    BodyNotFound(String),

    #[error("No zodiac sign is mapped for constellation: {0}")]
    UnmappedConstellation(String),

    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("The observation set is empty")]
    EmptyObservationSet,

    #[error("Invalid numeric value for field {field}: {value:?}")]
    InvalidNumericField { field: &'static str, value: String },

    #[error("Malformed ephemeris payload: {0}")]
    MalformedPayload(String),

    #[error("Unable to decode ephemeris payload: {0}")]
    PayloadDecoding(#[from] serde_json::Error),

    #[error("Invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),

    #[error("Invalid time, expected HH:mm: {0}")]
    InvalidTime(String),

    #[error("Time conversion error: {0}")]
    TimeConversion(#[from] hifitime::HifitimeError),

    #[error("Invalid resolver settings: {0}")]
    InvalidSettings(String),
}

impl From<toml::de::Error> for StarsignError {
    fn from(err: toml::de::Error) -> Self {
        StarsignError::InvalidSettings(err.message().to_string())
    }
}

impl PartialEq for StarsignError {
    fn eq(&self, other: &Self) -> bool {
        use StarsignError::*;
        match (self, other) {
            (BodyNotFound(a), BodyNotFound(b)) => a == b,
            (UnmappedConstellation(a), UnmappedConstellation(b)) => a == b,
            (UnknownSign(a), UnknownSign(b)) => a == b,
            (InvalidGeometry(a), InvalidGeometry(b)) => a == b,
            (
                InvalidNumericField {
                    field: fa,
                    value: va,
                },
                InvalidNumericField {
                    field: fb,
                    value: vb,
                },
            ) => fa == fb && va == vb,
            (MalformedPayload(a), MalformedPayload(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidTime(a), InvalidTime(b)) => a == b,
            (InvalidSettings(a), InvalidSettings(b)) => a == b,

            // not comparable, same variant is enough
            (PayloadDecoding(_), PayloadDecoding(_)) => true,
            (TimeConversion(_), TimeConversion(_)) => true,

            (EmptyObservationSet, EmptyObservationSet) => true,

            _ => false,
        }
    }
}
