//! Resolve ephemeris positions into astrological ones: Sun and Moon signs from right
//! ascension, constellation labels to zodiac signs, and the ascendant from sidereal time.
pub mod ascendant;
pub mod constants;
pub mod constellations;
pub mod conversion;
pub mod earth_orientation;
pub mod observations;
pub mod observer;
pub mod ref_system;
pub mod resolver;
pub mod settings;
pub mod starsign_errors;
pub mod time;
pub mod zodiac;
