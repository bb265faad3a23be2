//! # Constellation → zodiac sign lookup
//!
//! Ephemeris providers report the constellation a body sits in, either by its full IAU
//! name (`"Scorpius"`) or by the three-letter IAU abbreviation (`"Sco"`). This module
//! normalizes both forms into a [`ZodiacSign`].
//!
//! The table covers the twelve zodiacal constellations and the ecliptic-adjacent ones a
//! body near the ecliptic can be reported in, each mapped to the nearest sign:
//!
//! | constellation | abbr. | sign |
//! |---|---|---|
//! | Ophiuchus | Oph | Scorpio |
//! | Serpens | Ser | Scorpio |
//! | Cetus | Cet | Pisces |
//! | Pegasus | Peg | Pisces |
//! | Orion | Ori | Taurus |
//! | Auriga | Aur | Gemini |
//! | Canis Minor | CMi | Cancer |
//! | Hydra | Hya | Leo |
//! | Sextans | Sex | Leo |
//! | Crater | Crt | Virgo |
//! | Corvus | Crv | Virgo |
//! | Aquila | Aql | Capricorn |
//!
//! Abbreviations match case-sensitively (`"CMi"` and `"Cmi"` are not the same key in the
//! IAU list); full names match ASCII case-insensitively. Surrounding whitespace is ignored.
use std::collections::HashMap;
use std::sync::LazyLock;

use log::warn;

use crate::starsign_errors::StarsignError;
use crate::zodiac::ZodiacSign;

/// (full name, IAU abbreviation, sign)
const CONSTELLATION_SIGNS: [(&str, &str, ZodiacSign); 24] = [
    ("Aries", "Ari", ZodiacSign::Aries),
    ("Taurus", "Tau", ZodiacSign::Taurus),
    ("Gemini", "Gem", ZodiacSign::Gemini),
    ("Cancer", "Cnc", ZodiacSign::Cancer),
    ("Leo", "Leo", ZodiacSign::Leo),
    ("Virgo", "Vir", ZodiacSign::Virgo),
    ("Libra", "Lib", ZodiacSign::Libra),
    ("Scorpius", "Sco", ZodiacSign::Scorpio),
    ("Sagittarius", "Sgr", ZodiacSign::Sagittarius),
    ("Capricornus", "Cap", ZodiacSign::Capricorn),
    ("Aquarius", "Aqr", ZodiacSign::Aquarius),
    ("Pisces", "Psc", ZodiacSign::Pisces),
    ("Ophiuchus", "Oph", ZodiacSign::Scorpio),
    ("Serpens", "Ser", ZodiacSign::Scorpio),
    ("Cetus", "Cet", ZodiacSign::Pisces),
    ("Pegasus", "Peg", ZodiacSign::Pisces),
    ("Orion", "Ori", ZodiacSign::Taurus),
    ("Auriga", "Aur", ZodiacSign::Gemini),
    ("Canis Minor", "CMi", ZodiacSign::Cancer),
    ("Hydra", "Hya", ZodiacSign::Leo),
    ("Sextans", "Sex", ZodiacSign::Leo),
    ("Crater", "Crt", ZodiacSign::Virgo),
    ("Corvus", "Crv", ZodiacSign::Virgo),
    ("Aquila", "Aql", ZodiacSign::Capricorn),
];

/// Astrological spellings some providers use for the constellation names.
const SIGN_SPELLINGS: [(&str, ZodiacSign); 2] = [
    ("Scorpio", ZodiacSign::Scorpio),
    ("Capricorn", ZodiacSign::Capricorn),
];

struct ConstellationTable {
    by_abbreviation: HashMap<&'static str, ZodiacSign>,
    /// Keys are lowercase.
    by_name: HashMap<String, ZodiacSign>,
}

static CONSTELLATION_TABLE: LazyLock<ConstellationTable> = LazyLock::new(|| {
    let by_abbreviation = CONSTELLATION_SIGNS
        .iter()
        .map(|(_, abbr, sign)| (*abbr, *sign))
        .collect();

    let by_name = CONSTELLATION_SIGNS
        .iter()
        .map(|(name, _, sign)| (*name, *sign))
        .chain(SIGN_SPELLINGS)
        .map(|(name, sign)| (name.to_ascii_lowercase(), sign))
        .collect();

    ConstellationTable {
        by_abbreviation,
        by_name,
    }
});

/// Map a constellation label to its zodiac sign.
///
/// Arguments
/// -----------------
/// * `name`: full IAU name (`"Ophiuchus"`, any ASCII case) or IAU abbreviation (`"Oph"`).
///
/// Return
/// ----------
/// * The mapped [`ZodiacSign`], or [`StarsignError::UnmappedConstellation`] carrying the
///   trimmed input when the label is not in the table.
///
/// Examples
/// -----------------
/// ```rust
/// use starsign::constellations::map_constellation_to_sign;
/// use starsign::zodiac::ZodiacSign;
///
/// assert_eq!(map_constellation_to_sign("Scorpius"), Ok(ZodiacSign::Scorpio));
/// assert_eq!(map_constellation_to_sign("Oph"), Ok(ZodiacSign::Scorpio));
/// assert!(map_constellation_to_sign("Ursa Major").is_err());
/// ```
pub fn map_constellation_to_sign(name: &str) -> Result<ZodiacSign, StarsignError> {
    let key = name.trim();

    if let Some(sign) = CONSTELLATION_TABLE.by_abbreviation.get(key) {
        return Ok(*sign);
    }

    CONSTELLATION_TABLE
        .by_name
        .get(&key.to_ascii_lowercase())
        .copied()
        .ok_or_else(|| {
            warn!("No zodiac sign mapped for constellation {key:?}");
            StarsignError::UnmappedConstellation(key.to_string())
        })
}

impl ZodiacSign {
    /// Same as [`map_constellation_to_sign`].
    pub fn from_constellation(name: &str) -> Result<ZodiacSign, StarsignError> {
        map_constellation_to_sign(name)
    }
}
