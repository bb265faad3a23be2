//! # Zodiac signs and positions
//!
//! The twelve tropical signs in canonical order, starting at the vernal equinox, and the
//! [`ZodiacPosition`] value (sign + degree within the sign) that every resolution in the
//! crate returns.
//!
//! ```rust
//! use starsign::zodiac::{ZodiacPosition, ZodiacSign};
//!
//! let pos = ZodiacPosition::from_longitude(132.5);
//! assert_eq!(pos.sign, ZodiacSign::Leo);
//! assert_eq!(pos.to_string(), "Leo 12.50°");
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{normalize_degrees, Degree, SIGN_COUNT, SIGN_WIDTH};
use crate::starsign_errors::StarsignError;

/// One of the twelve 30° divisions of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiac order, Aries = 0 through Pisces = 11.
pub const ZODIAC_ORDER: [ZodiacSign; SIGN_COUNT] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality (quality) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    /// 0-based position in [`ZODIAC_ORDER`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ZodiacSign> {
        ZODIAC_ORDER.get(index).copied()
    }

    /// The sign before this one, Aries wraps to Pisces.
    pub fn previous(self) -> ZodiacSign {
        ZODIAC_ORDER[(self.index() + SIGN_COUNT - 1) % SIGN_COUNT]
    }

    /// The sign after this one, Pisces wraps to Aries.
    pub fn next(self) -> ZodiacSign {
        ZODIAC_ORDER[(self.index() + 1) % SIGN_COUNT]
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }

    /// Elements cycle Fire, Earth, Air, Water starting from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Modalities cycle Cardinal, Fixed, Mutable starting from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = StarsignError;

    /// Case-insensitive sign name, e.g. `"leo"` or `"Sagittarius"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ZODIAC_ORDER
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StarsignError::UnknownSign(trimmed.to_string()))
    }
}

/// A point on the ecliptic expressed as a sign and a degree within it.
///
/// Invariant: `degree_within_sign` lies in `[0, 30)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    pub degree_within_sign: Degree,
}

impl ZodiacPosition {
    /// Bucket an ecliptic longitude (degrees, any range) into sign and degree.
    ///
    /// The longitude is reduced into `[0, 360)`, the sign index is
    /// `floor(longitude / 30)` clamped to `[0, 11]`, and the remainder is the degree.
    /// The longitude must be finite; the resolvers reject NaN and infinities before
    /// bucketing.
    pub fn from_longitude(longitude: Degree) -> ZodiacPosition {
        debug_assert!(
            longitude.is_finite(),
            "ecliptic longitude must be finite, got {longitude}"
        );
        let lon = normalize_degrees(longitude);
        let index = ((lon / SIGN_WIDTH).floor() as usize).min(SIGN_COUNT - 1);
        let degree = (lon - index as f64 * SIGN_WIDTH).clamp(0.0, SIGN_WIDTH);

        // lon just below 360 can round the remainder up to exactly 30
        if degree >= SIGN_WIDTH {
            return ZodiacPosition::whole_sign(ZODIAC_ORDER[(index + 1) % SIGN_COUNT]);
        }

        ZodiacPosition {
            sign: ZODIAC_ORDER[index],
            degree_within_sign: degree,
        }
    }

    /// Position at 0° of the given sign, used when only the sign is known.
    pub fn whole_sign(sign: ZodiacSign) -> ZodiacPosition {
        ZodiacPosition {
            sign,
            degree_within_sign: 0.0,
        }
    }

    /// Ecliptic longitude in `[0, 360)` reconstructed from sign and degree.
    pub fn longitude(&self) -> Degree {
        self.sign.index() as f64 * SIGN_WIDTH + self.degree_within_sign
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}°", self.sign, self.degree_within_sign)
    }
}
