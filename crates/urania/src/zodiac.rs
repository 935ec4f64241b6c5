//! The twelve 30° sectors of the tropical/sidereal zodiac.

use crate::angles::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
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

const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign containing an ecliptic longitude (any real value, wrapped).
    pub fn from_longitude(lon: f64) -> Self {
        let index = (normalize(lon) / 30.0).floor() as usize;
        SIGN_ORDER[index % 12]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees past the start of the containing sign, in `[0, 30)`.
pub fn degree_in_sign(lon: f64) -> f64 {
    normalize(lon) % 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.5), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-0.5), Sign::Pisces);
    }

    #[test]
    fn test_degree_in_sign() {
        assert!((degree_in_sign(135.25) - 15.25).abs() < 1e-9);
        assert!((degree_in_sign(-10.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_sign_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Sign::Capricorn).unwrap(), "\"Capricorn\"");
    }
}
