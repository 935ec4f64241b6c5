use crate::ephemeris::provider::EphemerisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// One body as reported by the ephemeris provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees (not necessarily normalized)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// Raw output of a house-system query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawHouses {
    /// Cusps 1..12, in order
    pub cusps: [f64; 12],
    pub asc: f64,
    pub mc: f64,
    pub armc: f64,
    pub vertex: f64,
}

/// House system mapping (name, Swiss Ephemeris letter)
const HOUSE_SYSTEMS: &[(&str, char, HouseSystem)] = &[
    ("placidus", 'P', HouseSystem::Placidus),
    ("koch", 'K', HouseSystem::Koch),
    ("equal", 'E', HouseSystem::Equal),
    ("whole_sign", 'W', HouseSystem::WholeSign),
    ("regiomontanus", 'R', HouseSystem::Regiomontanus),
    ("campanus", 'C', HouseSystem::Campanus),
    ("alcabitius", 'A', HouseSystem::Alcabitius),
    ("morinus", 'M', HouseSystem::Morinus),
    ("porphyry", 'O', HouseSystem::Porphyry),
    ("topocentric", 'T', HouseSystem::Topocentric),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
    Porphyry,
    Topocentric,
}

impl HouseSystem {
    /// Single-letter code understood by Swiss-Ephemeris-style providers
    pub fn code(&self) -> char {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| system == self)
            .map(|(_, code, _)| *code)
            .unwrap_or('P')
    }

    pub fn name(&self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }

    /// Whether house placement depends on a body's ecliptic latitude.
    ///
    /// Systems defined by dividing the ecliptic itself place a body by
    /// longitude alone.
    pub fn uses_body_latitude(&self) -> bool {
        !matches!(
            self,
            HouseSystem::Equal | HouseSystem::WholeSign | HouseSystem::Porphyry
        )
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    /// Accepts either the name (`"whole_sign"`) or the letter (`"W"`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, code, _)| {
                *name == wanted || (wanted.len() == 1 && wanted.starts_with(code.to_ascii_lowercase()))
            })
            .map(|(_, _, system)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

/// Ayanamsa names accepted by `FromStr`
const AYANAMSAS: &[(&str, Ayanamsa)] = &[
    ("lahiri", Ayanamsa::Lahiri),
    ("chitrapaksha", Ayanamsa::Lahiri),
    ("fagan_bradley", Ayanamsa::FaganBradley),
    ("de_luce", Ayanamsa::DeLuce),
    ("raman", Ayanamsa::Raman),
    ("krishnamurti", Ayanamsa::Krishnamurti),
    ("yukteshwar", Ayanamsa::Yukteshwar),
    ("djwhal_khul", Ayanamsa::DjwhalKhul),
    ("true_citra", Ayanamsa::TrueCitra),
    ("true_revati", Ayanamsa::TrueRevati),
    ("aryabhata", Ayanamsa::Aryabhata),
    ("aryabhata_mean_sun", Ayanamsa::AryabhataMeanSun),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    #[default]
    Lahiri,
    FaganBradley,
    DeLuce,
    Raman,
    Krishnamurti,
    Yukteshwar,
    DjwhalKhul,
    TrueCitra,
    TrueRevati,
    Aryabhata,
    AryabhataMeanSun,
}

impl FromStr for Ayanamsa {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AYANAMSAS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, ayanamsa)| *ayanamsa)
            .ok_or_else(|| EphemerisError::InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Zodiac frame requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "ayanamsa")]
pub enum Zodiac {
    #[default]
    Tropical,
    Sidereal(Ayanamsa),
}
