use crate::angles::{antipodal, normalize, round_to};
use crate::ephemeris::{HousePositionQuery, HouseSystem, RawHouses};
use serde::{Deserialize, Serialize};

/// Normalized house-system output for one chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub system: HouseSystem,
    /// Cusps 1..12 in `[0, 360)`
    pub cusps: [f64; 12],
    pub asc: f64,
    pub mc: f64,
    /// Right ascension of the MC; an input to house-position queries only
    pub armc: f64,
    /// True obliquity of the ecliptic
    pub obliquity: f64,
    pub vertex: f64,
    /// Geographic latitude the frame was cast for
    pub geo_lat: f64,
}

impl HouseFrame {
    pub fn from_raw(raw: &RawHouses, system: HouseSystem, geo_lat: f64, obliquity: f64) -> Self {
        Self {
            system,
            cusps: raw.cusps.map(normalize),
            asc: normalize(raw.asc),
            mc: normalize(raw.mc),
            armc: raw.armc,
            obliquity,
            vertex: normalize(raw.vertex),
            geo_lat,
        }
    }

    /// Cusp by its 1-based house number
    pub fn cusp(&self, house: u8) -> Option<f64> {
        match house {
            1..=12 => Some(self.cusps[usize::from(house) - 1]),
            _ => None,
        }
    }

    pub fn dsc(&self) -> f64 {
        antipodal(self.asc)
    }

    pub fn ic(&self) -> f64 {
        antipodal(self.mc)
    }

    pub fn anti_vertex(&self) -> f64 {
        antipodal(self.vertex)
    }

    pub fn position_query(&self, longitude: f64, latitude: f64) -> HousePositionQuery {
        HousePositionQuery {
            armc: self.armc,
            geo_lat: self.geo_lat,
            obliquity: self.obliquity,
            system: self.system,
            longitude,
            latitude,
        }
    }
}

/// Where a point falls in the house wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    /// Discrete house number, 1..=12
    pub house: u8,
    /// Continuous position in `(0, 12]`, rounded to 4 places
    pub position: f64,
}

impl HousePlacement {
    /// `ceil(position)`, with non-positive positions placed in house 1.
    pub fn from_position(position: f64) -> Self {
        let house = if position <= 0.0 {
            1
        } else {
            position.ceil().clamp(1.0, 12.0) as u8
        };
        Self {
            house,
            position: round_to(position, 4),
        }
    }
}
