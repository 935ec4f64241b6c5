//! Table-driven ephemeris for fixtures, benches and offline use.
//!
//! A `CannedEphemeris` answers every query from frozen readings regardless of
//! the instant or location asked for. House positions are interpolated
//! between the canned cusps.

use crate::ephemeris::provider::{
    EphemerisError, EphemerisProvider, HousePositionQuery, HousePositionSource,
};
use crate::ephemeris::types::{GeoLocation, HouseSystem, RawHouses, RawPosition, Zodiac};
use crate::houses::cusp_house_position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean obliquity at J2000, used when a fixture does not set one
pub const DEFAULT_OBLIQUITY: f64 = 23.4392911;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CannedBody {
    Position(RawPosition),
    Failure { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedEphemeris {
    /// Body code -> reading
    #[serde(default)]
    bodies: BTreeMap<i32, CannedBody>,
    #[serde(default)]
    houses: Option<RawHouses>,
    #[serde(default)]
    house_error: Option<String>,
    #[serde(default = "default_obliquity")]
    obliquity: f64,
    /// Makes every house-position lookup fail
    #[serde(default)]
    house_positions_unavailable: bool,
}

fn default_obliquity() -> f64 {
    DEFAULT_OBLIQUITY
}

impl Default for CannedEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl CannedEphemeris {
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
            houses: None,
            house_error: None,
            obliquity: DEFAULT_OBLIQUITY,
            house_positions_unavailable: false,
        }
    }

    /// Load a fixture written as JSON
    pub fn from_json(json: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(json).map_err(|e| EphemerisError::DataUnavailable {
            message: format!("invalid canned ephemeris: {}", e),
        })
    }

    pub fn with_body(mut self, code: i32, position: RawPosition) -> Self {
        self.bodies.insert(code, CannedBody::Position(position));
        self
    }

    /// Shorthand for a body with no latitude and unit distance
    pub fn with_longitude(self, code: i32, longitude: f64, speed: f64) -> Self {
        self.with_body(
            code,
            RawPosition {
                longitude,
                latitude: 0.0,
                distance: 1.0,
                speed,
            },
        )
    }

    pub fn with_failed_body(mut self, code: i32, message: impl Into<String>) -> Self {
        self.bodies.insert(
            code,
            CannedBody::Failure {
                error: message.into(),
            },
        );
        self
    }

    pub fn with_houses(mut self, houses: RawHouses) -> Self {
        self.houses = Some(houses);
        self.house_error = None;
        self
    }

    /// Equal 30° houses starting at `asc`, with MC on cusp 10
    pub fn with_equal_houses(self, asc: f64, armc: f64, vertex: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = crate::angles::normalize(asc + 30.0 * i as f64);
        }
        self.with_houses(RawHouses {
            cusps,
            asc,
            mc: cusps[9],
            armc,
            vertex,
        })
    }

    pub fn with_house_failure(mut self, message: impl Into<String>) -> Self {
        self.house_error = Some(message.into());
        self
    }

    pub fn without_house_positions(mut self) -> Self {
        self.house_positions_unavailable = true;
        self
    }
}

impl HousePositionSource for CannedEphemeris {
    fn house_position(&self, query: &HousePositionQuery) -> Option<f64> {
        if self.house_positions_unavailable {
            return None;
        }
        let houses = self.houses.as_ref()?;
        cusp_house_position(&houses.cusps, query.longitude)
    }
}

impl EphemerisProvider for CannedEphemeris {
    fn body_position(
        &self,
        jd_ut: f64,
        code: i32,
        _zodiac: Zodiac,
    ) -> Result<RawPosition, EphemerisError> {
        match self.bodies.get(&code) {
            Some(CannedBody::Position(position)) => Ok(*position),
            Some(CannedBody::Failure { error }) => Err(EphemerisError::CalculationFailed {
                code,
                jd_ut,
                message: error.clone(),
            }),
            None => Err(EphemerisError::UnknownBody { code }),
        }
    }

    fn house_cusps(
        &self,
        _jd_ut: f64,
        _location: GeoLocation,
        _system: HouseSystem,
        _zodiac: Zodiac,
    ) -> Result<RawHouses, EphemerisError> {
        if let Some(message) = &self.house_error {
            return Err(EphemerisError::HouseCalculationFailed {
                message: message.clone(),
            });
        }
        self.houses
            .ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: "no canned house cusps".to_string(),
            })
    }

    fn true_obliquity(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(self.obliquity)
    }
}
