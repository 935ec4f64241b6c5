use crate::ephemeris::types::{GeoLocation, HouseSystem, RawHouses, RawPosition, Zodiac};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Unknown body code {code}")]
    UnknownBody { code: i32 },
    #[error("Failed to calculate position for body {code} at JD {jd_ut}: {message}")]
    CalculationFailed { code: i32, jd_ut: f64, message: String },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Ephemeris data unavailable: {message}")]
    DataUnavailable { message: String },
}

/// Inputs of a continuous house-position lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePositionQuery {
    pub armc: f64,
    pub geo_lat: f64,
    pub obliquity: f64,
    pub system: HouseSystem,
    /// Ecliptic longitude of the point being placed
    pub longitude: f64,
    /// Ecliptic latitude of the point being placed
    pub latitude: f64,
}

/// Continuous house position of an arbitrary ecliptic point.
///
/// Implementations return a value in `(0, 12]` where house `k` spans
/// `(k - 1, k]`, or `None` when the geometry cannot be resolved (unsupported
/// system, circumpolar degeneracy).
pub trait HousePositionSource {
    fn house_position(&self, query: &HousePositionQuery) -> Option<f64>;
}

/// The external ephemeris capability the engine is driven by.
///
/// All calls are synchronous and must be safe to issue from several charts at
/// once; the engine never retries.
pub trait EphemerisProvider: HousePositionSource {
    /// Position and speed of one body at a Julian Day (UT)
    fn body_position(
        &self,
        jd_ut: f64,
        code: i32,
        zodiac: Zodiac,
    ) -> Result<RawPosition, EphemerisError>;

    /// Cusps and angles for a location and house system
    fn house_cusps(
        &self,
        jd_ut: f64,
        location: GeoLocation,
        system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<RawHouses, EphemerisError>;

    /// True obliquity of the ecliptic in degrees
    fn true_obliquity(&self, jd_ut: f64) -> Result<f64, EphemerisError>;
}
