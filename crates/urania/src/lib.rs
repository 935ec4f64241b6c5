//! Chart geometry and aspect engine.
//!
//! Turns body readings and house-system output from an ephemeris provider
//! into a resolved chart: house placements, day/night sect, lots, and a
//! sorted list of orb-matched aspects with applying/separating motion.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod lots;
pub mod points;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectSettings, OrbTable};
pub use chart::{cast_chart, compute_chart, Chart, ChartRequest, ChartSettings};
pub use ephemeris::{
    BodyCatalog, CannedEphemeris, EphemerisError, EphemerisProvider, GeoLocation, HouseSystem,
    Zodiac,
};
pub use error::ChartError;
