use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Failures that prevent a chart from being cast at all
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid location: lat {lat}, lon {lon}")]
    InvalidLocation { lat: f64, lon: f64 },

    #[error("House frame unavailable: {0}")]
    HouseFrame(#[source] EphemerisError),

    #[error("Obliquity unavailable: {0}")]
    Obliquity(#[source] EphemerisError),
}
