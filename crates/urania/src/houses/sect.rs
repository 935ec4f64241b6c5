//! Day/night (sect) classification of a chart.

use crate::ephemeris::HousePositionSource;
use crate::houses::resolver::HouseResolver;
use log::warn;
use serde::{Deserialize, Serialize};

/// Houses 7..=12 lie above the horizon
const HORIZON_POSITION: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sect {
    Diurnal,
    Nocturnal,
}

impl Sect {
    /// Classify from the Sun's continuous house position.
    ///
    /// An unknown position yields a day chart.
    pub fn from_sun_position(position: Option<f64>) -> Self {
        match position {
            Some(p) if p <= HORIZON_POSITION => Sect::Nocturnal,
            _ => Sect::Diurnal,
        }
    }

    pub fn is_diurnal(&self) -> bool {
        matches!(self, Sect::Diurnal)
    }
}

/// Sect of the chart described by `resolver`, given the Sun's longitude.
///
/// The Sun is placed on the ecliptic (latitude 0).
pub fn classify_sect<S: HousePositionSource + ?Sized>(
    resolver: &HouseResolver<'_, S>,
    sun_longitude: f64,
) -> Sect {
    let position = resolver.position_of(sun_longitude, 0.0);
    if position.is_none() {
        warn!(
            "house position of the Sun at {:.4} is unknown; assuming a day chart",
            sun_longitude
        );
    }
    Sect::from_sun_position(position)
}
