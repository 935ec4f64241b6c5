use crate::angles::normalize;
use crate::ephemeris::HousePositionSource;
use crate::houses::types::{HouseFrame, HousePlacement};

/// Answers house-position questions for one frame
pub struct HouseResolver<'a, S: HousePositionSource + ?Sized> {
    frame: &'a HouseFrame,
    source: &'a S,
}

impl<'a, S: HousePositionSource + ?Sized> HouseResolver<'a, S> {
    pub fn new(frame: &'a HouseFrame, source: &'a S) -> Self {
        Self { frame, source }
    }

    /// Continuous house position, or `None` when the lookup fails.
    ///
    /// The latitude is only forwarded for systems that depend on it.
    pub fn position_of(&self, longitude: f64, latitude: f64) -> Option<f64> {
        let latitude = if self.frame.system.uses_body_latitude() {
            latitude
        } else {
            0.0
        };
        let query = self.frame.position_query(normalize(longitude), latitude);
        self.source
            .house_position(&query)
            .filter(|position| position.is_finite())
    }

    pub fn placement_of(&self, longitude: f64, latitude: f64) -> Option<HousePlacement> {
        self.position_of(longitude, latitude)
            .map(HousePlacement::from_position)
    }
}

/// House position found by interpolating between cusps.
///
/// Inside house `k` the result runs from `k - 1` towards `k` at the next
/// cusp. A longitude exactly on cusp `k` reports `k`, so it belongs to the
/// house the cusp opens and stays inside `(0, 12]`. Degenerate (zero-width)
/// houses are skipped.
pub fn cusp_house_position(cusps: &[f64; 12], longitude: f64) -> Option<f64> {
    let lon = normalize(longitude);
    for k in 0..12 {
        let start = normalize(cusps[k]);
        let end = normalize(cusps[(k + 1) % 12]);
        let width = normalize(end - start);
        if width <= 0.0 {
            continue;
        }
        let offset = normalize(lon - start);
        if offset == 0.0 {
            return Some((k + 1) as f64);
        }
        if offset < width {
            return Some(k as f64 + offset / width);
        }
    }
    None
}
