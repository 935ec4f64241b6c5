//! Circular arithmetic on ecliptic longitudes.
//!
//! Every formula in the engine is expressed through [`normalize`] and
//! [`minimal_separation`]; nothing else should reduce angles by hand.

/// Map any real angle into `[0, 360)`.
///
/// Negative inputs wrap forward, so `normalize(-30.0) == 330.0`.
pub fn normalize(x: f64) -> f64 {
    let v = x.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if v >= 360.0 {
        0.0
    } else {
        v
    }
}

/// Length of the shorter arc between two longitudes, always in `[0, 180]`.
pub fn minimal_separation(a: f64, b: f64) -> f64 {
    let d = (normalize(a) - normalize(b)).abs();
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// The point directly across the wheel.
pub fn antipodal(lon: f64) -> f64 {
    normalize(lon + 180.0)
}

/// Round to a fixed number of decimal places for output records.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
