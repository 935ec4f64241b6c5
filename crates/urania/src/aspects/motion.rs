//! Applying/separating classification from angular velocity.

use crate::angles::minimal_separation;
use crate::points::AspectPoint;

/// Forward step used to project both points, in days
pub const PROJECTION_STEP_DAYS: f64 = 0.001;

/// Deviations below this are treated as an exact aspect
pub const EXACT_TOLERANCE: f64 = 1e-9;

/// Deviation of a pair of longitudes from a canonical angle
pub fn deviation(lon_a: f64, lon_b: f64, angle: f64) -> f64 {
    (minimal_separation(lon_a, lon_b) - angle).abs()
}

/// Whether the pair is closing on `angle`.
///
/// Both points are moved forward by [`PROJECTION_STEP_DAYS`] at their own
/// speed (stationary points stay put); the aspect applies when the projected
/// deviation is strictly smaller than the current one.
pub fn is_applying(a: &AspectPoint, b: &AspectPoint, angle: f64) -> bool {
    let now = deviation(a.longitude, b.longitude, angle);
    let next = deviation(
        a.longitude + a.motion.speed() * PROJECTION_STEP_DAYS,
        b.longitude + b.motion.speed() * PROJECTION_STEP_DAYS,
        angle,
    );
    next < now
}

pub fn is_exact(deviation: f64) -> bool {
    deviation.abs() < EXACT_TOLERANCE
}
