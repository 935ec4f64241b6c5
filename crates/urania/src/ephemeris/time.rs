use chrono::{DateTime, TimeZone, Utc};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a UTC instant to a Julian Day in Universal Time
pub fn julian_day_ut(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Convert a Julian Day (UT) back to a UTC instant, to the nearest millisecond.
///
/// Returns `None` for days outside chrono's representable range.
pub fn datetime_from_julian_day(jd_ut: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_epoch() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_day_ut(dt), 2_451_545.0);
    }

    #[test]
    fn test_unix_epoch() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(julian_day_ut(dt), UNIX_EPOCH_JD);
    }

    #[test]
    fn test_round_trip() {
        let dt = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
        let back = datetime_from_julian_day(julian_day_ut(dt)).unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn test_out_of_range() {
        assert!(datetime_from_julian_day(f64::NAN).is_none());
        assert!(datetime_from_julian_day(1e300).is_none());
    }
}
