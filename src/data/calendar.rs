//! Conversion of ARGO `JULD` day offsets to calendar time.

use super::sentinel::is_valid_reading;
use chrono::{DateTime, Duration, TimeZone, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Reference epoch of the `JULD` variable: 1950-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Convert a day offset from the 1950 epoch to a timestamp.
///
/// Unknown dates (absent, non-finite or fill-valued) map to the current time.
pub fn to_calendar(value: Option<f64>) -> DateTime<Utc> {
    to_calendar_at(value, Utc::now())
}

/// Same as [`to_calendar`] with an explicit "now" for unknown dates.
pub fn to_calendar_at(value: Option<f64>, now: DateTime<Utc>) -> DateTime<Utc> {
    if !is_valid_reading(value) {
        return now;
    }
    let days = value.unwrap_or_default();
    let millis = (days * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return now;
    }
    Duration::try_milliseconds(millis as i64)
        .and_then(|offset| epoch().checked_add_signed(offset))
        .unwrap_or(now)
}
